//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the case, classification, and simulation logic so
//! route handlers stay focused on protocol translation. Everything here is
//! synchronous and free of timers; pacing and I/O belong to the routes.

pub mod agents;
pub mod cases;
pub mod classifier;
pub mod feedback;
pub mod simulation;
