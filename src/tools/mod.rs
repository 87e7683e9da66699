//! FitPulse Tools module
//!
//! MCP tool implementations for the FitPulse server.

pub mod calculator;
pub mod exercises;
pub mod progress;
pub mod status;
pub mod workouts;
