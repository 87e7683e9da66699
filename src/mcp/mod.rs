//! MCP protocol module
//!
//! Model Context Protocol server exposing the FitPulse tools over stdio.

pub mod server;

pub use server::FitPulseService;
