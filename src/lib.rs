//! FitPulse Library
//!
//! Nutrition target estimation and fitness reference data.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
