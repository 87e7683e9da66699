//! Build information module
//!
//! Compile-time build number and timestamp, embedded by `build.rs`.

use serde::Serialize;

use crate::catalog::CatalogProvider;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("FITPULSE_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("FITPULSE_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// `str::parse` is not const, so digits are folded by hand
const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii_digit() {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }
}

const RULE: &str = "===============================================";

/// Startup banner naming the build and the catalog being served
pub fn banner_lines(info: &BuildInfo, catalog_source: &str, catalog: &dyn CatalogProvider) -> Vec<String> {
    vec![
        RULE.to_string(),
        "  FitPulse Nutrition & Training Server".to_string(),
        format!("  Version: {} | Build: {}", info.version, info.build_number),
        format!("  Compiled: {}", info.build_timestamp),
        format!(
            "  Catalog: {} ({} exercises, {} programs)",
            catalog_source,
            catalog.exercises().len(),
            catalog.programs().len()
        ),
        RULE.to_string(),
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner(catalog_source: &str, catalog: &dyn CatalogProvider) {
    for line in banner_lines(&BuildInfo::current(), catalog_source, catalog) {
        eprintln!("{}", line);
    }
}
