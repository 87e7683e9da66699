//! FitPulse Status Tool
//!
//! Provides runtime status information about the FitPulse service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# FitPulse Nutrition Calculator Instructions

`calculate_nutrition` estimates daily energy needs with the Mifflin-St Jeor
equation and splits the calorie target into macronutrients.

## Required Inputs

| Field | Format | Notes |
|-------|--------|-------|
| age | whole number > 0 | years |
| sex | "male" or "female" | |
| weight_kg | number > 0 | kilograms, convert pounds first (lb / 2.2046) |
| height_cm | number > 0 | centimeters, convert inches first (in * 2.54) |
| activity | level name or multiplier | see below |
| goal | "cut", "maintain" or "bulk" | |

All values may be sent as strings or numbers. Every invalid field is reported
at once in a `fields` list; fix them all and call again.

## Activity Levels

| Value | Multiplier | Meaning |
|-------|------------|---------|
| sedentary | 1.2 | Office job |
| light | 1.375 | 1-2 days/week |
| moderate | 1.55 | 3-5 days/week |
| heavy | 1.725 | 6-7 days/week |
| athlete | 1.9 | Training twice per day |

No other multipliers are accepted.

## Goals

- **cut**: TDEE - 500 kcal
- **maintain**: TDEE
- **bulk**: TDEE + 500 kcal

## Output

- `bmr`, `tdee`, `target_calories` in kcal/day, rounded
- `macros` in grams: protein 30%, fat 25%, carbs 45% of the target
  (4 / 9 / 4 kcal per gram)

Macro grams are rounded individually, so they may not add back to the
exact target. Do not re-round the values; display them as returned.
"#;

/// Runtime status of the FitPulse service
#[derive(Debug, Clone, Serialize)]
pub struct FitPulseStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub catalog_source: String,
    pub exercise_count: usize,
    pub program_count: usize,

    /// Usage since startup
    pub calculations_performed: u64,
    pub calculations_rejected: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    catalog_source: String,
    exercise_count: usize,
    program_count: usize,
    calculations_performed: u64,
    calculations_rejected: u64,
}

impl StatusTracker {
    pub fn new(catalog_source: impl Into<String>, exercise_count: usize, program_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            catalog_source: catalog_source.into(),
            exercise_count,
            program_count,
            calculations_performed: 0,
            calculations_rejected: 0,
        }
    }

    /// Count one calculator call
    pub fn record_calculation(&mut self, accepted: bool) {
        if accepted {
            self.calculations_performed += 1;
        } else {
            self.calculations_rejected += 1;
        }
    }

    pub fn get_status(&self) -> FitPulseStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitPulseStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_source: self.catalog_source.clone(),
            exercise_count: self.exercise_count,
            program_count: self.program_count,
            calculations_performed: self.calculations_performed,
            calculations_rejected: self.calculations_rejected,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
