//! Global tuning parameters.
//!
//! The defaults (420/10/80) match the values administrators start from;
//! the planner receives a `SystemParameters` value explicitly — nothing
//! in the core reads configuration on its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParameters {
    /// Minutes an operator is present per shift.
    #[serde(default = "default_attendance_duration")]
    pub attendance_duration: u32,

    /// Minutes of break granted per break window.
    #[serde(default = "default_standard_break_time")]
    pub standard_break_time: u32,

    /// Calls one operator handles per hour. Must be > 0 to produce any
    /// demand; non-positive values yield zero operators needed.
    #[serde(default = "default_average_response_rate")]
    pub average_response_rate: f64,
}

fn default_attendance_duration() -> u32 {
    420
}

fn default_standard_break_time() -> u32 {
    10
}

fn default_average_response_rate() -> f64 {
    80.0
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            attendance_duration: default_attendance_duration(),
            standard_break_time: default_standard_break_time(),
            average_response_rate: default_average_response_rate(),
        }
    }
}

impl SystemParameters {
    /// Load parameters from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let params: SystemParameters = serde_json::from_str(&content)?;
        Ok(params)
    }
}
