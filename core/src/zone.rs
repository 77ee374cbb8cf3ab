//! Zones and provinces — the staffing units the planner works over.

use crate::types::{Hour, ProvinceId, ZoneId};
use serde::{Deserialize, Serialize};

/// Top-level grouping of provinces sharing a call queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: ZoneId,
    pub name:    String,
}

/// A staffing unit with its own working-hour window and headcount.
///
/// The window is `[work_start, work_end)` in whole hours; `(0, 24)`
/// means staffed around the clock. `operators` is the headcount
/// ceiling; the distribution never assigns more than this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub province_id: ProvinceId,
    pub zone_id:     ZoneId,
    pub name:        String,
    pub work_start:  Hour,
    pub work_end:    Hour,
    pub operators:   u32,
}

impl Province {
    /// True when hour `h` falls inside the working window.
    pub fn covers_hour(&self, h: Hour) -> bool {
        self.work_start <= h && h < self.work_end
    }

    /// The hours this province is staffed, in ascending order.
    pub fn working_hours(&self) -> impl Iterator<Item = Hour> {
        self.work_start..self.work_end
    }
}
