//! Shift & break generation — one staggered, fixed-duration shift per
//! operator with four evenly spaced break windows.
//!
//! RULE: Generation is deterministic. Identical inputs always produce
//! an identical roster, down to the serialized `HH:MM` strings.

use crate::clock::ClockTime;
use crate::types::Hour;
use crate::zone::Province;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Consecutive operators start this many minutes apart.
pub const STAGGER_MINUTES: u32 = 15;

/// Each shift carries exactly this many break windows.
pub const BREAKS_PER_SHIFT: usize = 4;

/// A `[start, end)` break interval, serialized as `"HH:MM-HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakWindow {
    pub start: ClockTime,
    pub end:   ClockTime,
}

impl fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid break window '{0}', expected HH:MM-HH:MM")]
pub struct ParseBreakWindowError(String);

impl FromStr for BreakWindow {
    type Err = ParseBreakWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseBreakWindowError(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(bad)?;
        Ok(Self {
            start: start.parse().map_err(|_| bad())?,
            end:   end.parse().map_err(|_| bad())?,
        })
    }
}

impl Serialize for BreakWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BreakWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The four break windows of one shift, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakSchedule(pub [BreakWindow; BREAKS_PER_SHIFT]);

/// One operator's continuous working interval plus break schedule.
/// `shift_id` is 1-based and unique within its province's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorShift {
    pub shift_id:         u32,
    pub start:            ClockTime,
    pub end:              ClockTime,
    pub duration_minutes: u32,
    pub breaks:           BreakSchedule,
}

impl OperatorShift {
    /// Hour-granularity containment: the shift covers hour `h` when
    /// `start_hour <= h < end_hour`, wrap-aware for shifts crossing
    /// midnight. The start boundary ignores the minute offset: an
    /// operator starting at 7:45 counts as active at hour 7.
    pub fn is_active_at(&self, h: Hour) -> bool {
        let start_hour = self.start.hour();
        let end_hour = self.end.hour();
        if start_hour < end_hour {
            start_hour <= h && h < end_hour
        } else if start_hour == end_hour {
            false
        } else {
            h >= start_hour || h < end_hour
        }
    }

    /// True when one of the break windows starts in hour `h`. Windows
    /// straddling an hour boundary are attributed to their start hour.
    pub fn on_break_at(&self, h: Hour) -> bool {
        self.breaks.0.iter().any(|w| w.start.hour() == h)
    }
}

/// Generate the full roster for one province.
///
/// Operator `i` (zero-based) starts `i × 15` minutes after the window
/// opens; an operator whose start hour has already reached `work_end`
/// is not emitted, so the roster length is at most `operator_count`.
/// Breaks fall at `duration / 5`-minute intervals after the shift
/// start, each `break_minutes` long; both shift ends and break windows
/// wrap past midnight.
pub fn generate_shifts(
    province: &Province,
    operator_count: u32,
    shift_minutes: u32,
    break_minutes: u32,
) -> Vec<OperatorShift> {
    let mut roster = Vec::new();
    if operator_count == 0 {
        return roster;
    }

    let break_interval = shift_minutes / 5;

    for i in 0..operator_count {
        let offset = i * STAGGER_MINUTES;
        let start_hour = u32::from(province.work_start) + offset / 60;
        if start_hour >= u32::from(province.work_end) {
            // Offsets only grow; no later operator fits either.
            break;
        }

        let start = ClockTime::from_hm(start_hour, offset % 60);
        let breaks = std::array::from_fn(|k| {
            let begin = start.plus_minutes(break_interval * (k as u32 + 1));
            BreakWindow {
                start: begin,
                end:   begin.plus_minutes(break_minutes),
            }
        });

        roster.push(OperatorShift {
            shift_id:         i + 1,
            start,
            end:              start.plus_minutes(shift_minutes),
            duration_minutes: shift_minutes,
            breaks:           BreakSchedule(breaks),
        });
    }

    roster
}
