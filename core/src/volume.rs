//! Hourly call-volume data, partitioned by day type.

use crate::types::{Hour, ZoneId};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Partitions call-volume series: weekdays vs. public holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Regular,
    Holiday,
}

impl DayType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown day type '{0}', expected 'regular' or 'holiday'")]
pub struct ParseDayTypeError(String);

impl FromStr for DayType {
    type Err = ParseDayTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Self::Regular),
            "holiday" => Ok(Self::Holiday),
            other => Err(ParseDayTypeError(other.to_string())),
        }
    }
}

impl ToSql for DayType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for DayType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        s.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// One hour of recorded call volume for a (zone, day-type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallVolumePoint {
    pub zone_id:  ZoneId,
    pub day_type: DayType,
    pub hour:     Hour,
    pub calls:    u32,
}

/// A dense 24-slot call-volume series. Hours with no recorded point
/// read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyVolumes([u32; 24]);

impl HourlyVolumes {
    pub fn new(slots: [u32; 24]) -> Self {
        Self(slots)
    }

    /// Assemble a series from recorded points. A later point for the
    /// same hour overwrites an earlier one.
    pub fn from_points(points: &[CallVolumePoint]) -> Self {
        let mut slots = [0u32; 24];
        for p in points {
            if usize::from(p.hour) < 24 {
                slots[usize::from(p.hour)] = p.calls;
            }
        }
        Self(slots)
    }

    pub fn get(&self, hour: Hour) -> u32 {
        self.0.get(usize::from(hour)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}
