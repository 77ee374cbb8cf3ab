//! The planner — orchestrates distribution and shift generation into a
//! full staffing plan for a zone.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Per working hour: total volume -> operators needed -> proportional
//!      distribution across the provinces staffed that hour.
//!   2. Per province: generate the roster exactly once, sized to the
//!      province's peak assignment across the day.
//!   3. Per working hour: project the period view (active shifts, break
//!      minutes) from the immutable rosters.
//!
//! RULES:
//!   - Rosters are never regenerated after step 2. Manual adjustments
//!     only re-run the step-3 projection, selecting a subset of the
//!     existing roster.
//!   - Same inputs, same plan — byte-identical after serialization.

use crate::config::SystemParameters;
use crate::distribution::{distribute, operators_needed, Assignment};
use crate::shifts::{generate_shifts, OperatorShift};
use crate::types::{Hour, ProvinceId};
use crate::volume::HourlyVolumes;
use crate::zone::Province;
use serde::{Deserialize, Serialize};

/// The full generated roster for one province, in canonical
/// ascending-`shift_id` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceRoster {
    pub province_id: ProvinceId,
    pub shifts:      Vec<OperatorShift>,
}

/// One province's slice of an hour: assigned operator count, aggregate
/// break minutes, and the active shifts backing the assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvinceDistribution {
    pub province_id:   ProvinceId,
    pub assigned:      u32,
    pub break_minutes: u32,
    pub shifts:        Vec<OperatorShift>,
}

/// One hour of the working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionPeriod {
    pub hour:             Hour,
    pub call_volume:      u32,
    pub operators_needed: u32,
    pub provinces:        Vec<ProvinceDistribution>,
}

/// A computed staffing plan: per-province rosters plus the per-hour
/// distribution table. Derived and transient: recomputed on every
/// calculate call, persisted only on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingPlan {
    pub rosters: Vec<ProvinceRoster>,
    pub periods: Vec<DistributionPeriod>,
}

impl StaffingPlan {
    pub fn roster_for(&self, province_id: &str) -> Option<&ProvinceRoster> {
        self.rosters.iter().find(|r| r.province_id == province_id)
    }

    pub fn period_at(&self, hour: Hour) -> Option<&DistributionPeriod> {
        self.periods.iter().find(|p| p.hour == hour)
    }
}

pub struct Planner {
    params: SystemParameters,
}

impl Planner {
    pub fn new(params: SystemParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SystemParameters {
        &self.params
    }

    /// Compute the staffing plan for one zone and one call-volume
    /// series. Pure: no I/O, no hidden state.
    pub fn calculate(&self, provinces: &[Province], volumes: &HourlyVolumes) -> StaffingPlan {
        let hours: Vec<Hour> = (0..24)
            .filter(|&h| provinces.iter().any(|p| p.covers_hour(h)))
            .collect();

        let mut hourly: Vec<(Hour, u32, u32, Vec<Assignment>)> = Vec::with_capacity(hours.len());
        for &hour in &hours {
            let volume = volumes.get(hour);
            let needed = operators_needed(volume, self.params.average_response_rate);
            let assignments = distribute(needed, provinces, &[hour]);
            hourly.push((hour, volume, needed, assignments));
        }

        let rosters: Vec<ProvinceRoster> = provinces
            .iter()
            .map(|province| {
                let peak = hourly
                    .iter()
                    .flat_map(|(_, _, _, assignments)| assignments.iter())
                    .filter(|a| a.province_id == province.province_id)
                    .map(|a| a.operators)
                    .max()
                    .unwrap_or(0);
                let shifts = generate_shifts(
                    province,
                    peak,
                    self.params.attendance_duration,
                    self.params.standard_break_time,
                );
                log::debug!(
                    "roster {}: peak={} emitted={}",
                    province.province_id,
                    peak,
                    shifts.len()
                );
                ProvinceRoster {
                    province_id: province.province_id.clone(),
                    shifts,
                }
            })
            .collect();

        let periods = hourly
            .into_iter()
            .map(|(hour, volume, needed, assignments)| {
                project_period(
                    hour,
                    volume,
                    needed,
                    &assignments,
                    &rosters,
                    self.params.standard_break_time,
                )
            })
            .collect();

        log::info!(
            "plan computed: {} provinces, {} working hours",
            provinces.len(),
            hours.len()
        );

        StaffingPlan { rosters, periods }
    }

    /// Re-run the projection for one hour with a manually adjusted
    /// operator count. The rosters are untouched; the adjustment only
    /// selects a different subset of the generated shifts.
    pub fn adjust(
        &self,
        plan: &StaffingPlan,
        hour: Hour,
        province_id: &str,
        operators: u32,
    ) -> StaffingPlan {
        let mut adjusted = plan.clone();
        for period in &mut adjusted.periods {
            if period.hour != hour {
                continue;
            }
            let assignments: Vec<Assignment> = period
                .provinces
                .iter()
                .map(|pd| Assignment {
                    province_id: pd.province_id.clone(),
                    operators: if pd.province_id == province_id {
                        operators
                    } else {
                        pd.assigned
                    },
                })
                .collect();
            *period = project_period(
                hour,
                period.call_volume,
                period.operators_needed,
                &assignments,
                &plan.rosters,
                self.params.standard_break_time,
            );
        }
        adjusted
    }
}

/// Derive one hour's view from the immutable rosters: filter each
/// province's roster to shifts active at `hour`, truncate to the
/// assigned count, and charge `break_time` minutes per break window
/// starting in that hour.
pub fn project_period(
    hour: Hour,
    call_volume: u32,
    needed: u32,
    assignments: &[Assignment],
    rosters: &[ProvinceRoster],
    break_time: u32,
) -> DistributionPeriod {
    let provinces = assignments
        .iter()
        .map(|assignment| {
            let shifts: Vec<OperatorShift> = rosters
                .iter()
                .find(|r| r.province_id == assignment.province_id)
                .map(|roster| {
                    roster
                        .shifts
                        .iter()
                        .filter(|s| s.is_active_at(hour))
                        .take(assignment.operators as usize)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            let on_break = shifts.iter().filter(|s| s.on_break_at(hour)).count() as u32;

            ProvinceDistribution {
                province_id:   assignment.province_id.clone(),
                assigned:      assignment.operators,
                break_minutes: on_break * break_time,
                shifts,
            }
        })
        .collect();

    DistributionPeriod {
        hour,
        call_volume,
        operators_needed: needed,
        provinces,
    }
}
