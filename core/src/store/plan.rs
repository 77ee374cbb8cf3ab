use super::PlanStore;
use crate::config::SystemParameters;
use crate::distribution::Assignment;
use crate::error::{PlanError, PlanResult};
use crate::planner::{project_period, ProvinceRoster, StaffingPlan};
use crate::shifts::OperatorShift;
use crate::types::{PlanId, ZoneId};
use crate::volume::DayType;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

/// Identity and context of a saved plan, including the parameters it
/// was computed with.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanHeader {
    pub plan_id:    PlanId,
    pub zone_id:    ZoneId,
    pub day_type:   DayType,
    pub plan_date:  NaiveDate,
    pub created_at: String,
    pub parameters: SystemParameters,
}

impl PlanStore {
    // ── Saved plans ────────────────────────────────────────────

    /// Persist a computed plan. Returns the generated plan id.
    pub fn save_plan(
        &self,
        zone_id: &str,
        day_type: DayType,
        plan_date: NaiveDate,
        parameters: &SystemParameters,
        plan: &StaffingPlan,
    ) -> PlanResult<PlanId> {
        let plan_id = format!("plan-{}", Uuid::new_v4());
        let created_at = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO plan (plan_id, zone_id, day_type, plan_date, created_at,
                               attendance_duration, standard_break_time, average_response_rate)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                plan_id,
                zone_id,
                day_type,
                plan_date.to_string(),
                created_at,
                i64::from(parameters.attendance_duration),
                i64::from(parameters.standard_break_time),
                parameters.average_response_rate,
            ],
        )?;

        for period in &plan.periods {
            self.conn.execute(
                "INSERT INTO plan_period (plan_id, hour, call_volume, operators_needed)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    plan_id,
                    i64::from(period.hour),
                    i64::from(period.call_volume),
                    i64::from(period.operators_needed),
                ],
            )?;
            for (ord, pd) in period.provinces.iter().enumerate() {
                self.conn.execute(
                    "INSERT INTO plan_assignment (plan_id, hour, province_id, ord, assigned, break_minutes)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        plan_id,
                        i64::from(period.hour),
                        pd.province_id,
                        ord as i64,
                        i64::from(pd.assigned),
                        i64::from(pd.break_minutes),
                    ],
                )?;
            }
        }

        for (roster_ord, roster) in plan.rosters.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO plan_roster (plan_id, province_id, roster_ord) VALUES (?1, ?2, ?3)",
                params![plan_id, roster.province_id, roster_ord as i64],
            )?;
            for shift in &roster.shifts {
                self.conn.execute(
                    "INSERT INTO plan_shift (plan_id, province_id, shift_id, start_time,
                                             end_time, duration_minutes, breaks_json)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                    params![
                        plan_id,
                        roster.province_id,
                        i64::from(shift.shift_id),
                        shift.start.to_string(),
                        shift.end.to_string(),
                        i64::from(shift.duration_minutes),
                        serde_json::to_string(&shift.breaks)?,
                    ],
                )?;
            }
        }

        log::info!(
            "plan {plan_id} saved: zone={zone_id} day_type={day_type} date={plan_date}"
        );
        Ok(plan_id)
    }

    pub fn get_plan_header(&self, plan_id: &str) -> PlanResult<PlanHeader> {
        let raw = self
            .conn
            .query_row(
                "SELECT plan_id, zone_id, day_type, plan_date, created_at,
                        attendance_duration, standard_break_time, average_response_rate
                 FROM plan WHERE plan_id = ?1",
                params![plan_id],
                raw_header_mapper,
            )
            .optional()?
            .ok_or_else(|| PlanError::PlanNotFound {
                plan_id: plan_id.to_string(),
            })?;
        raw.into_header()
    }

    /// Headers of all saved plans for a zone, oldest first.
    pub fn list_plans(&self, zone_id: &str) -> PlanResult<Vec<PlanHeader>> {
        let mut stmt = self.conn.prepare(
            "SELECT plan_id, zone_id, day_type, plan_date, created_at,
                    attendance_duration, standard_break_time, average_response_rate
             FROM plan WHERE zone_id = ?1 ORDER BY rowid ASC",
        )?;
        let raw = stmt
            .query_map(params![zone_id], raw_header_mapper)?
            .collect::<Result<Vec<_>, _>>()?;
        raw.into_iter().map(RawHeader::into_header).collect()
    }

    /// Load a saved plan back into its in-memory form. Period views are
    /// re-projected from the stored rosters and assigned counts,
    /// the same pure derivation used at computation time.
    pub fn load_plan(&self, plan_id: &str) -> PlanResult<(PlanHeader, StaffingPlan)> {
        let header = self.get_plan_header(plan_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT province_id FROM plan_roster WHERE plan_id = ?1 ORDER BY roster_ord ASC",
        )?;
        let roster_ids = stmt
            .query_map(params![plan_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT province_id, shift_id, start_time, end_time, duration_minutes, breaks_json
             FROM plan_shift WHERE plan_id = ?1 ORDER BY province_id ASC, shift_id ASC",
        )?;
        let raw_shifts = stmt
            .query_map(params![plan_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut rosters: Vec<ProvinceRoster> = roster_ids
            .into_iter()
            .map(|province_id| ProvinceRoster {
                province_id,
                shifts: Vec::new(),
            })
            .collect();
        for (province_id, shift_id, start, end, duration, breaks_json) in raw_shifts {
            let Some(roster) = rosters.iter_mut().find(|r| r.province_id == province_id)
            else {
                continue;
            };
            roster.shifts.push(OperatorShift {
                shift_id:         shift_id as u32,
                start:            start.parse().map_err(anyhow::Error::new)?,
                end:              end.parse().map_err(anyhow::Error::new)?,
                duration_minutes: duration as u32,
                breaks:           serde_json::from_str(&breaks_json)?,
            });
        }

        let mut stmt = self.conn.prepare(
            "SELECT hour, call_volume, operators_needed FROM plan_period
             WHERE plan_id = ?1 ORDER BY hour ASC",
        )?;
        let raw_periods = stmt
            .query_map(params![plan_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT hour, province_id, assigned FROM plan_assignment
             WHERE plan_id = ?1 ORDER BY hour ASC, ord ASC",
        )?;
        let raw_assignments = stmt
            .query_map(params![plan_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let periods = raw_periods
            .into_iter()
            .map(|(hour, call_volume, needed)| {
                let assignments: Vec<Assignment> = raw_assignments
                    .iter()
                    .filter(|(h, _, _)| *h == hour)
                    .map(|(_, province_id, assigned)| Assignment {
                        province_id: province_id.clone(),
                        operators:   *assigned as u32,
                    })
                    .collect();
                project_period(
                    hour as u8,
                    call_volume as u32,
                    needed as u32,
                    &assignments,
                    &rosters,
                    header.parameters.standard_break_time,
                )
            })
            .collect();

        Ok((header, StaffingPlan { rosters, periods }))
    }

    pub fn delete_plan(&self, plan_id: &str) -> PlanResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM plan WHERE plan_id = ?1", params![plan_id])?;
        if affected == 0 {
            return Err(PlanError::PlanNotFound {
                plan_id: plan_id.to_string(),
            });
        }
        Ok(())
    }
}

struct RawHeader {
    plan_id:               String,
    zone_id:               String,
    day_type:              DayType,
    plan_date:             String,
    created_at:            String,
    attendance_duration:   i64,
    standard_break_time:   i64,
    average_response_rate: f64,
}

fn raw_header_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawHeader> {
    Ok(RawHeader {
        plan_id:               row.get(0)?,
        zone_id:               row.get(1)?,
        day_type:              row.get(2)?,
        plan_date:             row.get(3)?,
        created_at:            row.get(4)?,
        attendance_duration:   row.get(5)?,
        standard_break_time:   row.get(6)?,
        average_response_rate: row.get(7)?,
    })
}

impl RawHeader {
    fn into_header(self) -> PlanResult<PlanHeader> {
        Ok(PlanHeader {
            plan_id:    self.plan_id,
            zone_id:    self.zone_id,
            day_type:   self.day_type,
            plan_date:  self.plan_date.parse().map_err(anyhow::Error::new)?,
            created_at: self.created_at,
            parameters: SystemParameters {
                attendance_duration:   self.attendance_duration as u32,
                standard_break_time:   self.standard_break_time as u32,
                average_response_rate: self.average_response_rate,
            },
        })
    }
}
