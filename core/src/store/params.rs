use super::PlanStore;
use crate::config::SystemParameters;
use crate::error::PlanResult;
use rusqlite::{params, OptionalExtension};

impl PlanStore {
    // ── Parameters ─────────────────────────────────────────────

    /// Persist the global parameters (single row, upserted).
    pub fn save_parameters(&self, parameters: &SystemParameters) -> PlanResult<()> {
        self.conn.execute(
            "INSERT INTO parameters (id, attendance_duration, standard_break_time, average_response_rate)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                attendance_duration = excluded.attendance_duration,
                standard_break_time = excluded.standard_break_time,
                average_response_rate = excluded.average_response_rate",
            params![
                i64::from(parameters.attendance_duration),
                i64::from(parameters.standard_break_time),
                parameters.average_response_rate,
            ],
        )?;
        Ok(())
    }

    /// Load the persisted parameters, falling back to the defaults
    /// when none were ever saved.
    pub fn load_parameters(&self) -> PlanResult<SystemParameters> {
        let row = self
            .conn
            .query_row(
                "SELECT attendance_duration, standard_break_time, average_response_rate
                 FROM parameters WHERE id = 1",
                [],
                |row| {
                    Ok(SystemParameters {
                        attendance_duration:   row.get::<_, i64>(0)? as u32,
                        standard_break_time:   row.get::<_, i64>(1)? as u32,
                        average_response_rate: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(row.unwrap_or_default())
    }
}
