use super::PlanStore;
use crate::error::PlanResult;
use crate::volume::{CallVolumePoint, DayType, HourlyVolumes};
use rusqlite::params;

fn volume_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<CallVolumePoint> {
    Ok(CallVolumePoint {
        zone_id:  row.get(0)?,
        day_type: row.get(1)?,
        hour:     row.get::<_, i64>(2)? as u8,
        calls:    row.get::<_, i64>(3)? as u32,
    })
}

impl PlanStore {
    // ── Call volume ────────────────────────────────────────────

    /// Insert or overwrite the recorded volume for one hour.
    pub fn upsert_call_volume(&self, point: &CallVolumePoint) -> PlanResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO call_volume (zone_id, day_type, hour, calls)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                point.zone_id,
                point.day_type,
                i64::from(point.hour),
                i64::from(point.calls),
            ],
        )?;
        Ok(())
    }

    pub fn call_volumes(&self, zone_id: &str, day_type: DayType) -> PlanResult<Vec<CallVolumePoint>> {
        let mut stmt = self.conn.prepare(
            "SELECT zone_id, day_type, hour, calls FROM call_volume
             WHERE zone_id = ?1 AND day_type = ?2 ORDER BY hour ASC",
        )?;
        let rows = stmt.query_map(params![zone_id, day_type], volume_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// The dense 24-slot series for a (zone, day-type) pair. Hours with
    /// no recorded point read as zero.
    pub fn hourly_volumes(&self, zone_id: &str, day_type: DayType) -> PlanResult<HourlyVolumes> {
        let points = self.call_volumes(zone_id, day_type)?;
        Ok(HourlyVolumes::from_points(&points))
    }

    /// Remove all recorded points for a (zone, day-type) pair. Returns
    /// the number of deleted rows.
    pub fn clear_call_volumes(&self, zone_id: &str, day_type: DayType) -> PlanResult<usize> {
        let affected = self.conn.execute(
            "DELETE FROM call_volume WHERE zone_id = ?1 AND day_type = ?2",
            params![zone_id, day_type],
        )?;
        Ok(affected)
    }
}
