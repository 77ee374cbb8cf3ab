use super::PlanStore;
use crate::error::{PlanError, PlanResult};
use crate::types::Hour;
use crate::zone::{Province, Zone};
use rusqlite::{params, OptionalExtension};

fn zone_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<Zone> {
    Ok(Zone {
        zone_id: row.get(0)?,
        name:    row.get(1)?,
    })
}

fn province_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<Province> {
    Ok(Province {
        province_id: row.get(0)?,
        zone_id:     row.get(1)?,
        name:        row.get(2)?,
        work_start:  row.get::<_, i64>(3)? as u8,
        work_end:    row.get::<_, i64>(4)? as u8,
        operators:   row.get::<_, i64>(5)? as u32,
    })
}

fn validate_window(work_start: Hour, work_end: Hour) -> PlanResult<()> {
    if work_start < work_end && work_end <= 24 {
        Ok(())
    } else {
        Err(PlanError::InvalidWindow {
            work_start,
            work_end,
        })
    }
}

impl PlanStore {
    // ── Zone ───────────────────────────────────────────────────

    pub fn insert_zone(&self, zone: &Zone) -> PlanResult<()> {
        self.conn.execute(
            "INSERT INTO zone (zone_id, name) VALUES (?1, ?2)",
            params![zone.zone_id, zone.name],
        )?;
        Ok(())
    }

    pub fn get_zone(&self, zone_id: &str) -> PlanResult<Zone> {
        self.conn
            .query_row(
                "SELECT zone_id, name FROM zone WHERE zone_id = ?1",
                params![zone_id],
                zone_row_mapper,
            )
            .optional()?
            .ok_or_else(|| PlanError::ZoneNotFound {
                zone_id: zone_id.to_string(),
            })
    }

    pub fn list_zones(&self) -> PlanResult<Vec<Zone>> {
        let mut stmt = self
            .conn
            .prepare("SELECT zone_id, name FROM zone ORDER BY rowid ASC")?;
        let rows = stmt.query_map([], zone_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn rename_zone(&self, zone_id: &str, name: &str) -> PlanResult<()> {
        let affected = self.conn.execute(
            "UPDATE zone SET name = ?1 WHERE zone_id = ?2",
            params![name, zone_id],
        )?;
        if affected == 0 {
            return Err(PlanError::ZoneNotFound {
                zone_id: zone_id.to_string(),
            });
        }
        Ok(())
    }

    /// Delete a zone. Provinces and call volumes cascade.
    pub fn delete_zone(&self, zone_id: &str) -> PlanResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM zone WHERE zone_id = ?1", params![zone_id])?;
        if affected == 0 {
            return Err(PlanError::ZoneNotFound {
                zone_id: zone_id.to_string(),
            });
        }
        Ok(())
    }

    // ── Province ───────────────────────────────────────────────

    pub fn insert_province(&self, province: &Province) -> PlanResult<()> {
        validate_window(province.work_start, province.work_end)?;
        self.conn.execute(
            "INSERT INTO province (province_id, zone_id, name, work_start, work_end, operators)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                province.province_id,
                province.zone_id,
                province.name,
                i64::from(province.work_start),
                i64::from(province.work_end),
                i64::from(province.operators),
            ],
        )?;
        Ok(())
    }

    pub fn get_province(&self, province_id: &str) -> PlanResult<Province> {
        self.conn
            .query_row(
                "SELECT province_id, zone_id, name, work_start, work_end, operators
                 FROM province WHERE province_id = ?1",
                params![province_id],
                province_row_mapper,
            )
            .optional()?
            .ok_or_else(|| PlanError::ProvinceNotFound {
                province_id: province_id.to_string(),
            })
    }

    /// Provinces of a zone in insertion order, which is the planner's
    /// stable input order.
    pub fn provinces_for_zone(&self, zone_id: &str) -> PlanResult<Vec<Province>> {
        let mut stmt = self.conn.prepare(
            "SELECT province_id, zone_id, name, work_start, work_end, operators
             FROM province WHERE zone_id = ?1 ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map(params![zone_id], province_row_mapper)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn update_province(&self, province: &Province) -> PlanResult<()> {
        validate_window(province.work_start, province.work_end)?;
        let affected = self.conn.execute(
            "UPDATE province SET name = ?1, work_start = ?2, work_end = ?3, operators = ?4
             WHERE province_id = ?5",
            params![
                province.name,
                i64::from(province.work_start),
                i64::from(province.work_end),
                i64::from(province.operators),
                province.province_id,
            ],
        )?;
        if affected == 0 {
            return Err(PlanError::ProvinceNotFound {
                province_id: province.province_id.clone(),
            });
        }
        Ok(())
    }

    pub fn delete_province(&self, province_id: &str) -> PlanResult<()> {
        let affected = self.conn.execute(
            "DELETE FROM province WHERE province_id = ?1",
            params![province_id],
        )?;
        if affected == 0 {
            return Err(PlanError::ProvinceNotFound {
                province_id: province_id.to_string(),
            });
        }
        Ok(())
    }
}
