//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The planner and export layers call store methods — they never
//! execute SQL directly.

use crate::error::PlanResult;
mod params;
mod plan;
mod volume;
mod zone;
pub use plan::PlanHeader;
use rusqlite::Connection;

pub struct PlanStore {
    conn: Connection,
}

impl PlanStore {
    /// Open (or create) the planner database at `path`.
    pub fn open(path: &str) -> PlanResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> PlanResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> PlanResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_foundation.sql"))?;
        self.conn
            .execute_batch(include_str!("../../../migrations/002_plans.sql"))?;
        Ok(())
    }
}
