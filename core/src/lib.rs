//! StaffDesk core — call-center staffing planner.
//!
//! Administrators define zones and provinces, record hourly call
//! volumes, tune global parameters, and compute a shift/break plan per
//! zone. The plan can be reviewed, manually adjusted, persisted, and
//! exported as a spreadsheet.
//!
//! RULES:
//!   - Only the store module talks to the database.
//!   - The planning core (distribution, shifts, planner) does no I/O.
//!   - No randomness anywhere in planning — identical inputs always
//!     produce a byte-identical plan.

pub mod clock;
pub mod config;
pub mod distribution;
pub mod error;
pub mod export;
pub mod planner;
pub mod shifts;
pub mod store;
pub mod types;
pub mod volume;
pub mod zone;
