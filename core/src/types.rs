//! Shared primitive types used across the entire planner.

/// An hour of the day. Working windows use `0..=24` with an exclusive
/// end; call-volume data and queries use `0..=23`.
pub type Hour = u8;

/// A stable, unique identifier for a zone.
pub type ZoneId = String;

/// A stable, unique identifier for a province.
pub type ProvinceId = String;

/// The canonical identifier of a saved plan.
pub type PlanId = String;
