//! Operator distribution — how many operators an hour needs, and how
//! that demand is split across provinces.
//!
//! RULES:
//!   - Pure functions of their inputs. No I/O, no randomness.
//!   - Soft failures clamp instead of erroring: a non-positive response
//!     rate yields zero demand, demand above capacity assigns everyone.
//!   - Province order in the output always follows input order.

use crate::types::{Hour, ProvinceId};
use crate::zone::Province;
use serde::{Deserialize, Serialize};

/// Operators required to handle `call_volume` calls in one hour at
/// `response_rate` calls per operator. `ceil(volume / rate)`; zero when
/// the rate is non-positive.
pub fn operators_needed(call_volume: u32, response_rate: f64) -> u32 {
    if response_rate <= 0.0 {
        return 0;
    }
    (f64::from(call_volume) / response_rate).ceil() as u32
}

/// One province's share of an hour's operator demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub province_id: ProvinceId,
    pub operators:   u32,
}

/// Split `total_needed` operators across the provinces whose working
/// window intersects `active_hours`, proportionally to headcount.
///
/// Each working province receives `min(ceil(share), operators)`; when
/// demand meets or exceeds the combined capacity every province is
/// assigned its full headcount and the unmet remainder is dropped.
/// Rounding up can overshoot the demand, so assignments are reconciled
/// downward afterwards: the largest assignment gives up
/// `min(excess, assigned - 1)` at a time, never dropping below one
/// operator. Ties on the largest assignment resolve to the province
/// listed first.
pub fn distribute(
    total_needed: u32,
    provinces: &[Province],
    active_hours: &[Hour],
) -> Vec<Assignment> {
    let working: Vec<&Province> = provinces
        .iter()
        .filter(|p| active_hours.iter().any(|&h| p.covers_hour(h)))
        .collect();
    if working.is_empty() {
        return Vec::new();
    }

    let capacity: u32 = working.iter().map(|p| p.operators).sum();

    let mut assigned: Vec<u32> = if total_needed >= capacity {
        working.iter().map(|p| p.operators).collect()
    } else {
        working
            .iter()
            .map(|p| {
                let share = f64::from(total_needed) * f64::from(p.operators)
                    / f64::from(capacity);
                (share.ceil() as u32).min(p.operators)
            })
            .collect()
    };

    if total_needed < capacity {
        reconcile(&mut assigned, total_needed);
    }

    working
        .iter()
        .zip(assigned)
        .map(|(p, operators)| Assignment {
            province_id: p.province_id.clone(),
            operators,
        })
        .collect()
}

/// Walk the overshoot back down to `total_needed`. Stops early if every
/// remaining assignment is already at the one-operator floor.
fn reconcile(assigned: &mut [u32], total_needed: u32) {
    loop {
        let sum: u32 = assigned.iter().sum();
        if sum <= total_needed {
            return;
        }
        let excess = sum - total_needed;

        let mut candidate: Option<usize> = None;
        for (i, &a) in assigned.iter().enumerate() {
            if a > 1 && candidate.map_or(true, |c| a > assigned[c]) {
                candidate = Some(i);
            }
        }
        let Some(i) = candidate else {
            return;
        };

        let cut = excess.min(assigned[i] - 1);
        assigned[i] -= cut;
    }
}
