//! Operator distribution tests — demand sizing and proportional
//! allocation across provinces.

use staffdesk_core::distribution::{distribute, operators_needed};
use staffdesk_core::zone::Province;

fn province(id: &str, work_start: u8, work_end: u8, operators: u32) -> Province {
    Province {
        province_id: id.into(),
        zone_id:     "z".into(),
        name:        id.to_uppercase(),
        work_start,
        work_end,
        operators,
    }
}

#[test]
fn operators_needed_rounds_up() {
    assert_eq!(operators_needed(320, 80.0), 4);
    assert_eq!(operators_needed(321, 80.0), 5);
    assert_eq!(operators_needed(1, 80.0), 1);
    assert_eq!(operators_needed(0, 80.0), 0);
}

#[test]
fn operators_needed_clamps_non_positive_rate() {
    assert_eq!(operators_needed(100, 0.0), 0);
    assert_eq!(operators_needed(100, -5.0), 0);
}

/// Demand equal to capacity: everyone gets their full headcount, no
/// rounding involved.
#[test]
fn exact_capacity_assigns_full_headcount() {
    let provinces = [province("a", 0, 24, 6), province("b", 0, 24, 4)];
    let result = distribute(10, &provinces, &[9]);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].operators, 6);
    assert_eq!(result[1].operators, 4);
}

/// Proportional split with no overshoot: 5 operators over 6+4
/// headcount gives 3 and 2.
#[test]
fn proportional_split_without_reconciliation() {
    let provinces = [province("a", 0, 24, 6), province("b", 0, 24, 4)];
    let result = distribute(5, &provinces, &[9]);
    assert_eq!(result[0].operators, 3);
    assert_eq!(result[1].operators, 2);
}

#[test]
fn demand_above_capacity_assigns_everyone() {
    let provinces = [province("a", 0, 24, 6), province("b", 0, 24, 4)];
    let result = distribute(25, &provinces, &[9]);
    assert_eq!(result[0].operators, 6);
    assert_eq!(result[1].operators, 4);
}

/// Rounding both shares up overshoots by one; the first of the two
/// equally-largest provinces gives it back.
#[test]
fn reconciliation_trims_first_of_equal_largest() {
    let provinces = [province("a", 0, 24, 5), province("b", 0, 24, 5)];
    let result = distribute(7, &provinces, &[9]);
    assert_eq!(result[0].operators, 3);
    assert_eq!(result[1].operators, 4);
    let total: u32 = result.iter().map(|a| a.operators).sum();
    assert_eq!(total, 7);
}

#[test]
fn reconciliation_trims_largest_assignment() {
    let provinces = [province("a", 0, 24, 10), province("b", 0, 24, 1)];
    let result = distribute(5, &provinces, &[9]);
    assert_eq!(result[0].operators, 4);
    assert_eq!(result[1].operators, 1);
}

#[test]
fn provinces_outside_window_are_excluded() {
    let provinces = [province("a", 7, 22, 5), province("b", 10, 14, 5)];
    let result = distribute(3, &provinces, &[8]);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].province_id, "a");
    assert_eq!(result[0].operators, 3);
}

#[test]
fn no_working_province_yields_empty_result() {
    let provinces = [province("a", 7, 12, 5)];
    assert!(distribute(10, &provinces, &[14]).is_empty());
    assert!(distribute(10, &[], &[9]).is_empty());
}

#[test]
fn zero_demand_yields_all_zero_assignments() {
    let provinces = [province("a", 0, 24, 6), province("b", 0, 24, 4)];
    let result = distribute(0, &provinces, &[9]);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|a| a.operators == 0));
}

/// Assignments never exceed either the total capacity or any single
/// province's headcount, across a spread of demands.
#[test]
fn assignments_respect_ceilings() {
    let provinces = [
        province("a", 0, 24, 7),
        province("b", 0, 24, 3),
        province("c", 0, 24, 12),
    ];
    for total in 0..30 {
        let result = distribute(total, &provinces, &[12]);
        let sum: u32 = result.iter().map(|a| a.operators).sum();
        assert!(sum <= 22, "total {total}: sum {sum} exceeds capacity");
        for (assignment, p) in result.iter().zip(&provinces) {
            assert!(
                assignment.operators <= p.operators,
                "total {total}: {} over headcount",
                assignment.province_id
            );
        }
        if total < 22 && total > 3 {
            assert_eq!(sum, total, "reconciliation missed demand {total}");
        }
    }
}
