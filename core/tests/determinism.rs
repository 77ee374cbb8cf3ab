//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two planners, same inputs. They must produce byte-identical plans,
//! down to the serialized HH:MM strings. Any divergence is a blocker.

use staffdesk_core::config::SystemParameters;
use staffdesk_core::planner::Planner;
use staffdesk_core::volume::HourlyVolumes;
use staffdesk_core::zone::Province;

fn build_zone() -> Vec<Province> {
    vec![
        Province {
            province_id: "norte".into(),
            zone_id:     "centro".into(),
            name:        "Norte".into(),
            work_start:  7,
            work_end:    22,
            operators:   6,
        },
        Province {
            province_id: "sur".into(),
            zone_id:     "centro".into(),
            name:        "Sur".into(),
            work_start:  7,
            work_end:    22,
            operators:   4,
        },
        Province {
            province_id: "nocturno".into(),
            zone_id:     "centro".into(),
            name:        "Nocturno".into(),
            work_start:  0,
            work_end:    24,
            operators:   2,
        },
    ]
}

fn build_volumes() -> HourlyVolumes {
    let mut slots = [0u32; 24];
    for (hour, calls) in [
        (0usize, 25u32),
        (3, 10),
        (7, 180),
        (9, 700),
        (12, 520),
        (18, 350),
        (23, 60),
    ] {
        slots[hour] = calls;
    }
    HourlyVolumes::new(slots)
}

#[test]
fn same_inputs_produce_identical_plans() {
    let provinces = build_zone();
    let volumes = build_volumes();

    let plan_a = Planner::new(SystemParameters::default()).calculate(&provinces, &volumes);
    let plan_b = Planner::new(SystemParameters::default()).calculate(&provinces, &volumes);

    assert_eq!(plan_a, plan_b);

    let json_a = serde_json::to_string(&plan_a).expect("serialize a");
    let json_b = serde_json::to_string(&plan_b).expect("serialize b");
    assert_eq!(json_a, json_b, "serialized plans diverged");
}

#[test]
fn different_parameters_are_observable() {
    let provinces = build_zone();
    let volumes = build_volumes();

    let defaults = Planner::new(SystemParameters::default()).calculate(&provinces, &volumes);
    let slower = Planner::new(SystemParameters {
        average_response_rate: 40.0,
        ..SystemParameters::default()
    })
    .calculate(&provinces, &volumes);

    assert_ne!(
        defaults, slower,
        "halving the response rate must change the plan"
    );
}

#[test]
fn plan_survives_a_serde_round_trip() {
    let provinces = build_zone();
    let volumes = build_volumes();
    let plan = Planner::new(SystemParameters::default()).calculate(&provinces, &volumes);

    let json = serde_json::to_string(&plan).expect("serialize");
    let back: staffdesk_core::planner::StaffingPlan =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(plan, back);
}
