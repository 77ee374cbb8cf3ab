//! Saved-plan tests: a computed plan persists and loads back intact.

use chrono::NaiveDate;
use staffdesk_core::config::SystemParameters;
use staffdesk_core::error::PlanError;
use staffdesk_core::planner::{Planner, StaffingPlan};
use staffdesk_core::store::PlanStore;
use staffdesk_core::volume::{DayType, HourlyVolumes};
use staffdesk_core::zone::Province;

fn provinces() -> Vec<Province> {
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
    ]
}

fn compute_plan(parameters: &SystemParameters) -> StaffingPlan {
    let mut slots = [0u32; 24];
    slots[7] = 180;
    slots[9] = 700;
    slots[14] = 430;
    Planner::new(parameters.clone()).calculate(&provinces(), &HourlyVolumes::new(slots))
}

#[test]
fn saved_plan_loads_back_identically() {
    let store = PlanStore::in_memory().expect("store");
    store.migrate().expect("migration");

    let parameters = SystemParameters::default();
    let plan = compute_plan(&parameters);
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    let plan_id = store
        .save_plan("centro", DayType::Regular, date, &parameters, &plan)
        .expect("save");

    let header = store.get_plan_header(&plan_id).expect("header");
    assert_eq!(header.zone_id, "centro");
    assert_eq!(header.day_type, DayType::Regular);
    assert_eq!(header.plan_date, date);
    assert_eq!(header.parameters, parameters);

    let (loaded_header, loaded_plan) = store.load_plan(&plan_id).expect("load");
    assert_eq!(loaded_header, header);
    assert_eq!(loaded_plan, plan, "round-trip must be exact");
}

#[test]
fn adjusted_plans_persist_their_selection() {
    let store = PlanStore::in_memory().expect("store");
    store.migrate().expect("migration");

    let parameters = SystemParameters::default();
    let planner = Planner::new(parameters.clone());
    let plan = compute_plan(&parameters);
    let adjusted = planner.adjust(&plan, 9, "norte", 2);

    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    let plan_id = store
        .save_plan("centro", DayType::Regular, date, &parameters, &adjusted)
        .expect("save");

    let (_, loaded) = store.load_plan(&plan_id).expect("load");
    assert_eq!(loaded, adjusted);

    let period = loaded.period_at(9).unwrap();
    assert_eq!(period.provinces[0].assigned, 2);
    assert_eq!(period.provinces[0].shifts.len(), 2);
}

#[test]
fn plans_are_listed_per_zone_in_save_order() {
    let store = PlanStore::in_memory().expect("store");
    store.migrate().expect("migration");

    let parameters = SystemParameters::default();
    let plan = compute_plan(&parameters);

    let first = store
        .save_plan(
            "centro",
            DayType::Regular,
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            &parameters,
            &plan,
        )
        .unwrap();
    let second = store
        .save_plan(
            "centro",
            DayType::Holiday,
            NaiveDate::from_ymd_opt(2026, 8, 9).unwrap(),
            &parameters,
            &plan,
        )
        .unwrap();
    store
        .save_plan(
            "oriente",
            DayType::Regular,
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            &parameters,
            &plan,
        )
        .unwrap();

    let listed = store.list_plans("centro").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].plan_id, first);
    assert_eq!(listed[1].plan_id, second);
    assert_eq!(listed[1].day_type, DayType::Holiday);
}

#[test]
fn deleting_a_plan_removes_it() {
    let store = PlanStore::in_memory().expect("store");
    store.migrate().expect("migration");

    let parameters = SystemParameters::default();
    let plan = compute_plan(&parameters);
    let plan_id = store
        .save_plan(
            "centro",
            DayType::Regular,
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            &parameters,
            &plan,
        )
        .unwrap();

    store.delete_plan(&plan_id).unwrap();

    assert!(matches!(
        store.load_plan(&plan_id),
        Err(PlanError::PlanNotFound { .. })
    ));
    assert!(matches!(
        store.delete_plan(&plan_id),
        Err(PlanError::PlanNotFound { .. })
    ));
}
