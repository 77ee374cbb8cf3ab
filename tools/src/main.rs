//! plan-runner: headless staffing planner for StaffDesk.
//!
//! Usage:
//!   plan-runner --db plans.db --seed-demo
//!   plan-runner --db plans.db --zone centro --day-type regular --save
//!   plan-runner --db plans.db --zone centro --xlsx plan.xlsx --json plan.json

use anyhow::Result;
use staffdesk_core::{
    config::SystemParameters,
    export,
    planner::{Planner, StaffingPlan},
    store::PlanStore,
    volume::{CallVolumePoint, DayType},
    zone::{Province, Zone},
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = str_arg(&args, "--db", ":memory:");
    let zone_id = str_arg(&args, "--zone", "centro");
    let day_type: DayType = str_arg(&args, "--day-type", "regular").parse()?;
    let date: chrono::NaiveDate = match opt_arg(&args, "--date") {
        Some(d) => d.parse()?,
        None => chrono::Local::now().date_naive(),
    };
    let save = args.iter().any(|a| a == "--save");
    let seed_demo = args.iter().any(|a| a == "--seed-demo");
    let params_path = opt_arg(&args, "--params");
    let xlsx_path = opt_arg(&args, "--xlsx");
    let json_path = opt_arg(&args, "--json");

    println!("StaffDesk — plan-runner");
    println!("  db:       {db}");
    println!("  zone:     {zone_id}");
    println!("  day type: {day_type}");
    println!("  date:     {date}");
    println!();

    let store = PlanStore::open(&db)?;
    store.migrate()?;

    if seed_demo {
        seed_demo_zone(&store)?;
    }

    let provinces = store.provinces_for_zone(&zone_id)?;
    if provinces.is_empty() {
        anyhow::bail!("zone '{zone_id}' has no provinces (run with --seed-demo to create one)");
    }

    let volumes = store.hourly_volumes(&zone_id, day_type)?;
    let parameters = match params_path {
        Some(path) => SystemParameters::load(&path)?,
        None => store.load_parameters()?,
    };
    log::info!(
        "parameters: attendance={}min break={}min rate={}/h",
        parameters.attendance_duration,
        parameters.standard_break_time,
        parameters.average_response_rate
    );

    let planner = Planner::new(parameters.clone());
    let plan = planner.calculate(&provinces, &volumes);

    print_summary(&provinces, &plan);

    if save {
        let plan_id = store.save_plan(&zone_id, day_type, date, &parameters, &plan)?;
        println!("saved as {plan_id}");
    }
    if let Some(path) = xlsx_path {
        export::write_plan_xlsx(Path::new(&path), &provinces, &plan)?;
        println!("workbook written to {path}");
    }
    if let Some(path) = json_path {
        export::write_plan_json(Path::new(&path), &plan)?;
        println!("json written to {path}");
    }

    Ok(())
}

fn str_arg(args: &[String], flag: &str, default: &str) -> String {
    opt_arg(args, flag).unwrap_or_else(|| default.to_string())
}

fn opt_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn print_summary(provinces: &[Province], plan: &StaffingPlan) {
    println!("hour  calls  needed  assignments");
    for period in &plan.periods {
        let detail = period
            .provinces
            .iter()
            .map(|pd| {
                format!(
                    "{}={} ({}min break)",
                    pd.province_id, pd.assigned, pd.break_minutes
                )
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "{:>4}  {:>5}  {:>6}  {detail}",
            format!("{:02}", period.hour),
            period.call_volume,
            period.operators_needed
        );
    }

    for roster in &plan.rosters {
        let name = provinces
            .iter()
            .find(|p| p.province_id == roster.province_id)
            .map(|p| p.name.as_str())
            .unwrap_or(roster.province_id.as_str());
        println!();
        println!("{name}: {} shifts", roster.shifts.len());
        for shift in &roster.shifts {
            let breaks = shift
                .breaks
                .0
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!(
                "  #{:<3} {} - {}  breaks: {breaks}",
                shift.shift_id, shift.start, shift.end
            );
        }
    }
}

/// Create a small demonstration zone with three provinces and a
/// plausible daily call curve, skipping anything that already exists.
fn seed_demo_zone(store: &PlanStore) -> Result<()> {
    if store.get_zone("centro").is_ok() {
        log::info!("demo zone already present, skipping seed");
        return Ok(());
    }

    store.insert_zone(&Zone {
        zone_id: "centro".into(),
        name:    "Centro".into(),
    })?;

    let provinces = [
        ("norte", "Norte", 7u8, 22u8, 6u32),
        ("sur", "Sur", 7, 22, 4),
        ("altiplano", "Altiplano", 8, 20, 3),
    ];
    for (id, name, work_start, work_end, operators) in provinces {
        store.insert_province(&Province {
            province_id: id.into(),
            zone_id:     "centro".into(),
            name:        name.into(),
            work_start,
            work_end,
            operators,
        })?;
    }

    // Hourly call counts, index = hour of day.
    let regular: [u32; 24] = [
        0, 0, 0, 0, 0, 0, 40, 180, 420, 610, 700, 660, 520, 480, 540, 590, 560, 470, 350, 240,
        160, 90, 30, 0,
    ];
    let holiday: [u32; 24] = [
        0, 0, 0, 0, 0, 0, 20, 90, 210, 300, 350, 330, 260, 240, 270, 290, 280, 230, 170, 120,
        80, 40, 10, 0,
    ];
    for hour in 0..24u8 {
        for (day_type, calls) in [
            (DayType::Regular, regular[usize::from(hour)]),
            (DayType::Holiday, holiday[usize::from(hour)]),
        ] {
            store.upsert_call_volume(&CallVolumePoint {
                zone_id: "centro".into(),
                day_type,
                hour,
                calls,
            })?;
        }
    }

    store.save_parameters(&SystemParameters::default())?;
    log::info!("seeded demo zone 'centro' with 3 provinces");
    Ok(())
}
