//! Plan export — spreadsheet and JSON renderings of a computed plan.

use crate::error::PlanResult;
use crate::planner::StaffingPlan;
use crate::zone::Province;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Write a plan as a workbook: one "Distribution" sheet with the
/// per-hour table, then one sheet per province roster.
pub fn write_plan_xlsx(
    path: &Path,
    provinces: &[Province],
    plan: &StaffingPlan,
) -> PlanResult<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let name_of = |province_id: &str| -> String {
        provinces
            .iter()
            .find(|p| p.province_id == province_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| province_id.to_string())
    };

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Distribution")?;
        sheet.write_string_with_format(0, 0, "Hour", &bold)?;
        sheet.write_string_with_format(0, 1, "Calls", &bold)?;
        sheet.write_string_with_format(0, 2, "Needed", &bold)?;

        // Two columns per province: assigned operators, break minutes.
        if let Some(first) = plan.periods.first() {
            for (i, pd) in first.provinces.iter().enumerate() {
                let base = 3 + (i as u16) * 2;
                let name = name_of(&pd.province_id);
                sheet.write_string_with_format(0, base, format!("{name} ops"), &bold)?;
                sheet.write_string_with_format(0, base + 1, format!("{name} break min"), &bold)?;
            }
        }

        for (r, period) in plan.periods.iter().enumerate() {
            let row = (r + 1) as u32;
            sheet.write_number(row, 0, f64::from(period.hour))?;
            sheet.write_number(row, 1, f64::from(period.call_volume))?;
            sheet.write_number(row, 2, f64::from(period.operators_needed))?;
            for (i, pd) in period.provinces.iter().enumerate() {
                let base = 3 + (i as u16) * 2;
                sheet.write_number(row, base, f64::from(pd.assigned))?;
                sheet.write_number(row, base + 1, f64::from(pd.break_minutes))?;
            }
        }
    }

    for (i, roster) in plan.rosters.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        // Index prefix keeps sheet names unique; Excel caps them at 31 chars.
        let mut title = format!("{:02} {}", i + 1, name_of(&roster.province_id));
        title.truncate(31);
        sheet.set_name(title)?;

        sheet.write_string_with_format(0, 0, "Shift", &bold)?;
        sheet.write_string_with_format(0, 1, "Start", &bold)?;
        sheet.write_string_with_format(0, 2, "End", &bold)?;
        sheet.write_string_with_format(0, 3, "Duration", &bold)?;
        for k in 0..4u16 {
            sheet.write_string_with_format(0, 4 + k, format!("Break {}", k + 1), &bold)?;
        }

        for (r, shift) in roster.shifts.iter().enumerate() {
            let row = (r + 1) as u32;
            sheet.write_number(row, 0, f64::from(shift.shift_id))?;
            sheet.write_string(row, 1, shift.start.to_string())?;
            sheet.write_string(row, 2, shift.end.to_string())?;
            sheet.write_number(row, 3, f64::from(shift.duration_minutes))?;
            for (k, window) in shift.breaks.0.iter().enumerate() {
                sheet.write_string(row, 4 + k as u16, window.to_string())?;
            }
        }
    }

    workbook.save(path)?;
    log::info!("plan exported to {}", path.display());
    Ok(())
}

/// Dump the plan as pretty-printed JSON for programmatic consumers.
pub fn write_plan_json(path: &Path, plan: &StaffingPlan) -> PlanResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("Cannot create {}: {e}", path.display()))?;
    serde_json::to_writer_pretty(file, plan)?;
    Ok(())
}
