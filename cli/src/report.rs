use safeskip_core::model::decision::Decision;
use safeskip_core::service::dto::DashboardSummary;
use safeskip_core::{Advice, ForecastReport, Hours, PlannerUseCase, SettingsRepository, SnapshotRepository};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "Subject")]
    name: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "%")]
    pct: String,
    #[tabled(rename = "Advice")]
    advice: String,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Subject")]
    name: String,
    #[tabled(rename = "Plan")]
    plan: String,
    #[tabled(rename = "Now")]
    current: String,
    #[tabled(rename = "Then")]
    projected: String,
    #[tabled(rename = "Δ")]
    delta: String,
    #[tabled(rename = "Advice")]
    advice: String,
}

pub fn advice_text(advice: &Advice) -> String {
    match (advice.is_safe(), advice.hours) {
        (true, hours) => format!("Skippable: {}", hours),
        (false, Hours::Finite(h)) => format!("Recover: +{}h", h),
        (false, Hours::Unbounded) => "Recover: ∞".to_string(),
    }
}

fn zone(advice: &Advice) -> &'static str {
    if advice.is_safe() { "Safe Zone" } else { "Danger Zone" }
}

pub fn show_status(summary: &DashboardSummary) {
    let g = &summary.global;
    println!(
        "\x1b[1;36mGlobal Attendance\x1b[0m  {:.1}%  (attended {}h / {}h, goal {}%)",
        g.percentage, g.attended, g.conducted, summary.threshold
    );
    println!("{}: {}", zone(&g.advice), advice_text(&g.advice));
    println!("Updated: {}", summary.imported_at.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M"));

    let rows: Vec<SubjectRow> = summary
        .subjects
        .iter()
        .map(|s| SubjectRow {
            name: s.name.clone(),
            category: s.category.clone(),
            hours: format!("{}/{}", s.attended, s.conducted),
            pct: format!("{:.1}", s.reported_percentage),
            advice: advice_text(&s.advice),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}

pub fn show_forecast<R: SnapshotRepository, S: SettingsRepository>(
    report: &ForecastReport,
    planner: &PlannerUseCase<'_, R, S>,
) {
    let g = &report.global;
    println!(
        "\x1b[1;36mProjected Global Attendance\x1b[0m  {:.2}%  ({:+.2}%)  Current: {:.2}% -> Future: {:.2}%",
        g.projected_percentage, g.delta, g.current_percentage, g.projected_percentage
    );
    println!(
        "Now {}: {}   After plan {}: {}",
        zone(&report.global_current),
        advice_text(&report.global_current),
        zone(&report.global_projected),
        advice_text(&report.global_projected)
    );

    let rows: Vec<ForecastRow> = report
        .subjects
        .iter()
        .map(|o| {
            let plan: Vec<String> = planner
                .window()
                .days()
                .iter()
                .filter_map(|day| {
                    planner.decision(day.offset, &o.row.subject_id).map(|d| {
                        let mark = match d {
                            Decision::Attend => "✔",
                            Decision::Skip => "✖",
                        };
                        format!("{} {}", day.label, mark)
                    })
                })
                .collect();

            ForecastRow {
                name: o.row.name.clone(),
                plan: if plan.is_empty() { "-".to_string() } else { plan.join("\n") },
                current: format!("{:.1}%", o.row.current_percentage),
                projected: format!("{:.1}%", o.row.projected_percentage),
                delta: format!("{:+.1}", o.row.delta),
                advice: advice_text(&o.projected),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
