mod report;
mod tui;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use safeskip_core::{
    DashboardService, FileSettingsRepository, FileSnapshotRepository, PlannerUseCase,
    PlanningWindow,
};

#[derive(Parser)]
#[command(name = "safeskip")]
#[command(about = "Attendance dashboard and skip planner", long_about = None)]
struct Cli {
    /// Directory for attendance.json and settings.json (default: ~/.safeskip)
    #[arg(long, global = true, env = "SAFESKIP_HOME")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Import a parsed attendance report (JSON from the upload service)
    Import {
        file: PathBuf,
    },
    /// Delete the stored attendance report
    Clear,
    /// Show global and per-subject attendance
    Status,
    /// Show or change the attendance goal (usage: threshold 80 | threshold --up 1)
    Threshold {
        #[arg(allow_negative_numbers = true)]
        value: Option<f64>,
        #[arg(long, conflicts_with = "value")]
        up: Option<f64>,
        #[arg(long, conflicts_with_all = ["value", "up"])]
        down: Option<f64>,
    },
    /// Forecast a plan (usage: forecast attend:tom:math skip:fri:physics)
    Forecast {
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Open the interactive 7-day planner
    Plan,
}

type Dashboard = DashboardService<FileSnapshotRepository, FileSettingsRepository>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("data dir override: {:?}", cli.data_dir);
    let snapshots = FileSnapshotRepository::new(cli.data_dir.clone())?;
    let settings = FileSettingsRepository::new(cli.data_dir)?;
    let dashboard: Dashboard = DashboardService::new(snapshots, settings);

    match cli.command {
        Some(Commands::Import { file }) => {
            let payload = fs::read_to_string(&file)
                .with_context(|| format!("Could not read {}", file.display()))?;
            let snapshot = dashboard.import_report(&payload)?;
            println!(
                "Imported {} subjects ({}h attended / {}h conducted).",
                snapshot.subjects.len(),
                snapshot.global.attended,
                snapshot.global.conducted
            );
        }
        Some(Commands::Clear) => {
            dashboard.clear()?;
            println!("Attendance data cleared.");
        }
        Some(Commands::Status) => match dashboard.summary()? {
            Some(summary) => report::show_status(&summary),
            None => println!("No attendance data. Run `safeskip import <file>` first."),
        },
        Some(Commands::Threshold { value, up, down }) => {
            let threshold = match (value, up, down) {
                (Some(v), _, _) => dashboard.set_threshold(v)?,
                (None, Some(d), _) => dashboard.adjust_threshold(d)?,
                (None, None, Some(d)) => dashboard.adjust_threshold(-d)?,
                (None, None, None) => dashboard.threshold()?,
            };
            println!("Goal: {}%", threshold);
        }
        Some(Commands::Forecast { args }) => {
            let mut planner = PlannerUseCase::new(&dashboard, PlanningWindow::today())?;
            if planner.subjects().is_empty() {
                println!("No attendance data. Run `safeskip import <file>` first.");
                return Ok(());
            }
            planner.apply_tokens(&args)?;
            report::show_forecast(&planner.report()?, &planner);
        }
        Some(Commands::Plan) | None => {
            tui::run(&dashboard)?;
        }
    }
    Ok(())
}
