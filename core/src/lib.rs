pub mod forecast;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;
pub mod window;

pub use forecast::{advise, project, weight, Advice, AdviceStatus, ForecastReport, Hours};
pub use input::{expand_key, parse_decision_args, PlannedDecision};
pub use model::decision::{Decision, DecisionPlan};
pub use model::settings::Settings;
pub use model::subject::{AttendanceSnapshot, Subject};
pub use repository::{FileSettingsRepository, FileSnapshotRepository, SettingsRepository, SnapshotRepository};
pub use service::dashboard_service::DashboardService;
pub use usecase::planner::PlannerUseCase;
pub use window::{PlanningWindow, WINDOW_DAYS};
