use anyhow::{bail, Result};
use uuid::Uuid;

use crate::forecast::ForecastReport;
use crate::input::{parse_decision_args, resolve_subject};
use crate::model::decision::{Decision, DecisionPlan};
use crate::model::subject::Subject;
use crate::repository::{SettingsRepository, SnapshotRepository};
use crate::service::dashboard_service::DashboardService;
use crate::window::PlanningWindow;

/// One planning session: the imported subjects plus the user's hypothetical decisions.
pub struct PlannerUseCase<'a, R: SnapshotRepository, S: SettingsRepository> {
    dashboard: &'a DashboardService<R, S>,
    window: PlanningWindow,
    import_id: Option<Uuid>,
    subjects: Vec<Subject>,
    plan: DecisionPlan,
}

impl<'a, R: SnapshotRepository, S: SettingsRepository> PlannerUseCase<'a, R, S> {
    pub fn new(dashboard: &'a DashboardService<R, S>, window: PlanningWindow) -> Result<Self> {
        let mut planner = Self {
            dashboard,
            window,
            import_id: None,
            subjects: Vec::new(),
            plan: DecisionPlan::new(),
        };
        planner.refresh()?;
        Ok(planner)
    }

    /// Reloads the stored report. Decisions are dropped if a different report was imported.
    pub fn refresh(&mut self) -> Result<bool> {
        let snapshot = self.dashboard.snapshot()?;
        let import_id = snapshot.as_ref().map(|s| s.import_id);
        if import_id == self.import_id {
            return Ok(false);
        }

        self.import_id = import_id;
        self.subjects = snapshot.map(|s| s.subjects).unwrap_or_default();
        if !self.plan.is_empty() {
            log::info!("subject set changed, discarding {} decisions", self.plan.len());
        }
        self.plan.clear();
        Ok(true)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn window(&self) -> &PlanningWindow {
        &self.window
    }

    pub fn plan(&self) -> &DecisionPlan {
        &self.plan
    }

    pub fn decision(&self, day: usize, subject_id: &str) -> Option<Decision> {
        self.plan.get(day, subject_id)
    }

    pub fn toggle(&mut self, day: usize, subject_id: &str) -> Result<Option<Decision>> {
        if !self.subjects.iter().any(|s| s.id == subject_id) {
            log::warn!("rejected toggle for unknown subject '{}'", subject_id);
            bail!("Unknown subject: '{}'", subject_id);
        }
        self.plan.toggle(day, subject_id)
    }

    pub fn toggle_token(&mut self, day: &str, subject: &str) -> Result<Option<Decision>> {
        let day = self.window.resolve(day)?;
        let subject_id = resolve_subject(subject, &self.subjects)?;
        self.toggle(day, &subject_id)
    }

    /// Sets decisions from `<action>:<day>:<subject>` tokens. Later tokens win.
    pub fn apply_tokens(&mut self, args: &[String]) -> Result<usize> {
        let decisions = parse_decision_args(args, &self.window, &self.subjects)?;
        for d in &decisions {
            self.plan.set(d.day, &d.subject_id, Some(d.decision))?;
        }
        Ok(decisions.len())
    }

    pub fn reset(&mut self) {
        self.plan.clear();
        log::info!("plan reset");
    }

    pub fn adjust_threshold(&self, delta: f64) -> Result<f64> {
        self.dashboard.adjust_threshold(delta)
    }

    pub fn report(&self) -> Result<ForecastReport> {
        let threshold = self.dashboard.threshold()?;
        Ok(ForecastReport::build(&self.subjects, &self.plan, &self.window, threshold))
    }
}
