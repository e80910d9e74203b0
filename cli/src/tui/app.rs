use anyhow::Result;
use ratatui::widgets::TableState;
use safeskip_core::{
    Decision, ForecastReport, PlannerUseCase, SettingsRepository, SnapshotRepository, WINDOW_DAYS,
};

pub struct App<'a, R: SnapshotRepository, S: SettingsRepository> {
    pub planner: PlannerUseCase<'a, R, S>,
    pub state: TableState,
    pub day: usize,
    pub message: Option<String>,
}

impl<'a, R: SnapshotRepository, S: SettingsRepository> App<'a, R, S> {
    pub fn new(planner: PlannerUseCase<'a, R, S>) -> Self {
        let mut state = TableState::default();
        if !planner.subjects().is_empty() {
            state.select(Some(0));
        }
        App {
            planner,
            state,
            day: 0,
            message: None,
        }
    }

    pub fn report(&self) -> Result<ForecastReport> {
        self.planner.report()
    }

    pub fn next_subject(&mut self) {
        let len = self.planner.subjects().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous_subject(&mut self) {
        let len = self.planner.subjects().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn next_day(&mut self) {
        self.day = (self.day + 1) % WINDOW_DAYS;
    }

    pub fn previous_day(&mut self) {
        self.day = (self.day + WINDOW_DAYS - 1) % WINDOW_DAYS;
    }

    pub fn selected_subject_id(&self) -> Option<String> {
        self.state
            .selected()
            .and_then(|i| self.planner.subjects().get(i))
            .map(|s| s.id.clone())
    }

    pub fn decision_at(&self, day: usize, subject_id: &str) -> Option<Decision> {
        self.planner.decision(day, subject_id)
    }

    pub fn toggle(&mut self) {
        if let Some(id) = self.selected_subject_id() {
            self.message = self.planner.toggle(self.day, &id).err().map(|e| e.to_string());
        }
    }

    pub fn reset(&mut self) {
        self.planner.reset();
        self.message = Some("Plan reset".to_string());
    }

    pub fn adjust_threshold(&mut self, delta: f64) {
        self.message = match self.planner.adjust_threshold(delta) {
            Ok(t) => Some(format!("Goal: {}%", t)),
            Err(e) => Some(e.to_string()),
        };
    }
}
