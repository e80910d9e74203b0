use crate::forecast::{advise, project, Advice, ForecastRow, GlobalForecast};
use crate::model::decision::DecisionPlan;
use crate::model::subject::Subject;
use crate::window::PlanningWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectOutlook {
    pub row: ForecastRow,
    pub current: Advice,
    pub projected: Advice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub threshold: f64,
    pub subjects: Vec<SubjectOutlook>,
    pub global: GlobalForecast,
    pub global_current: Advice,
    pub global_projected: Advice,
}

impl ForecastReport {
    pub fn build(
        subjects: &[Subject],
        plan: &DecisionPlan,
        window: &PlanningWindow,
        threshold: f64,
    ) -> Self {
        let forecast = project(subjects, plan, window);

        let outlooks = forecast
            .rows
            .into_iter()
            .map(|row| {
                let current = advise(row.current_attended, row.current_conducted, threshold);
                let projected = advise(row.projected_attended(), row.projected_conducted(), threshold);
                SubjectOutlook { row, current, projected }
            })
            .collect();

        let global = forecast.global;
        let global_current = advise(global.current_attended, global.current_conducted, threshold);
        let global_projected = advise(
            global.projected_attended(),
            global.projected_conducted(),
            threshold,
        );

        Self {
            threshold,
            subjects: outlooks,
            global,
            global_current,
            global_projected,
        }
    }

    pub fn meets_threshold(&self, pct: f64) -> bool {
        pct >= self.threshold
    }
}
