use crate::forecast::{apply_ceiling, percentage, weight};
use crate::model::decision::{Decision, DecisionPlan};
use crate::model::subject::Subject;
use crate::window::PlanningWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub subject_id: String,
    pub name: String,
    pub category: String,
    pub weight: f64,

    pub current_attended: f64,
    pub current_conducted: f64,
    pub added_attended: f64,
    pub added_conducted: f64,

    pub current_percentage: f64,
    pub projected_percentage: f64,
    pub delta: f64,
}

impl ForecastRow {
    pub fn projected_attended(&self) -> f64 {
        self.current_attended + self.added_attended
    }

    pub fn projected_conducted(&self) -> f64 {
        self.current_conducted + self.added_conducted
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobalForecast {
    pub current_attended: f64,
    pub current_conducted: f64,
    pub added_attended: f64,
    pub added_conducted: f64,

    pub current_percentage: f64,
    pub projected_percentage: f64,
    pub delta: f64,
}

impl GlobalForecast {
    pub fn projected_attended(&self) -> f64 {
        self.current_attended + self.added_attended
    }

    pub fn projected_conducted(&self) -> f64 {
        self.current_conducted + self.added_conducted
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub rows: Vec<ForecastRow>,
    pub global: GlobalForecast,
}

pub fn project(subjects: &[Subject], plan: &DecisionPlan, window: &PlanningWindow) -> Forecast {
    let mut global = GlobalForecast::default();

    let rows: Vec<ForecastRow> = subjects
        .iter()
        .map(|subject| {
            let w = weight(&subject.category);
            let mut added_attended = 0.0;
            let mut added_conducted = 0.0;

            for day in window.days() {
                match plan.get(day.offset, &subject.id) {
                    Some(Decision::Attend) => {
                        added_attended += w;
                        added_conducted += w;
                    }
                    Some(Decision::Skip) => added_conducted += w,
                    None => {}
                }
            }

            global.current_attended += subject.attended;
            global.current_conducted += subject.conducted;
            global.added_attended += added_attended;
            global.added_conducted += added_conducted;

            let current_percentage = percentage(subject.attended, subject.conducted);
            let projected_percentage = percentage(
                subject.attended + added_attended,
                subject.conducted + added_conducted,
            );

            ForecastRow {
                subject_id: subject.id.clone(),
                name: subject.name.clone(),
                category: subject.category.clone(),
                weight: w,
                current_attended: subject.attended,
                current_conducted: subject.conducted,
                added_attended,
                added_conducted,
                current_percentage,
                projected_percentage,
                delta: projected_percentage - current_percentage,
            }
        })
        .collect();

    global.current_percentage = percentage(global.current_attended, global.current_conducted);
    let projected_attended = global.projected_attended();
    let projected_conducted = global.projected_conducted();
    global.projected_percentage = apply_ceiling(
        projected_attended,
        projected_conducted,
        percentage(projected_attended, projected_conducted),
    );
    global.delta = global.projected_percentage - global.current_percentage;

    log::debug!(
        "projected {} subjects with {} decisions: {:.2}% -> {:.2}%",
        rows.len(),
        plan.len(),
        global.current_percentage,
        global.projected_percentage
    );

    Forecast { rows, global }
}
