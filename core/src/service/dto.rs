use chrono::{DateTime, Utc};

use crate::forecast::Advice;

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalCard {
    pub attended: f64,
    pub conducted: f64,
    pub percentage: f64, // capped at 99.9 unless nothing was missed
    pub advice: Advice,
    pub meets_threshold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub attended: f64,
    pub conducted: f64,
    pub reported_percentage: f64,
    pub advice: Advice,
    pub meets_threshold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub imported_at: DateTime<Utc>,
    pub threshold: f64,
    pub global: GlobalCard,
    pub subjects: Vec<SubjectCard>,
}
