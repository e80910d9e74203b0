use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::forecast::percentage;

pub const DEFAULT_CATEGORY: &str = "Lecture";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,

    // The import service calls this column "type".
    #[serde(rename = "type", alias = "category", default = "default_category")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub attended: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub conducted: f64,

    // Display only.
    #[serde(default, deserialize_with = "lenient_number")]
    pub percentage: f64,
}

impl Subject {
    pub fn new(id: &str, name: &str, category: &str, attended: f64, conducted: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            attended,
            conducted,
            percentage: percentage(attended, conducted),
        }
    }

    pub fn current_percentage(&self) -> f64 {
        percentage(self.attended, self.conducted)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReportedTotals {
    #[serde(default, deserialize_with = "lenient_number")]
    pub attended: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub conducted: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub percentage: f64,
}

impl ReportedTotals {
    pub fn from_subjects(subjects: &[Subject]) -> Self {
        let attended = subjects.iter().map(|s| s.attended).sum();
        let conducted = subjects.iter().map(|s| s.conducted).sum();
        Self {
            attended,
            conducted,
            percentage: percentage(attended, conducted),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttendanceSnapshot {
    pub import_id: Uuid,
    pub imported_at: DateTime<Utc>,
    pub global: ReportedTotals,
    pub subjects: Vec<Subject>,
}

impl AttendanceSnapshot {
    pub fn new(global: ReportedTotals, subjects: Vec<Subject>) -> Self {
        Self {
            import_id: Uuid::new_v4(),
            imported_at: Utc::now(),
            global,
            subjects,
        }
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(coerce_number).unwrap_or(0.0))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid subject id: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_garbage_numbers_become_zero() {
        let json = r#"{"id": 7, "name": "Physics", "attended": "abc", "conducted": null}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();

        assert_eq!(subject.id, "7");
        assert_eq!(subject.category, "Lecture");
        assert_eq!(subject.attended, 0.0);
        assert_eq!(subject.conducted, 0.0);
        assert_eq!(subject.percentage, 0.0);
    }

    #[test]
    fn test_numeric_strings_and_type_column() {
        let json = r#"{"id": "CS101", "name": "Networks", "type": "Lab", "attended": "27", "conducted": 30, "percentage": "90.0"}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();

        assert_eq!(subject.category, "Lab");
        assert_eq!(subject.attended, 27.0);
        assert_eq!(subject.conducted, 30.0);
        assert_eq!(subject.percentage, 90.0);
    }

    #[test]
    fn test_non_finite_strings_are_rejected() {
        assert_eq!(coerce_number(&Value::String("NaN".to_string())), 0.0);
        assert_eq!(coerce_number(&Value::String("inf".to_string())), 0.0);
    }

    #[test]
    fn test_reported_totals_from_subjects() {
        let subjects = vec![
            Subject::new("1", "Math", "Lecture", 30.0, 40.0),
            Subject::new("2", "Chem Lab", "Lab", 9.0, 12.0),
        ];
        let totals = ReportedTotals::from_subjects(&subjects);
        assert_eq!(totals.attended, 39.0);
        assert_eq!(totals.conducted, 52.0);
        assert!((totals.percentage - 75.0).abs() < 1e-9);
    }
}
