use anyhow::{anyhow, Result};

use crate::model::decision::Decision;
use crate::model::subject::Subject;
use crate::window::PlanningWindow;

const ACTIONS: [&str; 2] = ["attend", "skip"];

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDecision {
    pub day: usize,
    pub subject_id: String,
    pub decision: Decision,
}

/// Parses `<action>:<day>:<subject>` tokens, e.g. `attend:tom:math` or `s:fri:CS101`.
pub fn parse_decision_args(
    args: &[String],
    window: &PlanningWindow,
    subjects: &[Subject],
) -> Result<Vec<PlannedDecision>> {
    args.iter()
        .map(|arg| {
            let mut parts = arg.splitn(3, ':');
            let (action, day, subject) = match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(d), Some(s)) if !a.is_empty() && !s.is_empty() => (a, d, s),
                _ => return Err(anyhow!("Expected <action>:<day>:<subject>, got '{}'", arg)),
            };

            let decision = match expand_key(&action.to_lowercase(), &ACTIONS)?.as_str() {
                "attend" => Decision::Attend,
                _ => Decision::Skip,
            };

            Ok(PlannedDecision {
                day: window.resolve(day)?,
                subject_id: resolve_subject(subject, subjects)?,
                decision,
            })
        })
        .collect()
}

/// Exact id first, then a unique case-insensitive name or name prefix.
pub fn resolve_subject(token: &str, subjects: &[Subject]) -> Result<String> {
    if let Some(s) = subjects.iter().find(|s| s.id == token) {
        return Ok(s.id.clone());
    }

    let names: Vec<String> = subjects.iter().map(|s| s.name.to_lowercase()).collect();
    let candidates: Vec<&str> = names.iter().map(String::as_str).collect();
    let name = expand_key(&token.to_lowercase(), &candidates)
        .map_err(|e| anyhow!("Subject: {}", e))?;

    subjects
        .iter()
        .find(|s| s.name.to_lowercase() == name)
        .map(|s| s.id.clone())
        .ok_or_else(|| anyhow!("Unknown subject: '{}'", token))
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn window() -> PlanningWindow {
        PlanningWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn subjects() -> Vec<Subject> {
        vec![
            Subject::new("1", "Mathematics", "Lecture", 30.0, 40.0),
            Subject::new("2", "Mechanics Lab", "Lab", 12.0, 15.0),
            Subject::new("CS101", "Networks", "Lecture", 20.0, 22.0),
        ]
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_decisions() {
        let parsed = parse_decision_args(
            &args(&["attend:today:1", "s:fri:net", "A:+2:mechanics lab"]),
            &window(),
            &subjects(),
        )
        .unwrap();

        assert_eq!(
            parsed,
            vec![
                PlannedDecision { day: 0, subject_id: "1".to_string(), decision: Decision::Attend },
                PlannedDecision { day: 4, subject_id: "CS101".to_string(), decision: Decision::Skip },
                PlannedDecision { day: 2, subject_id: "2".to_string(), decision: Decision::Attend },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let w = window();
        let s = subjects();
        assert!(parse_decision_args(&args(&["attend:tom"]), &w, &s).is_err());
        assert!(parse_decision_args(&args(&["maybe:tom:1"]), &w, &s).is_err());
        assert!(parse_decision_args(&args(&["skip:+9:1"]), &w, &s).is_err());
        assert!(parse_decision_args(&args(&["skip:tom:chemistry"]), &w, &s).is_err());
    }

    #[test]
    fn test_resolve_subject() {
        let s = subjects();
        assert_eq!(resolve_subject("CS101", &s).unwrap(), "CS101");
        assert_eq!(resolve_subject("math", &s).unwrap(), "1");
        assert_eq!(resolve_subject("NETWORKS", &s).unwrap(), "CS101");
        // "m" matches both Mathematics and Mechanics Lab
        assert!(resolve_subject("m", &s).is_err());
    }

    #[test]
    fn test_expand_key() {
        let candidates = vec!["attend", "skip"];

        assert_eq!(expand_key("a", &candidates).unwrap(), "attend");
        assert_eq!(expand_key("sk", &candidates).unwrap(), "skip");
        assert_eq!(expand_key("skip", &candidates).unwrap(), "skip");

        assert!(expand_key("x", &candidates).is_err());
        assert!(expand_key("", &candidates).is_err()); // matches both
    }
}
