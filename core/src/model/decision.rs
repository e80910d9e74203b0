use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::window::WINDOW_DAYS;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Attend,
    Skip,
}

impl Decision {
    pub fn cycle(current: Option<Decision>) -> Option<Decision> {
        match current {
            None => Some(Decision::Attend),
            Some(Decision::Attend) => Some(Decision::Skip),
            Some(Decision::Skip) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecisionKey {
    pub day: usize,
    pub subject_id: String,
}

impl DecisionKey {
    pub fn new(day: usize, subject_id: &str) -> Self {
        Self {
            day,
            subject_id: subject_id.to_string(),
        }
    }
}

/// Hypothetical attend/skip choices for the planning window. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecisionPlan {
    decisions: HashMap<DecisionKey, Decision>,
}

impl DecisionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: usize, subject_id: &str) -> Option<Decision> {
        self.decisions.get(&DecisionKey::new(day, subject_id)).copied()
    }

    pub fn set(&mut self, day: usize, subject_id: &str, decision: Option<Decision>) -> Result<()> {
        check_day(day)?;
        let key = DecisionKey::new(day, subject_id);
        match decision {
            Some(d) => {
                self.decisions.insert(key, d);
            }
            None => {
                self.decisions.remove(&key);
            }
        }
        Ok(())
    }

    pub fn toggle(&mut self, day: usize, subject_id: &str) -> Result<Option<Decision>> {
        let next = Decision::cycle(self.get(day, subject_id));
        self.set(day, subject_id, next)?;
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.decisions.clear();
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

fn check_day(day: usize) -> Result<()> {
    if day >= WINDOW_DAYS {
        bail!("Day offset {} is outside the {}-day planning window", day, WINDOW_DAYS);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_toggles_return_to_unset() {
        let mut plan = DecisionPlan::new();

        assert_eq!(plan.toggle(2, "math").unwrap(), Some(Decision::Attend));
        assert_eq!(plan.toggle(2, "math").unwrap(), Some(Decision::Skip));
        assert_eq!(plan.toggle(2, "math").unwrap(), None);

        assert_eq!(plan.get(2, "math"), None);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_one_decision_per_key() {
        let mut plan = DecisionPlan::new();
        plan.set(0, "math", Some(Decision::Attend)).unwrap();
        plan.set(0, "math", Some(Decision::Skip)).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.get(0, "math"), Some(Decision::Skip));
    }

    #[test]
    fn test_day_outside_window_is_rejected() {
        let mut plan = DecisionPlan::new();
        assert!(plan.toggle(WINDOW_DAYS, "math").is_err());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut plan = DecisionPlan::new();
        plan.toggle(0, "a").unwrap();
        plan.toggle(1, "b").unwrap();
        plan.clear();
        assert!(plan.is_empty());
    }
}
