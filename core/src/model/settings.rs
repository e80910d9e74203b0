use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 75.0;
pub const MIN_THRESHOLD: f64 = 0.0;
pub const MAX_THRESHOLD: f64 = 100.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
        }
    }
}

pub fn clamp_threshold(value: f64) -> f64 {
    if value.is_nan() {
        return DEFAULT_THRESHOLD;
    }
    value.clamp(MIN_THRESHOLD, MAX_THRESHOLD)
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(Settings::with_threshold(120.0).threshold, 100.0);
        assert_eq!(Settings::with_threshold(-5.0).threshold, 0.0);
        assert_eq!(Settings::with_threshold(f64::NAN).threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_missing_threshold_uses_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.threshold, DEFAULT_THRESHOLD);
    }
}
