pub mod advisory;
pub mod projection;
pub mod report;
pub mod weighting;

pub use advisory::{advise, Advice, AdviceStatus, Hours};
pub use projection::{project, Forecast, ForecastRow, GlobalForecast};
pub use report::{ForecastReport, SubjectOutlook};
pub use weighting::weight;

/// Highest percentage shown while at least one conducted hour was missed.
pub const IMPERFECT_CEILING: f64 = 99.9;

pub fn percentage(attended: f64, conducted: f64) -> f64 {
    if conducted > 0.0 {
        attended / conducted * 100.0
    } else {
        0.0
    }
}

pub fn apply_ceiling(attended: f64, conducted: f64, pct: f64) -> f64 {
    if attended < conducted && pct > IMPERFECT_CEILING {
        IMPERFECT_CEILING
    } else {
        pct
    }
}
