pub const LAB_WEIGHT: f64 = 3.0;
pub const STANDARD_WEIGHT: f64 = 1.0;

// A lab block spans three periods.
pub fn weight(category: &str) -> f64 {
    if category.to_lowercase().contains("lab") {
        LAB_WEIGHT
    } else {
        STANDARD_WEIGHT
    }
}
