use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub const WINDOW_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanningDay {
    pub offset: usize,
    pub date: NaiveDate,
    pub label: String, // "Mon 19"
    pub is_sunday: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanningWindow {
    days: Vec<PlanningDay>,
}

impl PlanningWindow {
    pub fn starting(start: NaiveDate) -> Self {
        let days = (0..WINDOW_DAYS)
            .map(|offset| {
                let date = start + Duration::days(offset as i64);
                PlanningDay {
                    offset,
                    date,
                    label: date.format("%a %d").to_string(),
                    is_sunday: date.weekday() == Weekday::Sun,
                }
            })
            .collect();
        Self { days }
    }

    pub fn today() -> Self {
        Self::starting(Local::now().date_naive())
    }

    pub fn days(&self) -> &[PlanningDay] {
        &self.days
    }

    pub fn day(&self, offset: usize) -> Option<&PlanningDay> {
        self.days.get(offset)
    }

    /// Resolves a human day token (today, tom, fri, +3, 2) to an offset in the window.
    pub fn resolve(&self, token: &str) -> Result<usize> {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            bail!("Empty day");
        }

        let offset = match token.as_str() {
            "today" | "tod" => 0,
            "tomorrow" | "tom" => 1,
            _ => {
                if let Some(rest) = token.strip_prefix('+') {
                    rest.parse::<usize>()
                        .map_err(|_| anyhow!("Invalid relative day: {}", token))?
                } else if let Ok(n) = token.parse::<usize>() {
                    n
                } else {
                    let weekday = parse_weekday_str(&token)?;
                    return self
                        .days
                        .iter()
                        .find(|d| d.date.weekday() == weekday)
                        .map(|d| d.offset)
                        .ok_or_else(|| anyhow!("No {} in the planning window", token));
                }
            }
        };

        if offset >= WINDOW_DAYS {
            bail!("Day '{}' is outside the {}-day planning window", token, WINDOW_DAYS);
        }
        Ok(offset)
    }
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid day: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-10-19 is a Monday.
    fn window() -> PlanningWindow {
        PlanningWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    #[test]
    fn test_window_has_seven_labelled_days() {
        let w = window();
        assert_eq!(w.days().len(), WINDOW_DAYS);
        assert_eq!(w.days()[0].label, "Mon 19");
        assert_eq!(w.days()[6].label, "Sun 25");
        assert!(w.days()[6].is_sunday);
        assert_eq!(w.days().iter().filter(|d| d.is_sunday).count(), 1);
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let w = PlanningWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 29).unwrap());
        assert_eq!(w.day(3).unwrap().date, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert!(w.day(7).is_none());
    }

    #[test]
    fn test_resolve_tokens() {
        let w = window();
        assert_eq!(w.resolve("today").unwrap(), 0);
        assert_eq!(w.resolve("tom").unwrap(), 1);
        assert_eq!(w.resolve("+3").unwrap(), 3);
        assert_eq!(w.resolve("6").unwrap(), 6);
        assert_eq!(w.resolve("fri").unwrap(), 4);
        assert_eq!(w.resolve("Sunday").unwrap(), 6);
        assert_eq!(w.resolve("mon").unwrap(), 0);
    }

    #[test]
    fn test_resolve_rejects_out_of_window() {
        let w = window();
        assert!(w.resolve("+7").is_err());
        assert!(w.resolve("9").is_err());
        assert!(w.resolve("someday").is_err());
        assert!(w.resolve("").is_err());
    }
}
