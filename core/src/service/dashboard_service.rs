use std::collections::HashSet;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::forecast::{advise, apply_ceiling, percentage};
use crate::model::settings::{clamp_threshold, Settings};
use crate::model::subject::{AttendanceSnapshot, ReportedTotals, Subject};
use crate::repository::{SettingsRepository, SnapshotRepository};
use crate::service::dto::{DashboardSummary, GlobalCard, SubjectCard};

pub struct DashboardService<R: SnapshotRepository, S: SettingsRepository> {
    snapshots: R,
    settings: S,
}

impl<R: SnapshotRepository, S: SettingsRepository> DashboardService<R, S> {
    pub fn new(snapshots: R, settings: S) -> Self {
        Self { snapshots, settings }
    }

    /// Replaces the stored report with the one in `payload`.
    pub fn import_report(&self, payload: &str) -> Result<AttendanceSnapshot> {
        let (global, subjects) = parse_report(payload)?;
        let snapshot = AttendanceSnapshot::new(global, subjects);
        self.snapshots.save(&snapshot)?;
        log::info!(
            "imported {} subjects (import {})",
            snapshot.subjects.len(),
            snapshot.import_id
        );
        Ok(snapshot)
    }

    pub fn clear(&self) -> Result<()> {
        self.snapshots.clear()?;
        log::info!("cleared attendance data");
        Ok(())
    }

    pub fn snapshot(&self) -> Result<Option<AttendanceSnapshot>> {
        self.snapshots.load()
    }

    pub fn threshold(&self) -> Result<f64> {
        Ok(self.settings.load()?.threshold)
    }

    pub fn set_threshold(&self, value: f64) -> Result<f64> {
        let settings = Settings::with_threshold(value);
        self.settings.save(&settings)?;
        log::info!("threshold set to {}", settings.threshold);
        Ok(settings.threshold)
    }

    pub fn adjust_threshold(&self, delta: f64) -> Result<f64> {
        let current = self.threshold()?;
        self.set_threshold(clamp_threshold(current + delta))
    }

    pub fn summary(&self) -> Result<Option<DashboardSummary>> {
        let snapshot = match self.snapshots.load()? {
            Some(s) => s,
            None => return Ok(None),
        };
        let threshold = self.threshold()?;

        let g = &snapshot.global;
        let global_pct = apply_ceiling(g.attended, g.conducted, percentage(g.attended, g.conducted));
        let global = GlobalCard {
            attended: g.attended,
            conducted: g.conducted,
            percentage: global_pct,
            advice: advise(g.attended, g.conducted, threshold),
            meets_threshold: global_pct >= threshold,
        };

        let subjects = snapshot
            .subjects
            .iter()
            .map(|s| SubjectCard {
                id: s.id.clone(),
                name: s.name.clone(),
                category: s.category.clone(),
                attended: s.attended,
                conducted: s.conducted,
                reported_percentage: s.percentage,
                advice: advise(s.attended, s.conducted, threshold),
                meets_threshold: s.current_percentage() >= threshold,
            })
            .collect();

        Ok(Some(DashboardSummary {
            imported_at: snapshot.imported_at,
            threshold,
            global,
            subjects,
        }))
    }
}

/// Parses the import service payload: `{"global": {...}, "subjects": [...]}`,
/// optionally wrapped as `{"summary": {...}}`.
pub fn parse_report(payload: &str) -> Result<(ReportedTotals, Vec<Subject>)> {
    let value: Value = serde_json::from_str(payload).context("Import payload is not JSON")?;

    let body = if value.get("subjects").map_or(false, Value::is_array) {
        value
    } else if let Some(summary) = value.get("summary").filter(|s| s.get("subjects").map_or(false, Value::is_array)) {
        summary.clone()
    } else {
        bail!("Invalid data format: expected a subjects list");
    };

    let subjects: Vec<Subject> = serde_json::from_value(body["subjects"].clone())
        .context("Invalid data format: malformed subject")?;

    // Ids 1 and "1" both end up as "1".
    let mut seen = HashSet::new();
    for subject in &subjects {
        if !seen.insert(subject.id.as_str()) {
            bail!("Invalid data format: duplicate subject id '{}'", subject.id);
        }
    }

    let global = match body.get("global") {
        Some(g) if g.is_object() => serde_json::from_value(g.clone())?,
        _ => {
            log::debug!("payload has no global totals, summing subjects");
            ReportedTotals::from_subjects(&subjects)
        }
    };

    Ok((global, subjects))
}
