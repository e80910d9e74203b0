use crate::model::settings::Settings;
use crate::model::subject::AttendanceSnapshot;
use anyhow::Result;

/// Storage for the most recently imported report. Replaced wholesale on import.
pub trait SnapshotRepository {
    fn load(&self) -> Result<Option<AttendanceSnapshot>>;
    fn save(&self, snapshot: &AttendanceSnapshot) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub trait SettingsRepository {
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;
}
