use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::settings::{clamp_threshold, Settings};
use crate::repository::data_dir;
use crate::repository::traits::SettingsRepository;

const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Clone)]
pub struct FileSettingsRepository {
    file_path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = data_dir(base_dir)?.join(SETTINGS_FILE_NAME);
        Ok(Self { file_path: path })
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<Settings> {
        if !self.file_path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.file_path)?;
        let mut settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings in {}", self.file_path.display()))?;
        settings.threshold = clamp_threshold(settings.threshold);
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}
