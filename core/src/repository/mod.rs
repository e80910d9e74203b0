pub mod file;
pub mod settings;
pub mod traits;

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

pub use file::FileSnapshotRepository;
pub use settings::FileSettingsRepository;
pub use traits::{SettingsRepository, SnapshotRepository};

const DEFAULT_DIR_NAME: &str = ".safeskip";

pub fn data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DEFAULT_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)
        .with_context(|| format!("Could not create data directory {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
pub(crate) fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("safeskip-test-{}", uuid::Uuid::new_v4()))
}
