use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::subject::AttendanceSnapshot;
use crate::repository::data_dir;
use crate::repository::traits::SnapshotRepository;

const SNAPSHOT_FILE_NAME: &str = "attendance.json";

#[derive(Clone)]
pub struct FileSnapshotRepository {
    file_path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = data_dir(base_dir)?.join(SNAPSHOT_FILE_NAME);
        Ok(FileSnapshotRepository { file_path: path })
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<AttendanceSnapshot>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let snapshot = serde_json::from_reader(reader)
            .with_context(|| format!("Corrupt attendance data in {}", self.file_path.display()))?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &AttendanceSnapshot) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }
}
