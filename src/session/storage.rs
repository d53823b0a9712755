use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const TOUR_FLAG_VERSION: u32 = 1;

/// The one value that outlives a session: whether the product tour was
/// finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourFlag {
    pub version: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Default for TourFlag {
    fn default() -> Self {
        Self {
            version: TOUR_FLAG_VERSION,
            completed: false,
            completed_at: None,
        }
    }
}

impl TourFlag {
    pub fn mark_completed(&mut self) {
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    pub fn clear(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }
}

/// Get the default tour flag path (<config dir>/trustgraph/tour.json)
pub fn get_tour_flag_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("tour.json"))
}

/// Load the tour flag from a JSON file
///
/// If the file doesn't exist, returns a fresh (not completed) flag.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_tour_flag(path: &Path) -> Result<TourFlag> {
    if !path.exists() {
        return Ok(TourFlag::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open tour flag file at {}", path.display()))?;

    let flag: TourFlag = serde_json::from_reader(file).context("Failed to load tour flag")?;

    if flag.version != TOUR_FLAG_VERSION {
        anyhow::bail!("Unsupported tour flag version: {}", flag.version);
    }

    Ok(flag)
}

/// Save the tour flag atomically, creating the parent directory if needed
pub fn save_tour_flag(path: &Path, flag: &TourFlag) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, flag).context("Failed to serialize tour flag")?;

    file.commit().context("Failed to save tour flag")?;

    tracing::debug!(path = %path.display(), completed = flag.completed, "saved tour flag");
    Ok(())
}
