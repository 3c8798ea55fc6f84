//! Settings/progress files on disk
//!
//! Features:
//! - Plain JSON records (`settings.json`, `progress.json`)
//! - Missing files fall back to defaults (settings are written back)
//! - Writes go through a `.tmp` sibling and a rename
//! - Malformed files are reported, never silently replaced

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::progress::PlayerProgress;
use crate::settings::Settings;

pub const SETTINGS_FILE: &str = "settings.json";
pub const PROGRESS_FILE: &str = "progress.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed JSON in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Directory holding the save files
#[derive(Debug, Clone)]
pub struct SaveDir {
    root: PathBuf,
}

impl SaveDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn progress_path(&self) -> PathBuf {
        self.root.join(PROGRESS_FILE)
    }

    /// Load settings; a missing file yields defaults, which are saved
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.settings_path();
        match read_json::<Settings>(&path)? {
            Some(mut settings) => {
                settings.sanitize();
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("No settings at {}, writing defaults", path.display());
                let settings = Settings::default();
                self.save_settings(&settings)?;
                Ok(settings)
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        write_json(&self.settings_path(), settings)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load progress; `None` if no game has been saved yet
    pub fn load_progress(&self) -> Result<Option<PlayerProgress>> {
        let path = self.progress_path();
        let progress = read_json::<PlayerProgress>(&path)?;
        match &progress {
            Some(p) => log::info!("Loaded progress: level {}, {} HP", p.level, p.health),
            None => log::info!("No saved progress, starting fresh"),
        }
        Ok(progress)
    }

    pub fn save_progress(&self, progress: &PlayerProgress) -> Result<()> {
        write_json(&self.progress_path(), progress)?;
        log::info!("Progress saved (level {})", progress.level);
        Ok(())
    }
}

/// Read and parse a JSON file; `Ok(None)` if it does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|source| PersistenceError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Write JSON to `<path>.tmp`, then rename over `path`
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
