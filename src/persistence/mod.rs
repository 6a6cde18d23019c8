//! Save/load persistence
//!
//! Only level, score and health are stored. Bullets, aliens and bonuses are
//! rebuilt on load, and level-dependent speeds are replayed from settings.
//!
//! Features:
//! - Plain JSON record with exactly three required fields
//! - Atomic write (tmp → save)
//! - Missing and corrupt saves reported as distinct recoverable errors

mod error;

pub use error::{PersistenceError, SaveDataError};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default save file name
pub const DEFAULT_SAVE_PATH: &str = "savefile.json";

/// The persisted part of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveData {
    /// Level reached (at least 1)
    pub level: u32,
    pub score: u64,
    /// Lives left
    pub health: u32,
}

impl SaveData {
    /// Parse and validate a save record
    pub fn from_json(json: &str) -> Result<Self, SaveDataError> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse and validate raw file contents; invalid UTF-8 is a parse error
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SaveDataError> {
        let data: SaveData = serde_json::from_slice(bytes)?;
        if data.level == 0 {
            return Err(SaveDataError::ZeroLevel);
        }
        Ok(data)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Write a save record, replacing any previous one
pub fn save(path: impl AsRef<Path>, data: &SaveData) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let tmp = tmp_path(path);
    let io_err = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = data.to_json().map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(&tmp, json).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;
    log::info!(
        "Game saved to {} (level {}, score {}, health {})",
        path.display(),
        data.level,
        data.score,
        data.health
    );
    Ok(())
}

/// Read a save record
pub fn load(path: impl AsRef<Path>) -> Result<SaveData, PersistenceError> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PersistenceError::NotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    SaveData::from_slice(&bytes).map_err(|source| PersistenceError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
