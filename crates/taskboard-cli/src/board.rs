//! Board snapshot storage.
//!
//! A board is a `TaskList` serialized as a JSON array of rows. Writes go to
//! a temp file in the target directory and are renamed into place, so a
//! reader never sees a half-written snapshot.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use taskboard_sync::TaskList;
use tracing::debug;

use crate::error::{BoardError, Result};

/// File name of the board inside the config directory.
pub const BOARD_FILE: &str = "board.json";

/// Writes bytes to `path` via temp file and rename.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| BoardError::DirectoryError {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| BoardError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(data).map_err(write_err)?;
    temp.flush().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Serializes `value` as pretty JSON and writes it atomically.
pub fn atomic_write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, json.as_bytes())
}

/// Reads JSON from `path`, returning `None` if the file does not exist.
pub fn read_json_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(BoardError::ReadError {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Ok(Some(serde_json::from_str(&data)?))
}

/// A board snapshot on disk.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    /// Store for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `board.json` inside `config_dir`.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::new(config_dir.join(BOARD_FILE))
    }

    /// Snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the board; a missing file is an empty board.
    pub fn load(&self) -> Result<TaskList> {
        let list = read_json_optional(&self.path)?.unwrap_or_default();
        debug!(path = %self.path.display(), "Loaded board");
        Ok(list)
    }

    /// Saves the board.
    pub fn save(&self, list: &TaskList) -> Result<()> {
        atomic_write_json(&self.path, list)?;
        debug!(path = %self.path.display(), rows = list.len(), "Saved board");
        Ok(())
    }
}
