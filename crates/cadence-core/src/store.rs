//! Durable storage for [`ProgressState`].
//!
//! The whole state lives in one JSON file. It is read once at start and
//! overwritten in full after every mutation; there are no partial updates and
//! no schema version tag.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    error::{CadenceError, Result},
    models::ProgressState,
};

/// File name of the persisted state inside the data directory.
pub const STORAGE_KEY: &str = "ielts_study_state_v2.json";

/// Reads and writes the persisted progress state.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Creates a store backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the default state file path following the XDG Base Directory
    /// specification: `$XDG_DATA_HOME/cadence/ielts_study_state_v2.json`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::XdgDirectory` if the data directory cannot be
    /// determined or created.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("cadence")
            .place_data_file(STORAGE_KEY)
            .map_err(|e| CadenceError::XdgDirectory(e.to_string()))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state.
    ///
    /// A missing, unreadable or malformed file yields the default empty
    /// state; the problem is logged and never returned as an error.
    pub fn load(&self) -> ProgressState {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved progress at {}", self.path.display());
                return ProgressState::default();
            }
            Err(e) => {
                warn!(
                    "Could not read saved progress at {}: {e}; starting fresh",
                    self.path.display()
                );
                return ProgressState::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    "Saved progress at {} is corrupt: {e}; starting fresh",
                    self.path.display()
                );
                ProgressState::default()
            }
        }
    }

    /// Overwrites the file with the full serialized `state`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::FileSystem` if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, state: &ProgressState) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CadenceError::file_system(parent, e))?;
        }

        let json = serde_json::to_string(state)?;
        fs::write(&self.path, json).map_err(|e| CadenceError::file_system(&self.path, e))?;
        debug!("Saved progress to {}", self.path.display());
        Ok(())
    }
}
