//! Save manager for handling save/load operations
//!
//! This module provides the SaveManager struct which handles:
//! - Picking the save directory
//! - Loading JSON documents, falling back to defaults
//! - Writing JSON documents via a temp file and rename
//! - Autosave timing

use super::saveable::Saveable;
use super::SaveError;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Environment variable that overrides the save directory
pub const SAVE_DIR_ENV: &str = "PANDA_DESK_DIR";
const APP_DIR_NAME: &str = "panda_desk";

pub struct SaveManager {
    save_directory: PathBuf,
    autosave_interval: Duration,
    last_autosave: Option<Instant>,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            autosave_interval: Duration::from_secs(10),
            last_autosave: None,
        })
    }

    /// `$PANDA_DESK_DIR`, else the platform data dir, else the working directory
    pub fn default_directory() -> PathBuf {
        if let Some(dir) = std::env::var_os(SAVE_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn save_directory(&self) -> &Path {
        &self.save_directory
    }

    pub fn path_for<T: Saveable>(&self) -> PathBuf {
        self.save_directory.join(T::FILE_NAME)
    }

    /// Load a document, `Ok(None)` if the file does not exist yet
    pub fn load<T: Saveable>(&self) -> Result<Option<T>, SaveError> {
        let filepath = self.path_for::<T>();

        if !filepath.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&filepath)?;
        let mut value: T = serde_json::from_str(&json)?;
        value.after_load();

        Ok(Some(value))
    }

    /// Load a document, falling back to `T::default()` if it is missing or broken
    ///
    /// The flag is true when the file existed and parsed.
    pub fn load_or_default<T: Saveable>(&self) -> (T, bool) {
        match self.load::<T>() {
            Ok(Some(value)) => (value, true),
            Ok(None) => (T::default(), false),
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", T::FILE_NAME, e);
                (T::default(), false)
            }
        }
    }

    /// Write a document as pretty JSON
    pub fn save<T: Saveable>(&self, value: &T) -> Result<PathBuf, SaveError> {
        let filepath = self.path_for::<T>();
        let tmp = filepath.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &filepath)?;

        debug!("Saved {}", filepath.display());
        Ok(filepath)
    }

    /// Check if autosave is needed
    pub fn should_autosave(&self, now: Instant) -> bool {
        match self.last_autosave {
            Some(last_save) => now.saturating_duration_since(last_save) >= self.autosave_interval,
            None => true,
        }
    }

    pub fn mark_autosaved(&mut self, now: Instant) {
        self.last_autosave = Some(now);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Fresh, empty directory under the system temp dir
    pub(crate) fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "panda_desk_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }
}
