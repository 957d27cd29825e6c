//! Settings file persistence for markveil
//!
//! This module handles loading and saving the settings record to a
//! platform-specific directory with robust error handling and graceful
//! fallback to defaults.

use crate::config::MarkerSettings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "markveil";

/// Settings file name
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Backup settings file name (used during atomic writes)
const SETTINGS_BACKUP_NAME: &str = "settings.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Settings Store
// ─────────────────────────────────────────────────────────────────────────────

/// File-backed store for the settings record.
///
/// The store is constructed over an explicit directory so that tests and
/// embedders can point it at a sandbox; `from_default_dir` resolves the
/// platform-specific location:
/// - **Windows**: `%APPDATA%\markveil\`
/// - **macOS**: `~/Library/Application Support/markveil/`
/// - **Linux**: `~/.config/markveil/`
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Create a store over the platform-specific config directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigDirNotFound` if the base directory cannot be
    /// determined (e.g., the HOME environment variable is not set).
    pub fn from_default_dir() -> Result<Self> {
        dirs::config_dir()
            .map(|base| Self::at(base.join(APP_NAME)))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Create a store over an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the full path to the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE_NAME)
    }

    /// Ensure the store directory exists, creating it if necessary.
    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            debug!("Creating config directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir).map_err(|e| Error::ConfigSave {
                path: self.dir.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the settings record, falling back to defaults.
    ///
    /// This never fails: an absent, empty, or corrupted settings file yields
    /// `MarkerSettings::default()` (with a warning logged for corruption).
    /// A partial record merge-fills missing fields from their defaults.
    pub fn load(&self) -> MarkerSettings {
        self.load_internal()
            .unwrap_or_warn_default(MarkerSettings::default(), "Failed to load settings")
    }

    /// Internal implementation of settings loading.
    fn load_internal(&self) -> Result<MarkerSettings> {
        let path = self.settings_path();

        if !path.exists() {
            debug!("Settings file not found at {}, using defaults", path.display());
            return Ok(MarkerSettings::default());
        }

        debug!("Loading settings from: {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|e| Error::ConfigLoad {
            path: path.clone(),
            source: Box::new(e),
        })?;

        if contents.trim().is_empty() {
            debug!("Settings file is empty, using defaults");
            return Ok(MarkerSettings::default());
        }

        let settings: MarkerSettings = serde_json::from_str(&contents).map_err(|e| {
            warn!(
                "Settings file at {} contains invalid JSON: {}",
                path.display(),
                e
            );
            Error::ConfigParse {
                message: format!("Failed to parse settings file: {}", e),
                source: Some(Box::new(e)),
            }
        })?;

        info!("Settings loaded successfully from {}", path.display());
        Ok(settings)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save
    // ─────────────────────────────────────────────────────────────────────────

    /// Save the settings record.
    ///
    /// This performs an atomic write by writing to a backup file first and
    /// then renaming it over the settings file.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigSave` if the directory or either file cannot be
    /// written.
    pub fn save(&self, settings: &MarkerSettings) -> Result<()> {
        self.ensure_dir()?;
        let path = self.settings_path();
        let backup_path = self.dir.join(SETTINGS_BACKUP_NAME);

        debug!("Saving settings to: {}", path.display());

        let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
            path: path.clone(),
            source: Box::new(e),
        })?;

        fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
            path: backup_path.clone(),
            source: Box::new(e),
        })?;

        fs::rename(&backup_path, &path).map_err(|e| Error::ConfigSave {
            path: path.clone(),
            source: Box::new(e),
        })?;

        info!("Settings saved successfully to {}", path.display());
        Ok(())
    }

    /// Save the settings record, ignoring errors.
    ///
    /// Best-effort variant for the toggle path: a failed write must not block
    /// the style refresh that triggered it.
    ///
    /// # Returns
    ///
    /// Returns `true` if the save was successful, `false` otherwise.
    pub fn save_silent(&self, settings: &MarkerSettings) -> bool {
        match self.save(settings) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save settings: {}", e);
                false
            }
        }
    }
}

impl Default for SettingsStore {
    /// Fall back to a relative directory when the platform directory is
    /// unavailable, so construction itself cannot fail.
    fn default() -> Self {
        Self::from_default_dir().unwrap_or_else(|_| Self::at(Path::new(APP_NAME)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
