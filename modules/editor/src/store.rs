//! Loads settings at startup and writes them back on shutdown.

use std::fs;
use std::path::{Path, PathBuf};

use autostrut::errors::Result;
use autostrut::settings::Settings;

/// Owns the global `Settings` and the file they persist to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    settings: Settings,
}

impl SettingsStore {
    /// Loads settings from `path`.
    ///
    /// A missing or malformed file is not an error, the defaults are used
    /// instead and the file gets rewritten on the next `save`.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_owned();
        let settings = match fs::read_to_string(&path) {
            Ok(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    info!("[Settings] loads {:?}.", path);
                    settings
                }
                Err(err) => {
                    debug!("[Settings] {:?} is malformed, using defaults. {}", path, err);
                    Settings::default()
                }
            },
            Err(err) => {
                debug!("[Settings] can not read {:?}, using defaults. {}", path, err);
                Settings::default()
            }
        };

        SettingsStore {
            path: Some(path),
            settings,
        }
    }

    /// Creates a store which never touches the file system.
    pub fn in_memory(settings: Settings) -> Self {
        SettingsStore {
            path: None,
            settings,
        }
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref().map(|v| v.as_path())
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Restores the defaults in memory.
    pub fn reset(&mut self) {
        self.settings = Settings::default();
    }

    /// Writes the settings back to their file, if there is one.
    pub fn save(&self) -> Result<()> {
        let path = match self.path {
            Some(ref path) => path,
            None => return Ok(()),
        };

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        fs::write(path, self.settings.to_json()?)?;
        info!("[Settings] saves {:?}.", path);
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        SettingsStore::in_memory(Settings::default())
    }
}
