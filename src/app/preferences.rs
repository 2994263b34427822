use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const CONFIG_DIR_ENV: &str = "WEATHER_DASH_CONFIG_DIR";
const FILE_NAME: &str = "last_search.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
}

/// Single-slot store for the last place the user searched for.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under `$WEATHER_DASH_CONFIG_DIR`, falling back to
    /// `$HOME/.config/weather-dash`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(Self::at(PathBuf::from(base).join(FILE_NAME)));
        }
        let home = std::env::var_os("HOME")?;
        Some(Self::at(
            PathBuf::from(home)
                .join(".config")
                .join("weather-dash")
                .join(FILE_NAME),
        ))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set(&self, name: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("creating preference directory failed")?;
        }
        let payload = serde_json::to_string(&SavedSearch {
            name: name.to_string(),
        })
        .context("serializing saved search failed")?;
        fs::write(&self.path, payload).context("writing saved search failed")
    }

    /// `None` when nothing is stored or the stored payload is unreadable.
    #[must_use]
    pub fn get(&self) -> Option<SavedSearch> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SavedSearch>(&content) {
            Ok(saved) => Some(saved),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring invalid saved search");
                None
            }
        }
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context("removing saved search failed"),
        }
    }
}
