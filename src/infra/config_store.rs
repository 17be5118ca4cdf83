// ============================================================
// Layer 5 — Config Store
// ============================================================
// Reads and writes SessionConfig as pretty-printed JSON.
//
// Example file:
//   {
//     "size": 3,
//     "max_retries": 5,
//     "precision": 4,
//     "language": "uk"
//   }
//
// Every field is optional; missing ones take their defaults.
//
// Why keep settings in a file at all?
//   Classroom runs repeat the same choices (3D, Ukrainian
//   wording, 4 decimals). A saved file replays them with a
//   single --config flag instead of retyping every option.
//
// Values are not range-checked here. `precision` is clamped
// where it is used (format_coordinate) and `size` is checked
// by Dimension's TryFrom during deserialisation.
//
// Reference: serde_json::to_string_pretty / from_str

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::check_use_case::SessionConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the config file.
    pub fn load(&self) -> Result<SessionConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded session config from '{}'", self.path.display());
        Ok(cfg)
    }

    /// Write `cfg` to the config file, creating parent directories.
    pub fn save(&self, cfg: &SessionConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved session config to '{}'", self.path.display());
        Ok(())
    }
}
