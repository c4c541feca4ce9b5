//! Configuration management for NeuralLink.
//!
//! Loads configuration from ${NEURALLINK_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::GestureBounds;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for NeuralLink configuration and data directories.
    //!
    //! NEURALLINK_HOME resolution order:
    //! 1. NEURALLINK_HOME environment variable (if set)
    //! 2. ~/.config/neurallink (default)

    use std::path::PathBuf;

    use anyhow::{Result, bail};

    /// Returns the NeuralLink home directory.
    ///
    /// Fails when neither NEURALLINK_HOME nor a user home directory is known.
    pub fn neurallink_home() -> Result<PathBuf> {
        resolve_home(
            std::env::var_os("NEURALLINK_HOME").map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    fn resolve_home(
        override_dir: Option<PathBuf>,
        user_home: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(home) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            return Ok(home);
        }

        match user_home.filter(|dir| dir.is_absolute()) {
            Some(home) => Ok(home.join(".config").join("neurallink")),
            None => bail!("Could not determine home directory; set NEURALLINK_HOME"),
        }
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(neurallink_home()?.join("config.toml"))
    }

    /// Returns the directory that holds log files.
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(neurallink_home()?.join("logs"))
    }

}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the left information panel on wide terminals.
    pub show_side_panel: bool,
    /// Terminal rows covered by a full pull of the string.
    pub pull_travel_rows: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_side_panel: true,
            pull_travel_rows: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Boot sequence duration in milliseconds.
    pub boot_delay_ms: u64,

    /// Simulated submission latency in milliseconds.
    pub submit_delay_ms: u64,

    /// Maximum pull-string travel (gesture units).
    pub gesture_max_travel: f64,

    /// Release distance that activates a mode switch (gesture units).
    pub gesture_threshold: f64,

    pub ui: UiConfig,
}

impl Config {
    pub const DEFAULT_BOOT_DELAY_MS: u64 = 2000;
    pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
    pub const DEFAULT_GESTURE_MAX_TRAVEL: f64 = 150.0;
    pub const DEFAULT_GESTURE_THRESHOLD: f64 = 100.0;

    /// Loads configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path()?)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            Config::default()
        };
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if !self.gesture_max_travel.is_finite() || self.gesture_max_travel <= 0.0 {
            anyhow::bail!(
                "gesture_max_travel must be a positive number (got {})",
                self.gesture_max_travel
            );
        }
        if !self.gesture_threshold.is_finite() || self.gesture_threshold <= 0.0 {
            anyhow::bail!(
                "gesture_threshold must be a positive number (got {})",
                self.gesture_threshold
            );
        }
        if self.gesture_threshold >= self.gesture_max_travel {
            anyhow::bail!(
                "gesture_threshold ({}) must be smaller than gesture_max_travel ({})",
                self.gesture_threshold,
                self.gesture_max_travel
            );
        }
        if self.ui.pull_travel_rows == 0 {
            anyhow::bail!("ui.pull_travel_rows must be at least 1");
        }
        Ok(())
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn gesture_bounds(&self) -> GestureBounds {
        GestureBounds::new(self.gesture_max_travel, self.gesture_threshold)
    }

    /// Gesture units represented by one terminal row of pull.
    pub fn units_per_row(&self) -> f64 {
        self.gesture_max_travel / f64::from(self.ui.pull_travel_rows.max(1))
    }

    /// Initializes a new config file with default values.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Renders `self` into the commented template.
    pub fn render(&self) -> Result<String> {
        use toml_edit::DocumentMut;

        let rendered = toml::to_string(self).context("Failed to serialize config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let values: DocumentMut = rendered
            .parse()
            .context("Failed to parse serialized config")?;

        merge_items(doc.as_table_mut(), values.as_table());

        Ok(doc.to_string())
    }

    /// Generates a fresh config TOML from Rust defaults, keeping template comments.
    pub fn generate() -> Result<String> {
        Config::default().render()
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boot_delay_ms: Self::DEFAULT_BOOT_DELAY_MS,
            submit_delay_ms: Self::DEFAULT_SUBMIT_DELAY_MS,
            gesture_max_travel: Self::DEFAULT_GESTURE_MAX_TRAVEL,
            gesture_threshold: Self::DEFAULT_GESTURE_THRESHOLD,
            ui: UiConfig::default(),
        }
    }
}
