//! Configuration types for the campus guide.
//!
//! [`Config::load`] reads `~/.config/campus-guide/config.toml`, creating it
//! with hardcoded defaults if it does not yet exist. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use crate::localize::Language;
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[general]
language = "en"

[housing]
# Path to a housing dataset (JSON). Empty uses the bundled dataset.
dataset = ""

[compare]
# Most residences the selection view lets you pick (0 = no limit).
max_selected = 4

[output]
show_descriptions = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/campus-guide/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub housing: HousingConfig,
    #[serde(default)]
    pub compare: CompareConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[general]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub language: Language,
}

/// `[housing]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HousingConfig {
    #[serde(default)]
    pub dataset: String,
}

impl HousingConfig {
    /// The configured dataset path, if one is set.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        let trimmed = self.dataset.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// `[compare]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareConfig {
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
}

fn default_max_selected() -> usize { 4 }

impl Default for CompareConfig {
    fn default() -> Self {
        Self { max_selected: default_max_selected() }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_show_descriptions")]
    pub show_descriptions: bool,
}

fn default_show_descriptions() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { show_descriptions: default_show_descriptions() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/campus-guide/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load a specific file layered over the defaults. A missing file yields
    /// the defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("campus-guide")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
