//! # Configuration
//!
//! Stored as `config.json` in the Artistly config directory (see [`crate::init`]).
//! A missing file means defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | unset | JSON record file used instead of the bundled demo data |
//! | `default-view` | `grid` | Artist list layout when `--view` is not given |
//! | `submit-delay-ms` | `2000` | Simulated onboarding submission delay |
//! | `color` | `true` | Styled terminal output |

use crate::error::{ArtistlyError, Result};
use crate::model::ViewMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

pub const KEYS: [&str; 4] = ["data-file", "default-view", "submit-delay-ms", "color"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistlyConfig {
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub default_view: ViewMode,

    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_submit_delay() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

fn default_color() -> bool {
    true
}

impl Default for ArtistlyConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_view: ViewMode::default(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            color: true,
        }
    }
}

impl ArtistlyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ArtistlyError::Io)?;
        let config: ArtistlyConfig =
            serde_json::from_str(&content).map_err(ArtistlyError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ArtistlyError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(ArtistlyError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(ArtistlyError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(
                self.data_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "default-view" => Some(self.default_view.to_string()),
            "submit-delay-ms" => Some(self.submit_delay_ms.to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its command-line text. An empty `data-file` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "default-view" => self.default_view = value.parse()?,
            "submit-delay-ms" => {
                self.submit_delay_ms = value
                    .parse()
                    .map_err(|_| format!("submit-delay-ms must be a number, got: {}", value))?;
            }
            "color" => {
                self.color = value
                    .parse()
                    .map_err(|_| format!("color must be true or false, got: {}", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }
}
