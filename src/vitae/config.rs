use crate::error::{Result, VitaeError};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_WIDTH: usize = 80;
const MIN_LIST_WIDTH: usize = 20;

/// Configuration for vitae, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VitaeConfig {
    /// Format written by `vitae export` when `--format` is not given
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Ask before `remove` and `reset`
    #[serde(default = "default_confirm")]
    pub confirm_destructive: bool,

    /// Column budget for entry listings
    #[serde(default = "default_list_width")]
    pub list_width: usize,
}

fn default_confirm() -> bool {
    true
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for VitaeConfig {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::default(),
            confirm_destructive: default_confirm(),
            list_width: DEFAULT_LIST_WIDTH,
        }
    }
}

impl VitaeConfig {
    pub const KEYS: [&'static str; 3] = ["export_format", "confirm_destructive", "list_width"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(VitaeError::Io)?;
        let config: VitaeConfig =
            serde_json::from_str(&content).map_err(VitaeError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(VitaeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(VitaeError::Serialization)?;
        fs::write(config_path, content).map_err(VitaeError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "export_format" => Some(self.export_format.to_string()),
            "confirm_destructive" => Some(self.confirm_destructive.to_string()),
            "list_width" => Some(self.list_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "export_format" => {
                self.export_format = value.parse().map_err(VitaeError::Api)?;
            }
            "confirm_destructive" => {
                self.confirm_destructive = value.trim().parse().map_err(|_| {
                    VitaeError::Api(format!("confirm_destructive must be true or false, got '{}'", value))
                })?;
            }
            "list_width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    VitaeError::Api(format!("list_width must be a number, got '{}'", value))
                })?;
                if width < MIN_LIST_WIDTH {
                    return Err(VitaeError::Api(format!(
                        "list_width must be at least {}",
                        MIN_LIST_WIDTH
                    )));
                }
                self.list_width = width;
            }
            other => {
                return Err(VitaeError::Api(format!(
                    "Unknown config key '{}' (known keys: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
