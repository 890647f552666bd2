use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryRegistry, CategorySettings, MAX_CATEGORIES};
use crate::error::{AlarmError, Result};
use crate::import::ImportSource;
use crate::worker::DEFAULT_COMMAND_TIMEOUT;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ebalarm configuration file
# Location: ~/.ebalarm/config.toml

[general]
# Symbol export format used last (codesys, omron-sysmac)
# import_source = "omron-sysmac"

# PLC name written as the device of every alarm
# plc_name = "PZ_PLC"

[worker]
# Bounded wait of the background worker on its command queue
command_timeout_ms = 1000

# Cadence at which the foreground drains worker results
result_poll_ms = 100

# Categories are matched in slot order, the first matching slot wins.
# An empty filter never matches.
#
# [categories.0]
# name = "Immediate fault"
# filter = 'stS\d+DefImdt\w*\.'
# bg_color = [165, 42, 42]
# fg_color = [0, 0, 0]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub worker: WorkerConfig,

    /// Category settings keyed by slot number
    #[serde(default)]
    pub categories: BTreeMap<String, CategorySettings>,
}

/// Values remembered between runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_source: Option<ImportSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plc_name: Option<String>,
}

/// Worker timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,

    #[serde(default = "default_result_poll_ms")]
    pub result_poll_ms: u64,
}

fn default_command_timeout_ms() -> u64 {
    DEFAULT_COMMAND_TIMEOUT.as_millis() as u64
}

fn default_result_poll_ms() -> u64 {
    100
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: default_command_timeout_ms(),
            result_poll_ms: default_result_poll_ms(),
        }
    }
}

impl WorkerConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    pub fn result_poll(&self) -> Duration {
        Duration::from_millis(self.result_poll_ms)
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| AlarmError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        config.check_category_keys()?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| AlarmError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "general.import_source" => Some(
                self.general
                    .import_source
                    .map(|source| source.name().to_string())
                    .unwrap_or_default(),
            ),
            "general.plc_name" => Some(self.general.plc_name.clone().unwrap_or_default()),
            "worker.command_timeout_ms" => Some(self.worker.command_timeout_ms.to_string()),
            "worker.result_poll_ms" => Some(self.worker.result_poll_ms.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "general.import_source" => {
                self.general.import_source = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            "general.plc_name" => {
                self.general.plc_name = (!value.is_empty()).then(|| value.to_string());
            }
            "worker.command_timeout_ms" => {
                self.worker.command_timeout_ms = parse_millis(key, value)?;
            }
            "worker.result_poll_ms" => {
                self.worker.result_poll_ms = parse_millis(key, value)?;
            }
            _ => {
                return Err(AlarmError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "general.import_source",
            "general.plc_name",
            "worker.command_timeout_ms",
            "worker.result_poll_ms",
        ]
        .into_iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    /// Settings of one slot, defaults when the slot was never written
    pub fn category(&self, slot: usize) -> Result<CategorySettings> {
        check_slot(slot)?;
        Ok(self
            .categories
            .get(&slot.to_string())
            .cloned()
            .unwrap_or_default())
    }

    /// Store a slot after checking that its filter compiles
    pub fn set_category(&mut self, slot: usize, settings: CategorySettings) -> Result<()> {
        check_slot(slot)?;
        Category::from_settings(&settings)?;
        self.categories.insert(slot.to_string(), settings);
        Ok(())
    }

    pub fn clear_category(&mut self, slot: usize) -> Result<()> {
        check_slot(slot)?;
        self.categories.remove(&slot.to_string());
        Ok(())
    }

    /// All `MAX_CATEGORIES` slots in order
    pub fn category_settings(&self) -> Vec<CategorySettings> {
        (0..MAX_CATEGORIES)
            .map(|slot| {
                self.categories
                    .get(&slot.to_string())
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Every `[categories.N]` key must be a canonical slot number
    fn check_category_keys(&self) -> Result<()> {
        for key in self.categories.keys() {
            let slot = key
                .parse::<usize>()
                .ok()
                .filter(|slot| slot.to_string() == *key && *slot < MAX_CATEGORIES);
            if slot.is_none() {
                return Err(AlarmError::ConfigValue {
                    key: format!("categories.{}", key),
                    message: format!("expected a slot number in 0..{}", MAX_CATEGORIES),
                });
            }
        }
        Ok(())
    }

    /// Compile every slot into a registry (slot order is priority)
    pub fn registry(&self) -> Result<CategoryRegistry> {
        CategoryRegistry::from_settings(&self.category_settings())
    }
}

fn check_slot(slot: usize) -> Result<()> {
    if slot >= MAX_CATEGORIES {
        return Err(AlarmError::InvalidSlot {
            slot,
            max: MAX_CATEGORIES,
        });
    }
    Ok(())
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(0) => Err(AlarmError::ConfigValue {
            key: key.to_string(),
            message: "must be greater than 0".to_string(),
        }),
        Ok(millis) => Ok(millis),
        Err(e) => Err(AlarmError::ConfigValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}
