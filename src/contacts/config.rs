use crate::error::{ContactError, Result};
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "contacts.json";

pub const DATA_FILE_KEY: &str = "data-file";

/// Configuration for contacts, stored in `contacts.json` next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Backing file, relative to the config directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactError::Serialization)?;
        fs::write(config_path, content).map_err(ContactError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            DATA_FILE_KEY => Some(self.data_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            DATA_FILE_KEY => {
                let value = value.trim();
                if value.is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![(DATA_FILE_KEY, self.data_file.clone())]
    }

    /// Resolve the backing file against the config directory.
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        config_dir.as_ref().join(&self.data_file)
    }
}
