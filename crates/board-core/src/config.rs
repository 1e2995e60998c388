// crates/board-core/src/config.rs
// Board configuration, optionally embedded in the host page as JSON

use log::Level;
use serde::Deserialize;

use crate::error::Result;

/// Top-level config structure. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Id of the element the app mounts into
    pub mount_id: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// Shown in a blocking alert when a submission fails validation
    pub invalid_input_message: String,
    pub form: FormRules,
}

/// Fixed limits applied by the input form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            log_level: "debug".to_string(),
            invalid_input_message: "One or more inputs are invalid, please try again".to_string(),
            form: FormRules::default(),
        }
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse `log_level`, falling back to debug for unknown names
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::Debug)
    }
}
