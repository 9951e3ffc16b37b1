//! Formatter configuration: a key-code table plus label prefixes.
//!
//! Both sections are optional; missing keys fall back to the engine defaults.
//!
//! ```toml
//! [table]
//! mouse_base = 323
//! mouse_buttons = 7
//! joystick_base = 330
//! buttons_per_joystick = 20
//! joysticks = 8
//!
//! [labels]
//! joystick = "joystick"
//! button = "button"
//! mouse = "mouse"
//! ```
//!
//! Every loader validates the table before returning it.

use crate::error::Result;
use crate::keycode::KeyCodeTable;
use crate::label::Labels;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: KeyCodeTable,
    pub labels: Labels,
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.table.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(s)?;
        config.table.validate()?;
        Ok(config)
    }

    /// Loads a config file. `.json` files are read as JSON, anything else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        debug!("loaded key format config from {}: {:?}", path.display(), config.table);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
