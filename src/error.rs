//! Error type shared by the formatter, the key-code table, and config loading.

use std::fmt;

/// Which input an out-of-range error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MouseButton,
    Joystick,
    JoystickButton,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Control::MouseButton => "mouse button",
            Control::Joystick => "joystick",
            Control::JoystickButton => "joystick button",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key-code table has no code for this input.
    ///
    /// `max` is the highest ordinal the table accepts for `control`.
    #[error("key code for {control} is only supported up to {control} {max} (got {ordinal})")]
    UnsupportedRange {
        control: Control,
        ordinal: u8,
        max: u8,
    },

    /// An integer did not match any member of a device enum.
    #[error("{ordinal} is not a valid {kind} ordinal")]
    UnknownOrdinal { kind: &'static str, ordinal: u8 },

    #[error("invalid key code table: {0}")]
    InvalidTable(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
