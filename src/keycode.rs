//! Engine key codes for mouse and joystick buttons.
//!
//! The engine owns its key-code enumeration; this crate only needs its layout,
//! described by a [`KeyCodeTable`]:
//!
//! - mouse buttons are contiguous from `mouse_base`;
//! - joystick buttons are contiguous from `joystick_base`, one block of
//!   `buttons_per_joystick` codes per joystick. Block `0` is the "any joystick"
//!   block used by [`JoystickNumber::AllJoysticks`], block `n` is joystick `n`.
//!
//! ```text
//! 323 ..= 329   Mouse0 .. Mouse6
//! 330 ..= 349   JoystickButton0 .. JoystickButton19      (any joystick)
//! 350 ..= 369   Joystick1Button0 .. Joystick1Button19
//! ...
//! 490 ..= 509   Joystick8Button0 .. Joystick8Button19
//! ```
//!
//! # Example
//! ```
//! use keyformat::{JoystickButtonNumber, JoystickNumber, KeyCodeTable, ToEngineKeyCode};
//!
//! let table = KeyCodeTable::default();
//! let code = (JoystickNumber::Joystick1, JoystickButtonNumber::Button0)
//!     .to_engine_key_code(&table)
//!     .unwrap();
//! assert_eq!(code.value(), 350);
//! ```

use crate::device::{JoystickButtonNumber, JoystickNumber, MouseButtonNumber};
use crate::error::{Control, Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named values from Unity's `KeyCode` enum.
pub mod unity {
    pub const MOUSE0: i32 = 323;
    pub const MOUSE6: i32 = 329;
    pub const JOYSTICK_BUTTON0: i32 = 330;
    pub const JOYSTICK1_BUTTON0: i32 = 350;
    pub const JOYSTICK2_BUTTON0: i32 = 370;
    pub const JOYSTICK8_BUTTON19: i32 = 509;

    /// Stride between consecutive joysticks.
    pub const BUTTONS_PER_JOYSTICK: i32 = JOYSTICK2_BUTTON0 - JOYSTICK1_BUTTON0;
    pub const MOUSE_BUTTONS: i32 = MOUSE6 - MOUSE0 + 1;
    pub const JOYSTICKS: i32 =
        (JOYSTICK8_BUTTON19 + 1 - JOYSTICK1_BUTTON0) / BUTTONS_PER_JOYSTICK;
}

/// A value of the engine's key-code enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineKeyCode(pub i32);

impl EngineKeyCode {
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<EngineKeyCode> for i32 {
    #[inline]
    fn from(code: EngineKeyCode) -> i32 {
        code.0
    }
}

impl fmt::Display for EngineKeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Layout of an engine's key-code table.
///
/// `Default` is Unity's layout. Other engines are supported by loading a
/// different table (see [`Config`](crate::config::Config)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyCodeTable {
    /// Code of mouse button `0`.
    pub mouse_base: i32,
    /// Number of mouse buttons that have a code.
    pub mouse_buttons: u8,
    /// Code of button `0` in the "any joystick" block.
    pub joystick_base: i32,
    /// Codes per joystick block; also the number of buttons per joystick.
    pub buttons_per_joystick: u8,
    /// Highest joystick slot that has a block.
    pub joysticks: u8,
}

impl Default for KeyCodeTable {
    fn default() -> Self {
        Self::unity()
    }
}

impl KeyCodeTable {
    pub const fn unity() -> Self {
        Self {
            mouse_base: unity::MOUSE0,
            mouse_buttons: unity::MOUSE_BUTTONS as u8,
            joystick_base: unity::JOYSTICK_BUTTON0,
            buttons_per_joystick: unity::BUTTONS_PER_JOYSTICK as u8,
            joysticks: unity::JOYSTICKS as u8,
        }
    }

    /// Checks that the table describes two non-empty, non-overlapping ranges
    /// that fit in `i32`.
    pub fn validate(&self) -> Result<()> {
        if self.mouse_buttons == 0 {
            return Err(Error::InvalidTable("mouse_buttons must be non-zero".into()));
        }
        if self.buttons_per_joystick == 0 {
            return Err(Error::InvalidTable(
                "buttons_per_joystick must be non-zero".into(),
            ));
        }
        if self.joysticks == 0 {
            return Err(Error::InvalidTable("joysticks must be non-zero".into()));
        }

        let mouse_end = self
            .mouse_base
            .checked_add(i32::from(self.mouse_buttons) - 1)
            .ok_or_else(|| Error::InvalidTable("mouse range overflows i32".into()))?;
        let blocks = i32::from(self.joysticks) + 1;
        let joystick_end = blocks
            .checked_mul(i32::from(self.buttons_per_joystick))
            .and_then(|len| self.joystick_base.checked_add(len - 1))
            .ok_or_else(|| Error::InvalidTable("joystick range overflows i32".into()))?;

        if self.mouse_base <= joystick_end && self.joystick_base <= mouse_end {
            return Err(Error::InvalidTable(format!(
                "mouse codes {}..={} overlap joystick codes {}..={}",
                self.mouse_base, mouse_end, self.joystick_base, joystick_end
            )));
        }
        Ok(())
    }

    /// `mouse_base + ordinal`.
    pub fn mouse_key_code(&self, button: MouseButtonNumber) -> Result<EngineKeyCode> {
        let ordinal = button.ordinal();
        if ordinal >= self.mouse_buttons {
            debug!("no key code for {button:?} (table has {} mouse buttons)", self.mouse_buttons);
            return Err(Error::UnsupportedRange {
                control: Control::MouseButton,
                ordinal,
                max: self.mouse_buttons.saturating_sub(1),
            });
        }
        self.mouse_base
            .checked_add(i32::from(ordinal))
            .map(EngineKeyCode)
            .ok_or_else(|| Error::InvalidTable("mouse range overflows i32".into()))
    }

    /// `joystick_base + joystick * buttons_per_joystick + button`.
    pub fn joystick_key_code(
        &self,
        joystick: JoystickNumber,
        button: JoystickButtonNumber,
    ) -> Result<EngineKeyCode> {
        if joystick.ordinal() > self.joysticks {
            debug!("no key code for {joystick:?} (table has {} joysticks)", self.joysticks);
            return Err(Error::UnsupportedRange {
                control: Control::Joystick,
                ordinal: joystick.ordinal(),
                max: self.joysticks,
            });
        }
        if button.ordinal() >= self.buttons_per_joystick {
            debug!(
                "no key code for {button:?} (table has {} buttons per joystick)",
                self.buttons_per_joystick
            );
            return Err(Error::UnsupportedRange {
                control: Control::JoystickButton,
                ordinal: button.ordinal(),
                max: self.buttons_per_joystick.saturating_sub(1),
            });
        }

        let block = i32::from(joystick.ordinal()) * i32::from(self.buttons_per_joystick);
        self.joystick_base
            .checked_add(block + i32::from(button.ordinal()))
            .map(EngineKeyCode)
            .ok_or_else(|| Error::InvalidTable("joystick range overflows i32".into()))
    }
}

/// Conversion of an input identifier into a code of a [`KeyCodeTable`].
pub trait ToEngineKeyCode {
    fn to_engine_key_code(&self, table: &KeyCodeTable) -> Result<EngineKeyCode>;
}

impl ToEngineKeyCode for MouseButtonNumber {
    #[inline]
    fn to_engine_key_code(&self, table: &KeyCodeTable) -> Result<EngineKeyCode> {
        table.mouse_key_code(*self)
    }
}

impl ToEngineKeyCode for (JoystickNumber, JoystickButtonNumber) {
    #[inline]
    fn to_engine_key_code(&self, table: &KeyCodeTable) -> Result<EngineKeyCode> {
        table.joystick_key_code(self.0, self.1)
    }
}
