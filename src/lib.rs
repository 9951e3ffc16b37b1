//! keyformat — labels and engine key codes for joystick and mouse buttons.
//!
//! Turns device identifiers ([`JoystickNumber`], [`JoystickButtonNumber`],
//! [`MouseButtonNumber`]) into input-manager labels such as
//! `"joystick 2 button 5"` and into codes of an engine's key-code table.
//! Everything is a pure function; the only input besides the identifiers is a
//! [`KeyCodeTable`] describing the engine's layout.
//!
//! ```
//! use keyformat::{joystick_button_name, JoystickButtonNumber, JoystickNumber};
//!
//! let name = joystick_button_name(
//!     JoystickNumber::Joystick2,
//!     JoystickButtonNumber::Button5,
//!     "joystick",
//!     "button",
//! );
//! assert_eq!(name.as_deref(), Some("joystick 2 button 5"));
//! ```

pub mod config;
pub mod device;
pub mod error;
pub mod keycode;
pub mod label;

pub use config::Config;
pub use device::*;
pub use error::{Control, Error, Result};
pub use keycode::{EngineKeyCode, KeyCodeTable, ToEngineKeyCode};
pub use label::*;
