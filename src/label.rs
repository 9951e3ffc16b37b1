//! Human-readable labels for joysticks and buttons.
//!
//! Labels follow the engine's input-manager naming: a prefix, a space, and the
//! ordinal. `AllJoysticks` has no number, so its label is the bare prefix.
//!
//! | input                              | label                  |
//! |------------------------------------|------------------------|
//! | `AllJoysticks`                     | `joystick`             |
//! | `Joystick3`                        | `joystick 3`           |
//! | `Joystick3`, `Button5`             | `joystick 3 button 5`  |
//! | `AllJoysticks`, `Button5`          | `joystick button 5`    |
//! | `Middle`                           | `mouse 2`              |
//!
//! The free functions take explicit prefixes. [`Labels`] bundles a prefix set
//! (deserializable from config) and the `Display` impls use the defaults.

use crate::device::{JoystickButtonNumber, JoystickNumber, MouseButtonNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_JOYSTICK_PREFIX: &str = "joystick";
pub const DEFAULT_BUTTON_PREFIX: &str = "button";
pub const DEFAULT_MOUSE_PREFIX: &str = "mouse";

/// `prefix` for the sentinel, `"{prefix} {n}"` otherwise.
pub fn joystick_name(joystick: JoystickNumber, prefix: &str) -> String {
    if joystick.is_all() {
        prefix.to_string()
    } else {
        format!("{prefix} {}", joystick.ordinal())
    }
}

pub fn joystick_button_label(button: JoystickButtonNumber, prefix: &str) -> String {
    format!("{prefix} {}", button.ordinal())
}

/// Full name of a button on a joystick, e.g. `"joystick 2 button 7"`.
///
/// Returns `None` when `button` is absent; a missing button means "no label".
pub fn joystick_button_name(
    joystick: JoystickNumber,
    button: impl Into<Option<JoystickButtonNumber>>,
    joystick_prefix: &str,
    button_prefix: &str,
) -> Option<String> {
    let button: Option<JoystickButtonNumber> = button.into();
    let button = button?;
    Some(format!(
        "{} {}",
        joystick_name(joystick, joystick_prefix),
        joystick_button_label(button, button_prefix)
    ))
}

/// `"{prefix} {n}"`, or `None` when `button` is absent.
pub fn mouse_button_label(
    button: impl Into<Option<MouseButtonNumber>>,
    prefix: &str,
) -> Option<String> {
    let button: Option<MouseButtonNumber> = button.into();
    button.map(|button| format!("{prefix} {}", button.ordinal()))
}

/// Prefix set used to build labels.
///
/// `Default` yields the engine's own prefixes (`joystick`, `button`, `mouse`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub joystick: String,
    pub button: String,
    pub mouse: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            joystick: DEFAULT_JOYSTICK_PREFIX.to_string(),
            button: DEFAULT_BUTTON_PREFIX.to_string(),
            mouse: DEFAULT_MOUSE_PREFIX.to_string(),
        }
    }
}

impl Labels {
    #[inline]
    pub fn joystick_name(&self, joystick: JoystickNumber) -> String {
        joystick_name(joystick, &self.joystick)
    }

    #[inline]
    pub fn joystick_button_label(&self, button: JoystickButtonNumber) -> String {
        joystick_button_label(button, &self.button)
    }

    #[inline]
    pub fn joystick_button_name(
        &self,
        joystick: JoystickNumber,
        button: impl Into<Option<JoystickButtonNumber>>,
    ) -> Option<String> {
        joystick_button_name(joystick, button, &self.joystick, &self.button)
    }

    #[inline]
    pub fn mouse_button_label(
        &self,
        button: impl Into<Option<MouseButtonNumber>>,
    ) -> Option<String> {
        mouse_button_label(button, &self.mouse)
    }
}

impl fmt::Display for JoystickNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&joystick_name(*self, DEFAULT_JOYSTICK_PREFIX))
    }
}

impl fmt::Display for JoystickButtonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&joystick_button_label(*self, DEFAULT_BUTTON_PREFIX))
    }
}

impl fmt::Display for MouseButtonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEFAULT_MOUSE_PREFIX} {}", self.ordinal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use JoystickButtonNumber::*;
    use JoystickNumber::*;

    #[test]
    fn joystick_name_sentinel_is_bare_prefix() {
        assert_eq!(joystick_name(AllJoysticks, "joystick"), "joystick");
        assert_eq!(joystick_name(AllJoysticks, "pad"), "pad");
    }

    #[test]
    fn joystick_name_numbers_slots() {
        assert_eq!(joystick_name(Joystick1, "joystick"), "joystick 1");
        assert_eq!(joystick_name(Joystick16, "joystick"), "joystick 16");
    }

    #[test]
    fn button_label() {
        assert_eq!(joystick_button_label(Button0, "button"), "button 0");
        assert_eq!(joystick_button_label(Button31, "btn"), "btn 31");
    }

    #[test]
    fn button_name_joins_with_single_space() {
        assert_eq!(
            joystick_button_name(Joystick3, Button5, "joystick", "button").as_deref(),
            Some("joystick 3 button 5")
        );
        assert_eq!(
            joystick_button_name(AllJoysticks, Some(Button5), "joystick", "button").as_deref(),
            Some("joystick button 5")
        );
    }

    #[test]
    fn absent_button_yields_none() {
        for &joystick in JoystickNumber::ALL {
            assert_eq!(
                joystick_button_name(joystick, None, "joystick", "button"),
                None
            );
        }
    }

    #[test]
    fn mouse_label() {
        assert_eq!(
            mouse_button_label(MouseButtonNumber::Left, "mouse").as_deref(),
            Some("mouse 0")
        );
        assert_eq!(
            mouse_button_label(MouseButtonNumber::Mouse8, "m").as_deref(),
            Some("m 8")
        );
        assert_eq!(mouse_button_label(None, "mouse"), None);
    }

    #[test]
    fn labels_use_their_prefixes() {
        let labels = Labels {
            joystick: "stick".into(),
            button: "key".into(),
            mouse: "ptr".into(),
        };
        assert_eq!(labels.joystick_name(Joystick2), "stick 2");
        assert_eq!(labels.joystick_button_label(Button1), "key 1");
        assert_eq!(
            labels.joystick_button_name(Joystick2, Button1).as_deref(),
            Some("stick 2 key 1")
        );
        assert_eq!(
            labels.mouse_button_label(MouseButtonNumber::Right).as_deref(),
            Some("ptr 1")
        );
    }

    #[test]
    fn display_matches_default_labels() {
        let labels = Labels::default();
        for &joystick in JoystickNumber::ALL {
            assert_eq!(joystick.to_string(), labels.joystick_name(joystick));
        }
        for &button in JoystickButtonNumber::ALL {
            assert_eq!(button.to_string(), labels.joystick_button_label(button));
        }
        for &mouse in MouseButtonNumber::ALL {
            assert_eq!(Some(mouse.to_string()), labels.mouse_button_label(mouse));
        }
    }

    #[test]
    fn labels_partial_config_keeps_defaults() {
        let labels: Labels = toml::from_str("mouse = \"ptr\"").unwrap();
        assert_eq!(labels.joystick, DEFAULT_JOYSTICK_PREFIX);
        assert_eq!(labels.button, DEFAULT_BUTTON_PREFIX);
        assert_eq!(labels.mouse, "ptr");
    }
}
