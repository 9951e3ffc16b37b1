//! Device and button identifiers.
//!
//! Each identifier is a small `Copy` enum whose ordinal is the number the
//! engine uses for it: `Joystick3` is `3`, `Button0` is `0`, `Left` is `0`.
//!
//! # Conventions
//! - [`JoystickNumber::AllJoysticks`] is a sentinel (ordinal `0`) meaning "any
//!   joystick". It is not a physical slot and is never printed as a number.
//! - Joystick slots go up to 16 so labels can name every slot an engine lists,
//!   even where the key-code table stops earlier (see
//!   [`KeyCodeTable::joysticks`](crate::keycode::KeyCodeTable::joysticks)).
//! - Joystick buttons go up to 32, the DirectInput per-device maximum.
//!
//! # Example
//! ```
//! use keyformat::{JoystickNumber, MouseButtonNumber};
//!
//! assert_eq!(JoystickNumber::Joystick4.ordinal(), 4);
//! assert_eq!(MouseButtonNumber::try_from(2).unwrap(), MouseButtonNumber::Middle);
//! assert!(MouseButtonNumber::try_from(9).is_err());
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value,)+
        }

        impl $name {
            /// Every member, in ordinal order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Underlying integer value.
            #[inline]
            pub const fn ordinal(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = Error;

            fn try_from(ordinal: u8) -> Result<Self> {
                match ordinal {
                    $($value => Ok($name::$variant),)+
                    _ => Err(Error::UnknownOrdinal { kind: $kind, ordinal }),
                }
            }
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(value: $name) -> u8 {
                value.ordinal()
            }
        }
    };
}

ordinal_enum! {
    /// A joystick slot, or the "all joysticks" sentinel.
    pub enum JoystickNumber as "joystick" {
        /// Matches any connected joystick.
        AllJoysticks = 0,
        Joystick1 = 1,
        Joystick2 = 2,
        Joystick3 = 3,
        Joystick4 = 4,
        Joystick5 = 5,
        Joystick6 = 6,
        Joystick7 = 7,
        Joystick8 = 8,
        Joystick9 = 9,
        Joystick10 = 10,
        Joystick11 = 11,
        Joystick12 = 12,
        Joystick13 = 13,
        Joystick14 = 14,
        Joystick15 = 15,
        Joystick16 = 16,
    }
}

impl JoystickNumber {
    /// `true` for the [`AllJoysticks`](JoystickNumber::AllJoysticks) sentinel.
    #[inline]
    pub const fn is_all(self) -> bool {
        matches!(self, JoystickNumber::AllJoysticks)
    }
}

ordinal_enum! {
    /// A button index local to one joystick.
    pub enum JoystickButtonNumber as "joystick button" {
        Button0 = 0,
        Button1 = 1,
        Button2 = 2,
        Button3 = 3,
        Button4 = 4,
        Button5 = 5,
        Button6 = 6,
        Button7 = 7,
        Button8 = 8,
        Button9 = 9,
        Button10 = 10,
        Button11 = 11,
        Button12 = 12,
        Button13 = 13,
        Button14 = 14,
        Button15 = 15,
        Button16 = 16,
        Button17 = 17,
        Button18 = 18,
        Button19 = 19,
        Button20 = 20,
        Button21 = 21,
        Button22 = 22,
        Button23 = 23,
        Button24 = 24,
        Button25 = 25,
        Button26 = 26,
        Button27 = 27,
        Button28 = 28,
        Button29 = 29,
        Button30 = 30,
        Button31 = 31,
    }
}

ordinal_enum! {
    /// A mouse button: the three standard buttons followed by six extras.
    pub enum MouseButtonNumber as "mouse button" {
        Left = 0,
        Right = 1,
        Middle = 2,
        Mouse3 = 3,
        Mouse4 = 4,
        Mouse5 = 5,
        Mouse6 = 6,
        Mouse7 = 7,
        Mouse8 = 8,
    }
}
