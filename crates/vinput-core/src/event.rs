//! Decoded input events handed to the emitters.
//!
//! The session layer decodes the wire protocol and produces one
//! [`InputEvent`] per message.  Codes are kept in their protocol form (raw
//! virtual-key and button numbers) so that values this host does not support
//! still reach the emitters, which decide to drop them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One decoded input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputEvent {
    /// Physical key press or release, by protocol virtual-key code.
    Key {
        virtual_key: u16,
        #[serde(default)]
        release: bool,
    },
    /// Text to type, as UTF-8 bytes.  Invalid sequences are tolerated.
    Unicode {
        #[serde(with = "utf8_text")]
        text: Vec<u8>,
    },
    /// Relative pointer motion.
    MouseMove { dx: i32, dy: i32 },
    /// Absolute pointer position within `viewport`.
    MouseMoveAbsolute {
        x: f32,
        y: f32,
        #[serde(default)]
        viewport: Viewport,
    },
    /// Button press or release, by protocol button number.
    MouseButton {
        button: u8,
        #[serde(default)]
        release: bool,
    },
    /// Vertical wheel, in high-resolution units (120 per detent).
    MouseScroll { distance: i32 },
    /// Horizontal wheel, in high-resolution units (120 per detent).
    MouseHScroll { distance: i32 },
}

/// Target surface of absolute pointer coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: u32,
    pub height: u32,
}

/// Mouse buttons the emitters can inject.
///
/// Protocol numbering: 1 = left, 2 = middle, 3 = right.  The side buttons
/// (4, 5) exist on the wire but have no injection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A protocol button number with no [`MouseButton`] equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown mouse button: {0}")]
pub struct UnknownMouseButton(pub u8);

impl TryFrom<u8> for MouseButton {
    type Error = UnknownMouseButton;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Left),
            2 => Ok(Self::Middle),
            3 => Ok(Self::Right),
            other => Err(UnknownMouseButton(other)),
        }
    }
}

impl From<MouseButton> for u8 {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
        }
    }
}

/// Serde adapter that stores text bytes as a string.
mod utf8_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }
}
