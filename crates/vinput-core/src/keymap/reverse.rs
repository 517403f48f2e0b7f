//! evdev keycode → protocol virtual-key code.
//!
//! The Unicode typing path works in evdev names (`"KEY_7"`, `"KEY_C"`) but the
//! virtual keyboard device only accepts protocol virtual keys, so each hex
//! digit has to be translated back.  This table is not a full inverse of
//! [`KEYCODES`](super::KEYCODES): it is built from a curated list of pairs
//! covering digits, letters, and the common editing, navigation and modifier
//! keys.
//!
//! # Collisions
//!
//! Several virtual keys share one evdev code (`VKEY_SHIFT` and `VKEY_LSHIFT`
//! both produce `KEY_LEFTSHIFT`).  The **first** pair in [`PAIRS`] wins, so
//! `KEY_LEFTSHIFT` resolves to `VKEY_SHIFT` (0x10).

use super::evdev::{self, *};

/// Slots in the reverse table; every code listed in [`PAIRS`] is below this.
const REVERSE_LEN: usize = 256;

/// Curated `(evdev keycode, virtual key)` pairs, in priority order.
pub const PAIRS: &[(u32, u16)] = &[
    (KEY_BACKSPACE, 0x08),
    (KEY_TAB, 0x09),
    (KEY_ENTER, 0x0D),
    (KEY_LEFTSHIFT, 0x10),
    (KEY_LEFTCTRL, 0x11),
    (KEY_CAPSLOCK, 0x14),
    (KEY_ESC, 0x1B),
    (KEY_SPACE, 0x20),
    (KEY_PAGEUP, 0x21),
    (KEY_PAGEDOWN, 0x22),
    (KEY_END, 0x23),
    (KEY_HOME, 0x24),
    (KEY_LEFT, 0x25),
    (KEY_UP, 0x26),
    (KEY_RIGHT, 0x27),
    (KEY_DOWN, 0x28),
    (KEY_SYSRQ, 0x2C),
    (KEY_INSERT, 0x2D),
    (KEY_DELETE, 0x2E),
    (KEY_0, 0x30),
    (KEY_1, 0x31),
    (KEY_2, 0x32),
    (KEY_3, 0x33),
    (KEY_4, 0x34),
    (KEY_5, 0x35),
    (KEY_6, 0x36),
    (KEY_7, 0x37),
    (KEY_8, 0x38),
    (KEY_9, 0x39),
    (KEY_A, 0x41),
    (KEY_B, 0x42),
    (KEY_C, 0x43),
    (KEY_D, 0x44),
    (KEY_E, 0x45),
    (KEY_F, 0x46),
    (KEY_G, 0x47),
    (KEY_H, 0x48),
    (KEY_I, 0x49),
    (KEY_J, 0x4A),
    (KEY_K, 0x4B),
    (KEY_L, 0x4C),
    (KEY_M, 0x4D),
    (KEY_N, 0x4E),
    (KEY_O, 0x4F),
    (KEY_P, 0x50),
    (KEY_Q, 0x51),
    (KEY_R, 0x52),
    (KEY_S, 0x53),
    (KEY_T, 0x54),
    (KEY_U, 0x55),
    (KEY_V, 0x56),
    (KEY_W, 0x57),
    (KEY_X, 0x58),
    (KEY_Y, 0x59),
    (KEY_Z, 0x5A),
    (KEY_LEFTMETA, 0x5B),
    (KEY_RIGHTMETA, 0x5C),
    (KEY_KP0, 0x60),
    (KEY_KP1, 0x61),
    (KEY_KP2, 0x62),
    (KEY_KP3, 0x63),
    (KEY_KP4, 0x64),
    (KEY_KP5, 0x65),
    (KEY_KP6, 0x66),
    (KEY_KP7, 0x67),
    (KEY_KP8, 0x68),
    (KEY_KP9, 0x69),
    (KEY_KPASTERISK, 0x6A),
    (KEY_KPPLUS, 0x6B),
    (KEY_KPMINUS, 0x6D),
    (KEY_KPDOT, 0x6E),
    (KEY_KPSLASH, 0x6F),
    (KEY_F1, 0x70),
    (KEY_F2, 0x71),
    (KEY_F3, 0x72),
    (KEY_F4, 0x73),
    (KEY_F5, 0x74),
    (KEY_F6, 0x75),
    (KEY_F7, 0x76),
    (KEY_F8, 0x77),
    (KEY_F9, 0x78),
    (KEY_F10, 0x79),
    (KEY_F11, 0x7A),
    (KEY_F12, 0x7B),
    (KEY_NUMLOCK, 0x90),
    (KEY_SCROLLLOCK, 0x91),
    (KEY_LEFTSHIFT, 0xA0),
    (KEY_RIGHTSHIFT, 0xA1),
    (KEY_LEFTCTRL, 0xA2),
    (KEY_RIGHTCTRL, 0xA3),
    (KEY_LEFTALT, 0xA4),
    (KEY_RIGHTALT, 0xA5),
    (KEY_SEMICOLON, 0xBA),
    (KEY_EQUAL, 0xBB),
    (KEY_COMMA, 0xBC),
    (KEY_MINUS, 0xBD),
    (KEY_DOT, 0xBE),
    (KEY_SLASH, 0xBF),
    (KEY_GRAVE, 0xC0),
    (KEY_LEFTBRACE, 0xDB),
    (KEY_BACKSLASH, 0xDC),
    (KEY_RIGHTBRACE, 0xDD),
    (KEY_APOSTROPHE, 0xDE),
    (KEY_102ND, 0xE2),
];

/// Compile-time reverse table indexed by evdev keycode.
///
/// A stored value of `0` means "not in the curated set"; no virtual key in
/// [`PAIRS`] is zero.
#[derive(Debug, Clone)]
pub struct ReverseKeyTable {
    virtual_keys: [u16; REVERSE_LEN],
}

impl ReverseKeyTable {
    /// Builds a table from `(evdev keycode, virtual key)` pairs.
    ///
    /// Earlier pairs take priority over later ones for the same keycode.
    /// Panics (at compile time when used in a `static`) if a keycode does not
    /// fit the table.
    pub const fn from_pairs(pairs: &[(u32, u16)]) -> Self {
        let mut t = [0u16; REVERSE_LEN];
        let mut i = 0;
        while i < pairs.len() {
            let (code, vk) = pairs[i];
            assert!((code as usize) < REVERSE_LEN, "evdev keycode outside the reverse table");
            // First occurrence wins.
            if t[code as usize] == 0 {
                t[code as usize] = vk;
            }
            i += 1;
        }
        Self { virtual_keys: t }
    }

    /// Returns the virtual key for an evdev keycode.
    pub fn get(&self, local_keycode: u32) -> Option<u16> {
        usize::try_from(local_keycode)
            .ok()
            .and_then(|index| self.virtual_keys.get(index))
            .copied()
            .filter(|&vk| vk != 0)
    }

    /// Resolves an evdev key name (`"KEY_A"`) to its virtual key.
    pub fn lookup_name(&self, name: &str) -> Option<u16> {
        evdev::code_from_name(name).and_then(|code| self.get(code))
    }
}

/// The process-wide reverse table.
pub static REVERSE_KEYCODES: ReverseKeyTable = ReverseKeyTable::from_pairs(PAIRS);

/// Shorthand for [`REVERSE_KEYCODES.lookup_name`](ReverseKeyTable::lookup_name).
pub fn reverse_lookup(name: &str) -> Option<u16> {
    REVERSE_KEYCODES.lookup_name(name)
}
