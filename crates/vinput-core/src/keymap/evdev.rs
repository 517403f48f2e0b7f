//! Linux evdev keycodes (`KEY_*` from `linux/input-event-codes.h`).
//!
//! Only the keys reachable from the virtual-key table are listed.  Each
//! constant is also registered under its C name so that text such as
//! `"KEY_A"` can be resolved back to a code, the same way
//! `libevdev_event_code_from_name(EV_KEY, ..)` does.
//!
//! Reference: https://github.com/torvalds/linux/blob/master/include/uapi/linux/input-event-codes.h

macro_rules! evdev_keys {
    ($($name:ident = $code:expr,)*) => {
        $(
            #[doc = concat!("`", stringify!($name), "`")]
            pub const $name: u32 = $code;
        )*

        /// Every listed keycode paired with its C identifier.
        pub const NAMES: &[(&str, u32)] = &[$((stringify!($name), $name),)*];
    };
}

evdev_keys! {
    KEY_ESC = 1,
    KEY_1 = 2,
    KEY_2 = 3,
    KEY_3 = 4,
    KEY_4 = 5,
    KEY_5 = 6,
    KEY_6 = 7,
    KEY_7 = 8,
    KEY_8 = 9,
    KEY_9 = 10,
    KEY_0 = 11,
    KEY_MINUS = 12,
    KEY_EQUAL = 13,
    KEY_BACKSPACE = 14,
    KEY_TAB = 15,
    KEY_Q = 16,
    KEY_W = 17,
    KEY_E = 18,
    KEY_R = 19,
    KEY_T = 20,
    KEY_Y = 21,
    KEY_U = 22,
    KEY_I = 23,
    KEY_O = 24,
    KEY_P = 25,
    KEY_LEFTBRACE = 26,
    KEY_RIGHTBRACE = 27,
    KEY_ENTER = 28,
    KEY_LEFTCTRL = 29,
    KEY_A = 30,
    KEY_S = 31,
    KEY_D = 32,
    KEY_F = 33,
    KEY_G = 34,
    KEY_H = 35,
    KEY_J = 36,
    KEY_K = 37,
    KEY_L = 38,
    KEY_SEMICOLON = 39,
    KEY_APOSTROPHE = 40,
    KEY_GRAVE = 41,
    KEY_LEFTSHIFT = 42,
    KEY_BACKSLASH = 43,
    KEY_Z = 44,
    KEY_X = 45,
    KEY_C = 46,
    KEY_V = 47,
    KEY_B = 48,
    KEY_N = 49,
    KEY_M = 50,
    KEY_COMMA = 51,
    KEY_DOT = 52,
    KEY_SLASH = 53,
    KEY_RIGHTSHIFT = 54,
    KEY_KPASTERISK = 55,
    KEY_LEFTALT = 56,
    KEY_SPACE = 57,
    KEY_CAPSLOCK = 58,
    KEY_F1 = 59,
    KEY_F2 = 60,
    KEY_F3 = 61,
    KEY_F4 = 62,
    KEY_F5 = 63,
    KEY_F6 = 64,
    KEY_F7 = 65,
    KEY_F8 = 66,
    KEY_F9 = 67,
    KEY_F10 = 68,
    KEY_NUMLOCK = 69,
    KEY_SCROLLLOCK = 70,
    KEY_KP7 = 71,
    KEY_KP8 = 72,
    KEY_KP9 = 73,
    KEY_KPMINUS = 74,
    KEY_KP4 = 75,
    KEY_KP5 = 76,
    KEY_KP6 = 77,
    KEY_KPPLUS = 78,
    KEY_KP1 = 79,
    KEY_KP2 = 80,
    KEY_KP3 = 81,
    KEY_KP0 = 82,
    KEY_KPDOT = 83,
    KEY_102ND = 86,
    KEY_F11 = 87,
    KEY_F12 = 88,
    KEY_KATAKANA = 90,
    KEY_KATAKANAHIRAGANA = 93,
    KEY_RIGHTCTRL = 97,
    KEY_KPSLASH = 98,
    KEY_SYSRQ = 99,
    KEY_RIGHTALT = 100,
    KEY_HOME = 102,
    KEY_UP = 103,
    KEY_PAGEUP = 104,
    KEY_LEFT = 105,
    KEY_RIGHT = 106,
    KEY_END = 107,
    KEY_DOWN = 108,
    KEY_PAGEDOWN = 109,
    KEY_INSERT = 110,
    KEY_DELETE = 111,
    KEY_PAUSE = 119,
    KEY_KPCOMMA = 121,
    KEY_HANGEUL = 122,
    KEY_HANJA = 123,
    KEY_LEFTMETA = 125,
    KEY_RIGHTMETA = 126,
    KEY_HELP = 138,
    KEY_SLEEP = 142,
    KEY_F13 = 183,
    KEY_F14 = 184,
    KEY_F15 = 185,
    KEY_F16 = 186,
    KEY_F17 = 187,
    KEY_F18 = 188,
    KEY_F19 = 189,
    KEY_F20 = 190,
    KEY_F21 = 191,
    KEY_F22 = 192,
    KEY_F23 = 193,
    KEY_F24 = 194,
    KEY_PRINT = 210,
    KEY_SELECT = 0x161,
    KEY_CLEAR = 0x163,
}

/// Resolves a C keycode name such as `"KEY_A"` to its numeric evdev code.
///
/// Returns `None` for names outside the listed set.
pub fn code_from_name(name: &str) -> Option<u32> {
    NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, code)| code)
}

/// Returns the C name of an evdev keycode, if it is one of the listed keys.
pub fn name_of(code: u32) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|&&(_, candidate)| candidate == code)
        .map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_name_resolves_letters_and_digits() {
        assert_eq!(code_from_name("KEY_A"), Some(KEY_A));
        assert_eq!(code_from_name("KEY_F"), Some(KEY_F));
        assert_eq!(code_from_name("KEY_0"), Some(KEY_0));
        assert_eq!(code_from_name("KEY_9"), Some(KEY_9));
    }

    #[test]
    fn test_code_from_name_is_case_sensitive() {
        assert_eq!(code_from_name("key_a"), None);
        assert_eq!(code_from_name("KEY_a"), None);
    }

    #[test]
    fn test_code_from_name_unknown_returns_none() {
        assert_eq!(code_from_name("KEY_G0"), None);
        assert_eq!(code_from_name(""), None);
        assert_eq!(code_from_name("BTN_LEFT"), None);
    }

    #[test]
    fn test_name_of_is_inverse_of_code_from_name() {
        for &(name, code) in NAMES {
            assert_eq!(code_from_name(name), Some(code));
            assert_eq!(name_of(code), Some(name), "code {code} has a unique name");
        }
    }

    #[test]
    fn test_well_known_codes_match_kernel_header() {
        assert_eq!(KEY_ESC, 1);
        assert_eq!(KEY_LEFTCTRL, 29);
        assert_eq!(KEY_LEFTSHIFT, 42);
        assert_eq!(KEY_U, 22);
        assert_eq!(KEY_CLEAR, 355);
    }
}
