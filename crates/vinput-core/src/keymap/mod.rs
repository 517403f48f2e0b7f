//! Virtual-key code translation tables.
//!
//! Remote clients identify keys with protocol virtual-key codes (the Windows
//! `VK_*` numbering, 0x00–0xE2).  The host needs three different local
//! identifiers for the same key depending on which backend injects it:
//!
//! | Backend                 | Identifier          | Field            |
//! |-------------------------|---------------------|------------------|
//! | uinput virtual keyboard | evdev keycode       | `local_keycode`  |
//! | USB HID gadget / reports| HID usage (page 7)  | `hid_scancode`   |
//! | X11 / XTest             | KeySym              | `key_symbol`     |
//!
//! # How the forward table works
//!
//! [`KEYCODES`] is a compile-time constant array of [`KeyEntry`] values,
//! indexed by virtual-key code.  Position 0x41 holds the entry for `VK_A`.
//! Codes without a mapping store the all-zero entry, so every lookup is a
//! single bounds-checked array access.
//!
//! Every literal index below is evaluated by the compiler.  An index outside
//! the array is a const-evaluation error, so a bad table row cannot build.
//!
//! The reverse direction (evdev keycode → virtual key) lives in [`reverse`].

pub mod evdev;
pub mod keysym;
pub mod reverse;
pub mod vkey;

pub use reverse::{reverse_lookup, ReverseKeyTable, REVERSE_KEYCODES};

/// Sentinel for "no mapping" in any [`KeyEntry`] field.
pub const UNKNOWN: u32 = 0;

/// Number of slots in [`KEYCODES`]; valid virtual keys are `0..TABLE_LEN`.
pub const TABLE_LEN: usize = 0xE3;

/// Local identifiers for one protocol virtual key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyEntry {
    /// Linux evdev keycode (`KEY_*`).
    pub local_keycode: u32,
    /// USB HID usage, page in the upper half (`0x7_00xx`), or [`UNKNOWN`].
    pub hid_scancode: u32,
    /// X11 KeySym, or [`UNKNOWN`] when the key has no X11 symbol.
    pub key_symbol: u32,
}

impl KeyEntry {
    /// The entry stored for unassigned virtual keys.
    pub const EMPTY: KeyEntry = KeyEntry::new(UNKNOWN, UNKNOWN, UNKNOWN);

    pub const fn new(local_keycode: u32, hid_scancode: u32, key_symbol: u32) -> Self {
        Self {
            local_keycode,
            hid_scancode,
            key_symbol,
        }
    }
}

/// Fixed table from protocol virtual-key code to [`KeyEntry`].
#[derive(Debug, Clone)]
pub struct KeycodeTable {
    entries: [KeyEntry; TABLE_LEN],
}

impl KeycodeTable {
    /// Returns the entry for `virtual_key` when it can be sent through X11.
    ///
    /// Returns `None` if `virtual_key` is outside the table or its
    /// `key_symbol` is [`UNKNOWN`].  Callers drop the event in that case;
    /// remote peers routinely send keys the host cannot represent.
    pub fn lookup(&self, virtual_key: u16) -> Option<KeyEntry> {
        self.slot(virtual_key)
            .filter(|entry| entry.key_symbol != UNKNOWN)
    }

    /// Returns the entry for `virtual_key` when it has an evdev keycode.
    ///
    /// This is the lookup used by the virtual-device backend, which injects
    /// evdev codes and never consults the KeySym.
    pub fn entry(&self, virtual_key: u16) -> Option<KeyEntry> {
        self.slot(virtual_key)
            .filter(|entry| entry.local_keycode != UNKNOWN)
    }

    /// Number of slots, assigned or not.
    pub const fn len(&self) -> usize {
        TABLE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        TABLE_LEN == 0
    }

    /// Iterates over `(virtual_key, entry)` for every assigned slot.
    pub fn iter(&self) -> impl Iterator<Item = (u16, KeyEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| **entry != KeyEntry::EMPTY)
            .map(|(vk, entry)| (vk as u16, *entry))
    }

    fn slot(&self, virtual_key: u16) -> Option<KeyEntry> {
        self.entries.get(usize::from(virtual_key)).copied()
    }
}

/// The process-wide virtual-key table.
///
/// Rows are written as literal indices into a `[KeyEntry; TABLE_LEN]` during
/// constant evaluation.  An in-range row builds:
///
/// ```
/// use vinput_core::keymap::{KeyEntry, TABLE_LEN};
///
/// const ROWS: [KeyEntry; TABLE_LEN] = {
///     let mut t = [KeyEntry::EMPTY; TABLE_LEN];
///     t[TABLE_LEN - 1] = KeyEntry::new(86, 0x70064, 0x5C);
///     t
/// };
/// assert_eq!(ROWS[TABLE_LEN - 1].local_keycode, 86);
/// ```
///
/// and a row past the end does not:
///
/// ```compile_fail
/// use vinput_core::keymap::{KeyEntry, TABLE_LEN};
///
/// const ROWS: [KeyEntry; TABLE_LEN] = {
///     let mut t = [KeyEntry::EMPTY; TABLE_LEN];
///     t[TABLE_LEN] = KeyEntry::new(86, 0x70064, 0x5C);
///     t
/// };
/// assert_eq!(ROWS[0].local_keycode, 0);
/// ```
pub static KEYCODES: KeycodeTable = KeycodeTable {
    entries: init_keycodes(),
};

const fn init_keycodes() -> [KeyEntry; TABLE_LEN] {
    use self::evdev::*;
    use self::keysym::*;

    let mut t = [KeyEntry::EMPTY; TABLE_LEN];

    // ── Editing and control keys ─────────────────────────────────────────────
    t[0x08] = KeyEntry::new(KEY_BACKSPACE, 0x7002A, XK_BackSpace); // VKEY_BACK
    t[0x09] = KeyEntry::new(KEY_TAB, 0x7002B, XK_Tab); // VKEY_TAB
    t[0x0C] = KeyEntry::new(KEY_CLEAR, UNKNOWN, XK_Clear); // VKEY_CLEAR
    t[0x0D] = KeyEntry::new(KEY_ENTER, 0x70028, XK_Return); // VKEY_RETURN
    t[0x10] = KeyEntry::new(KEY_LEFTSHIFT, 0x700E1, XK_Shift_L); // VKEY_SHIFT
    t[0x11] = KeyEntry::new(KEY_LEFTCTRL, 0x700E0, XK_Control_L); // VKEY_CONTROL
    t[0x12] = KeyEntry::new(KEY_LEFTALT, UNKNOWN, XK_Alt_L); // VKEY_MENU
    t[0x13] = KeyEntry::new(KEY_PAUSE, UNKNOWN, XK_Pause); // VKEY_PAUSE
    t[0x14] = KeyEntry::new(KEY_CAPSLOCK, 0x70039, XK_Caps_Lock); // VKEY_CAPITAL

    // ── IME keys ─────────────────────────────────────────────────────────────
    t[0x15] = KeyEntry::new(KEY_KATAKANAHIRAGANA, UNKNOWN, XK_Kana_Shift); // VKEY_KANA
    t[0x16] = KeyEntry::new(KEY_HANGEUL, UNKNOWN, XK_Hangul); // VKEY_HANGUL
    t[0x17] = KeyEntry::new(KEY_HANJA, UNKNOWN, XK_Hangul_Jeonja); // VKEY_JUNJA
    t[0x19] = KeyEntry::new(KEY_KATAKANA, UNKNOWN, XK_Kanji); // VKEY_KANJI

    t[0x1B] = KeyEntry::new(KEY_ESC, 0x70029, XK_Escape); // VKEY_ESCAPE
    t[0x20] = KeyEntry::new(KEY_SPACE, 0x7002C, XK_space); // VKEY_SPACE

    // ── Navigation ───────────────────────────────────────────────────────────
    t[0x21] = KeyEntry::new(KEY_PAGEUP, 0x7004B, XK_Page_Up); // VKEY_PRIOR
    t[0x22] = KeyEntry::new(KEY_PAGEDOWN, 0x7004E, XK_Page_Down); // VKEY_NEXT
    t[0x23] = KeyEntry::new(KEY_END, 0x7004D, XK_End); // VKEY_END
    t[0x24] = KeyEntry::new(KEY_HOME, 0x7004A, XK_Home); // VKEY_HOME
    t[0x25] = KeyEntry::new(KEY_LEFT, 0x70050, XK_Left); // VKEY_LEFT
    t[0x26] = KeyEntry::new(KEY_UP, 0x70052, XK_Up); // VKEY_UP
    t[0x27] = KeyEntry::new(KEY_RIGHT, 0x7004F, XK_Right); // VKEY_RIGHT
    t[0x28] = KeyEntry::new(KEY_DOWN, 0x70051, XK_Down); // VKEY_DOWN
    t[0x29] = KeyEntry::new(KEY_SELECT, UNKNOWN, XK_Select); // VKEY_SELECT
    t[0x2A] = KeyEntry::new(KEY_PRINT, UNKNOWN, XK_Print); // VKEY_PRINT
    t[0x2C] = KeyEntry::new(KEY_SYSRQ, 0x70046, XK_Sys_Req); // VKEY_SNAPSHOT
    t[0x2D] = KeyEntry::new(KEY_INSERT, 0x70049, XK_Insert); // VKEY_INSERT
    t[0x2E] = KeyEntry::new(KEY_DELETE, 0x7004C, XK_Delete); // VKEY_DELETE
    t[0x2F] = KeyEntry::new(KEY_HELP, UNKNOWN, XK_Help); // VKEY_HELP

    // ── Digit row (VKEY_0=0x30 … VKEY_9=0x39) ────────────────────────────────
    t[0x30] = KeyEntry::new(KEY_0, 0x70027, XK_0);
    t[0x31] = KeyEntry::new(KEY_1, 0x7001E, XK_1);
    t[0x32] = KeyEntry::new(KEY_2, 0x7001F, XK_2);
    t[0x33] = KeyEntry::new(KEY_3, 0x70020, XK_3);
    t[0x34] = KeyEntry::new(KEY_4, 0x70021, XK_4);
    t[0x35] = KeyEntry::new(KEY_5, 0x70022, XK_5);
    t[0x36] = KeyEntry::new(KEY_6, 0x70023, XK_6);
    t[0x37] = KeyEntry::new(KEY_7, 0x70024, XK_7);
    t[0x38] = KeyEntry::new(KEY_8, 0x70025, XK_8);
    t[0x39] = KeyEntry::new(KEY_9, 0x70026, XK_9);

    // ── Letters (VKEY_A=0x41 … VKEY_Z=0x5A) ──────────────────────────────────
    t[0x41] = KeyEntry::new(KEY_A, 0x70004, XK_A);
    t[0x42] = KeyEntry::new(KEY_B, 0x70005, XK_B);
    t[0x43] = KeyEntry::new(KEY_C, 0x70006, XK_C);
    t[0x44] = KeyEntry::new(KEY_D, 0x70007, XK_D);
    t[0x45] = KeyEntry::new(KEY_E, 0x70008, XK_E);
    t[0x46] = KeyEntry::new(KEY_F, 0x70009, XK_F);
    t[0x47] = KeyEntry::new(KEY_G, 0x7000A, XK_G);
    t[0x48] = KeyEntry::new(KEY_H, 0x7000B, XK_H);
    t[0x49] = KeyEntry::new(KEY_I, 0x7000C, XK_I);
    t[0x4A] = KeyEntry::new(KEY_J, 0x7000D, XK_J);
    t[0x4B] = KeyEntry::new(KEY_K, 0x7000E, XK_K);
    t[0x4C] = KeyEntry::new(KEY_L, 0x7000F, XK_L);
    t[0x4D] = KeyEntry::new(KEY_M, 0x70010, XK_M);
    t[0x4E] = KeyEntry::new(KEY_N, 0x70011, XK_N);
    t[0x4F] = KeyEntry::new(KEY_O, 0x70012, XK_O);
    t[0x50] = KeyEntry::new(KEY_P, 0x70013, XK_P);
    t[0x51] = KeyEntry::new(KEY_Q, 0x70014, XK_Q);
    t[0x52] = KeyEntry::new(KEY_R, 0x70015, XK_R);
    t[0x53] = KeyEntry::new(KEY_S, 0x70016, XK_S);
    t[0x54] = KeyEntry::new(KEY_T, 0x70017, XK_T);
    t[0x55] = KeyEntry::new(KEY_U, 0x70018, XK_U);
    t[0x56] = KeyEntry::new(KEY_V, 0x70019, XK_V);
    t[0x57] = KeyEntry::new(KEY_W, 0x7001A, XK_W);
    t[0x58] = KeyEntry::new(KEY_X, 0x7001B, XK_X);
    t[0x59] = KeyEntry::new(KEY_Y, 0x7001C, XK_Y);
    t[0x5A] = KeyEntry::new(KEY_Z, 0x7001D, XK_Z);

    t[0x5B] = KeyEntry::new(KEY_LEFTMETA, 0x700E3, XK_Meta_L); // VKEY_LWIN
    t[0x5C] = KeyEntry::new(KEY_RIGHTMETA, 0x700E7, XK_Meta_R); // VKEY_RWIN
    t[0x5F] = KeyEntry::new(KEY_SLEEP, UNKNOWN, UNKNOWN); // VKEY_SLEEP

    // ── Numpad (VKEY_NUMPAD0=0x60 … VKEY_DIVIDE=0x6F) ────────────────────────
    t[0x60] = KeyEntry::new(KEY_KP0, 0x70062, XK_KP_0);
    t[0x61] = KeyEntry::new(KEY_KP1, 0x70059, XK_KP_1);
    t[0x62] = KeyEntry::new(KEY_KP2, 0x7005A, XK_KP_2);
    t[0x63] = KeyEntry::new(KEY_KP3, 0x7005B, XK_KP_3);
    t[0x64] = KeyEntry::new(KEY_KP4, 0x7005C, XK_KP_4);
    t[0x65] = KeyEntry::new(KEY_KP5, 0x7005D, XK_KP_5);
    t[0x66] = KeyEntry::new(KEY_KP6, 0x7005E, XK_KP_6);
    t[0x67] = KeyEntry::new(KEY_KP7, 0x7005F, XK_KP_7);
    t[0x68] = KeyEntry::new(KEY_KP8, 0x70060, XK_KP_8);
    t[0x69] = KeyEntry::new(KEY_KP9, 0x70061, XK_KP_9);
    t[0x6A] = KeyEntry::new(KEY_KPASTERISK, 0x70055, XK_KP_Multiply); // VKEY_MULTIPLY
    t[0x6B] = KeyEntry::new(KEY_KPPLUS, 0x70057, XK_KP_Add); // VKEY_ADD
    t[0x6C] = KeyEntry::new(KEY_KPCOMMA, UNKNOWN, XK_KP_Separator); // VKEY_SEPARATOR
    t[0x6D] = KeyEntry::new(KEY_KPMINUS, 0x70056, XK_KP_Subtract); // VKEY_SUBTRACT
    t[0x6E] = KeyEntry::new(KEY_KPDOT, 0x70063, XK_KP_Decimal); // VKEY_DECIMAL
    t[0x6F] = KeyEntry::new(KEY_KPSLASH, 0x70054, XK_KP_Divide); // VKEY_DIVIDE

    // ── Function keys (VKEY_F1=0x70 … VKEY_F24=0x87) ─────────────────────────
    t[0x70] = KeyEntry::new(KEY_F1, 0x7003A, XK_F1);
    t[0x71] = KeyEntry::new(KEY_F2, 0x7003B, XK_F2);
    t[0x72] = KeyEntry::new(KEY_F3, 0x7003C, XK_F3);
    t[0x73] = KeyEntry::new(KEY_F4, 0x7003D, XK_F4);
    t[0x74] = KeyEntry::new(KEY_F5, 0x7003E, XK_F5);
    t[0x75] = KeyEntry::new(KEY_F6, 0x7003F, XK_F6);
    t[0x76] = KeyEntry::new(KEY_F7, 0x70040, XK_F7);
    t[0x77] = KeyEntry::new(KEY_F8, 0x70041, XK_F8);
    t[0x78] = KeyEntry::new(KEY_F9, 0x70042, XK_F9);
    t[0x79] = KeyEntry::new(KEY_F10, 0x70043, XK_F10);
    t[0x7A] = KeyEntry::new(KEY_F11, 0x70044, XK_F11);
    t[0x7B] = KeyEntry::new(KEY_F12, 0x70045, XK_F12);
    t[0x7C] = KeyEntry::new(KEY_F13, 0x70068, XK_F13);
    t[0x7D] = KeyEntry::new(KEY_F14, 0x70069, XK_F14);
    t[0x7E] = KeyEntry::new(KEY_F15, 0x7006A, XK_F15);
    t[0x7F] = KeyEntry::new(KEY_F16, 0x7006B, XK_F16);
    t[0x80] = KeyEntry::new(KEY_F17, 0x7006C, XK_F17);
    t[0x81] = KeyEntry::new(KEY_F18, 0x7006D, XK_F18);
    t[0x82] = KeyEntry::new(KEY_F19, 0x7006E, XK_F19);
    t[0x83] = KeyEntry::new(KEY_F20, 0x7006F, XK_F20);
    t[0x84] = KeyEntry::new(KEY_F21, 0x70070, XK_F21);
    t[0x85] = KeyEntry::new(KEY_F22, 0x70071, XK_F22);
    t[0x86] = KeyEntry::new(KEY_F23, 0x70072, XK_F23);
    t[0x87] = KeyEntry::new(KEY_F24, 0x70073, XK_F24);

    // ── Locks ────────────────────────────────────────────────────────────────
    t[0x90] = KeyEntry::new(KEY_NUMLOCK, 0x70053, XK_Num_Lock); // VKEY_NUMLOCK
    t[0x91] = KeyEntry::new(KEY_SCROLLLOCK, 0x70047, XK_Scroll_Lock); // VKEY_SCROLL

    // ── Sided modifiers ──────────────────────────────────────────────────────
    t[0xA0] = KeyEntry::new(KEY_LEFTSHIFT, 0x700E1, XK_Shift_L); // VKEY_LSHIFT
    t[0xA1] = KeyEntry::new(KEY_RIGHTSHIFT, 0x700E5, XK_Shift_R); // VKEY_RSHIFT
    t[0xA2] = KeyEntry::new(KEY_LEFTCTRL, 0x700E0, XK_Control_L); // VKEY_LCONTROL
    t[0xA3] = KeyEntry::new(KEY_RIGHTCTRL, 0x700E4, XK_Control_R); // VKEY_RCONTROL
    t[0xA4] = KeyEntry::new(KEY_LEFTALT, 0x700E2, XK_Alt_L); // VKEY_LMENU
    t[0xA5] = KeyEntry::new(KEY_RIGHTALT, 0x700E6, XK_Alt_R); // VKEY_RMENU

    // ── OEM punctuation (US layout positions) ────────────────────────────────
    t[0xBA] = KeyEntry::new(KEY_SEMICOLON, 0x70033, XK_semicolon); // VKEY_OEM_1
    t[0xBB] = KeyEntry::new(KEY_EQUAL, 0x7002E, XK_equal); // VKEY_OEM_PLUS
    t[0xBC] = KeyEntry::new(KEY_COMMA, 0x70036, XK_comma); // VKEY_OEM_COMMA
    t[0xBD] = KeyEntry::new(KEY_MINUS, 0x7002D, XK_minus); // VKEY_OEM_MINUS
    t[0xBE] = KeyEntry::new(KEY_DOT, 0x70037, XK_period); // VKEY_OEM_PERIOD
    t[0xBF] = KeyEntry::new(KEY_SLASH, 0x70038, XK_slash); // VKEY_OEM_2
    t[0xC0] = KeyEntry::new(KEY_GRAVE, 0x70035, XK_grave); // VKEY_OEM_3
    t[0xDB] = KeyEntry::new(KEY_LEFTBRACE, 0x7002F, XK_braceleft); // VKEY_OEM_4
    t[0xDC] = KeyEntry::new(KEY_BACKSLASH, 0x70031, XK_backslash); // VKEY_OEM_5
    t[0xDD] = KeyEntry::new(KEY_RIGHTBRACE, 0x70030, XK_braceright); // VKEY_OEM_6
    t[0xDE] = KeyEntry::new(KEY_APOSTROPHE, 0x70034, XK_apostrophe); // VKEY_OEM_7
    t[0xE2] = KeyEntry::new(KEY_102ND, 0x70064, XK_backslash); // VKEY_NON_US_BACKSLASH

    t
}

// The highest literal row above must be the last slot, so the table is sized
// to the protocol's key space and no wider.
const _: () = assert!(TABLE_LEN == vkey::VKEY_NON_US_BACKSLASH as usize + 1);
