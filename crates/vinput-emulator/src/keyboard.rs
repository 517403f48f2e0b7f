//! Keyboard emitters: physical keys over XTest, text over Ctrl+Shift+U.
//!
//! # Two injection paths
//!
//! Key events go to the X display.  The protocol virtual key is looked up in
//! [`KEYCODES`] to get its KeySym, the server resolves the KeySym to the
//! keycode of the active layout, and XTest synthesizes the event:
//!
//! ```text
//! virtual key → KeySym → XKeysymToKeycode → XTestFakeKeyEvent → XFlush
//! ```
//!
//! Text goes to the uinput virtual keyboard instead.  There is no portable
//! way to inject an arbitrary code point, so the emitter types it the way a
//! user would in GTK, Qt or IBus:
//!
//! ```text
//! hold LCtrl + LShift, tap U, tap each hex digit, release LShift + LCtrl
//! ```
//!
//! Each hex digit is typed as a key, so it is translated back from its evdev
//! name (`KEY_7`, `KEY_C`) to a virtual key through the reverse table.

use tracing::{debug, warn};
use vinput_core::keymap::vkey::{VKEY_LCONTROL, VKEY_LSHIFT, VKEY_U};
use vinput_core::keymap::{ReverseKeyTable, KEYCODES, REVERSE_KEYCODES};
use vinput_core::to_hex;

use crate::sink::{RawInputSink, VirtualKeyboard};

/// Presses (`release = false`) or releases one key on the X display.
///
/// Does nothing when the sink has no display, when the virtual key has no
/// KeySym, or when the active layout has no key for that KeySym.
pub fn emit_key(sink: &RawInputSink<'_>, virtual_key: u16, release: bool) {
    let Some(display) = sink.display else {
        return;
    };
    let Some(entry) = KEYCODES.lookup(virtual_key) else {
        debug!(virtual_key, "no KeySym for virtual key, dropping");
        return;
    };

    let keycode = display.keysym_to_keycode(entry.key_symbol);
    if keycode == 0 {
        debug!(
            virtual_key,
            keysym = entry.key_symbol,
            "KeySym not in active layout, dropping"
        );
        return;
    }

    debug!(virtual_key, keycode, release, "sending key");
    display.fake_key(keycode, !release);
    display.flush();
}

/// Types `utf8` on the virtual keyboard with Ctrl+Shift+U hex entry.
///
/// The hex digits of every code point are concatenated and typed inside a
/// single Ctrl+Shift+U sequence.  Empty text still produces the opening and
/// closing modifier events.  Does nothing when the sink has no keyboard.
pub fn emit_unicode(sink: &RawInputSink<'_>, utf8: &[u8]) {
    emit_unicode_with(sink, utf8, &REVERSE_KEYCODES);
}

/// [`emit_unicode`] with an explicit reverse table.
///
/// Digits that `table` cannot resolve are skipped with a warning; the
/// modifiers are released regardless.
pub fn emit_unicode_with(sink: &RawInputSink<'_>, utf8: &[u8], table: &ReverseKeyTable) {
    let Some(keyboard) = sink.keyboard else {
        return;
    };

    let hex = to_hex(utf8);
    debug!("typing U+{hex}");

    keyboard.press(VKEY_LCONTROL);
    keyboard.press(VKEY_LSHIFT);
    tap(keyboard, VKEY_U);

    for digit in hex.chars() {
        let name = format!("KEY_{digit}");
        match table.lookup_name(&name) {
            Some(virtual_key) => tap(keyboard, virtual_key),
            None => warn!(%digit, "unable to find keycode for Unicode hex digit"),
        }
    }

    keyboard.release(VKEY_LSHIFT);
    keyboard.release(VKEY_LCONTROL);
}

fn tap(keyboard: &dyn VirtualKeyboard, virtual_key: u16) {
    keyboard.press(virtual_key);
    keyboard.release(virtual_key);
}
