//! In-memory backend that records every call.
//!
//! # Why a recording backend?
//!
//! The real backends need an X server or write access to `/dev/uinput`, and
//! the events they inject cannot be observed from Rust afterwards.
//! [`RecordingBackend`] implements all three sink handle traits and pushes
//! each call onto a `Mutex<Vec<BackendCall>>`, so tests (and the replay
//! tool's `--dry-run`) can inspect exactly what was emitted and in what
//! order.
//!
//! # Keysym resolution
//!
//! On evdev-based X servers an X keycode is the evdev keycode plus 8.  The
//! recorder answers [`keysym_to_keycode`](DisplayConnection::keysym_to_keycode)
//! the same way using [`KEYCODES`], so recorded keycodes look like the ones a
//! stock Xorg server would report.  Keysyms passed to
//! [`without_keysyms`](RecordingBackend::without_keysyms) resolve to `0`, to
//! simulate a layout that lacks them.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use vinput_core::keymap::KEYCODES;

use crate::sink::{DisplayConnection, VirtualKeyboard, VirtualMouse};

/// Offset between evdev keycodes and X keycodes on evdev-based servers.
const X_KEYCODE_OFFSET: u32 = 8;

/// One recorded backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCall {
    FakeKey { keycode: u8, pressed: bool },
    RelativeMotion { dx: i32, dy: i32 },
    Motion { x: i32, y: i32 },
    Button { button: u32, pressed: bool },
    Flush,
    KeyboardPress(u16),
    KeyboardRelease(u16),
}

/// Recorder implementing [`DisplayConnection`], [`VirtualKeyboard`] and
/// [`VirtualMouse`].
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    missing_keysyms: HashSet<u32>,
}

impl RecordingBackend {
    /// Creates a recorder with an empty log and a full layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder whose layout has no key for any of `keysyms`.
    pub fn without_keysyms(keysyms: &[u32]) -> Self {
        Self {
            calls: Mutex::default(),
            missing_keysyms: keysyms.iter().copied().collect(),
        }
    }

    /// Copy of every call recorded so far.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.log().clone()
    }

    /// Returns and clears the recorded calls.
    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.log())
    }

    /// Only the virtual keyboard calls, as `(virtual_key, pressed)` pairs.
    pub fn keyboard_events(&self) -> Vec<(u16, bool)> {
        self.log()
            .iter()
            .filter_map(|call| match *call {
                BackendCall::KeyboardPress(vk) => Some((vk, true)),
                BackendCall::KeyboardRelease(vk) => Some((vk, false)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BackendCall) {
        self.log().push(call);
    }

    fn log(&self) -> MutexGuard<'_, Vec<BackendCall>> {
        // A panicking test thread must not hide what was recorded before it.
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisplayConnection for RecordingBackend {
    fn keysym_to_keycode(&self, keysym: u32) -> u8 {
        if self.missing_keysyms.contains(&keysym) {
            return 0;
        }
        KEYCODES
            .iter()
            .find(|(_, entry)| entry.key_symbol == keysym)
            .and_then(|(_, entry)| u8::try_from(entry.local_keycode + X_KEYCODE_OFFSET).ok())
            .unwrap_or(0)
    }

    fn fake_key(&self, keycode: u8, pressed: bool) {
        self.record(BackendCall::FakeKey { keycode, pressed });
    }

    fn fake_relative_motion(&self, dx: i32, dy: i32) {
        self.record(BackendCall::RelativeMotion { dx, dy });
    }

    fn fake_motion(&self, x: i32, y: i32) {
        self.record(BackendCall::Motion { x, y });
    }

    fn fake_button(&self, button: u32, pressed: bool) {
        self.record(BackendCall::Button { button, pressed });
    }

    fn flush(&self) {
        self.record(BackendCall::Flush);
    }
}

impl VirtualKeyboard for RecordingBackend {
    fn press(&self, virtual_key: u16) {
        self.record(BackendCall::KeyboardPress(virtual_key));
    }

    fn release(&self, virtual_key: u16) {
        self.record(BackendCall::KeyboardRelease(virtual_key));
    }
}

impl VirtualMouse for RecordingBackend {
    fn device_name(&self) -> String {
        "vinput recording mouse".to_string()
    }
}
