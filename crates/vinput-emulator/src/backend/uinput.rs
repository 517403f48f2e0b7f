//! Virtual keyboard on `/dev/uinput`.
//!
//! The device advertises every evdev key reachable from the virtual-key
//! table.  Each press or release is written as a single `EV_KEY` event;
//! `VirtualDevice::emit` terminates every batch with its own `SYN_REPORT`.
//!
//! Creating the device needs write access to `/dev/uinput` (usually root or
//! membership in the `input` group).

use std::sync::{Mutex, PoisonError};

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key};
use tracing::{debug, error, info};
use vinput_core::keymap::KEYCODES;

use crate::backend::BackendError;
use crate::sink::VirtualKeyboard;

/// Default device name shown by `evtest` and `libinput list-devices`.
pub const DEFAULT_DEVICE_NAME: &str = "vinput virtual keyboard";

const KEY_RELEASED: i32 = 0;
const KEY_PRESSED: i32 = 1;

/// uinput virtual keyboard driven by protocol virtual keys.
pub struct UinputKeyboard {
    device: Mutex<VirtualDevice>,
    name: String,
}

impl UinputKeyboard {
    /// Creates the virtual device.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Device`] if `/dev/uinput` cannot be opened or
    /// the device cannot be configured.
    pub fn new(name: &str) -> Result<Self, BackendError> {
        let mut keys = AttributeSet::<Key>::new();
        for (_, entry) in KEYCODES.iter() {
            if let Ok(code) = u16::try_from(entry.local_keycode) {
                keys.insert(Key::new(code));
            }
        }

        let device = VirtualDeviceBuilder::new()?
            .name(name)
            .with_keys(&keys)?
            .build()?;

        info!(device = name, "created uinput keyboard");
        Ok(Self {
            device: Mutex::new(device),
            name: name.to_string(),
        })
    }

    /// Name the device was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, virtual_key: u16, value: i32) {
        let Some(event) = key_event(virtual_key, value) else {
            debug!(virtual_key, "no evdev keycode for virtual key, dropping");
            return;
        };

        let mut device = self.device.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = device.emit(&[event]) {
            error!(virtual_key, code = event.code(), "failed to write uinput key event: {e}");
        }
    }
}

/// The `EV_KEY` event for `virtual_key`, or `None` if it has no evdev code.
fn key_event(virtual_key: u16, value: i32) -> Option<InputEvent> {
    KEYCODES
        .entry(virtual_key)
        .and_then(|entry| u16::try_from(entry.local_keycode).ok())
        .map(|code| InputEvent::new(EventType::KEY, code, value))
}

impl VirtualKeyboard for UinputKeyboard {
    fn press(&self, virtual_key: u16) {
        self.send(virtual_key, KEY_PRESSED);
    }

    fn release(&self, virtual_key: u16) {
        self.send(virtual_key, KEY_RELEASED);
    }
}

impl std::fmt::Debug for UinputKeyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UinputKeyboard")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinput_core::keymap::evdev::{KEY_A, KEY_SLEEP};
    use vinput_core::keymap::vkey::VKEY_SLEEP;

    #[test]
    fn test_key_event_is_a_bare_key_event() {
        // Arrange / Act
        let event = key_event(0x41, KEY_PRESSED).unwrap();

        // Assert: no SYN_REPORT of our own, emit() appends it
        assert_eq!(event.event_type(), EventType::KEY);
        assert_eq!(event.code(), KEY_A as u16);
        assert_eq!(event.value(), KEY_PRESSED);
    }

    #[test]
    fn test_key_event_carries_release_value() {
        let event = key_event(0x41, KEY_RELEASED).unwrap();

        assert_eq!(event.value(), KEY_RELEASED);
    }

    #[test]
    fn test_key_event_covers_keys_without_keysym() {
        let event = key_event(VKEY_SLEEP, KEY_PRESSED).unwrap();

        assert_eq!(event.code(), KEY_SLEEP as u16);
    }

    #[test]
    fn test_key_event_unmapped_virtual_key_is_none() {
        assert!(key_event(0x07, KEY_PRESSED).is_none());
        assert!(key_event(0xFFFF, KEY_PRESSED).is_none());
    }
}
