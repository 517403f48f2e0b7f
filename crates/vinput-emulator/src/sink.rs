//! Backend handles the emitters write to.
//!
//! A [`RawInputSink`] bundles up to three optional handles:
//!
//! - a [`DisplayConnection`] (X11/XTest) used for keys, pointer motion,
//!   buttons and scroll;
//! - a [`VirtualKeyboard`] (uinput) used for Ctrl+Shift+U Unicode entry;
//! - a [`VirtualMouse`] naming the host's pointer device, if it has one.
//!
//! Every emitter checks for the handle it needs and does nothing when that
//! handle is absent, so a sink with no handles at all is valid and inert.
//!
//! The sink only borrows its handles.  The caller owns the backends and must
//! not use one sink from two threads at the same time.

use std::fmt;

/// Low-level X11 display operations used by the emitters.
///
/// These map one-to-one onto Xlib/XTest calls; the real implementation is
/// `backend::xtest::XDisplay`.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayConnection {
    /// Resolves a KeySym to a keycode in the active layout.
    ///
    /// Returns `0` if the layout has no key producing `keysym`.
    fn keysym_to_keycode(&self, keysym: u32) -> u8;

    /// Synthesizes a key press (`pressed = true`) or release.
    fn fake_key(&self, keycode: u8, pressed: bool);

    /// Moves the pointer by `(dx, dy)` pixels.
    fn fake_relative_motion(&self, dx: i32, dy: i32);

    /// Moves the pointer to `(x, y)` on the screen that currently holds it.
    fn fake_motion(&self, x: i32, y: i32);

    /// Synthesizes a press or release of X button `button` (1-based).
    fn fake_button(&self, button: u32, pressed: bool);

    /// Sends all buffered requests to the server.
    fn flush(&self);
}

/// A virtual keyboard device driven by protocol virtual-key codes.
#[cfg_attr(test, mockall::automock)]
pub trait VirtualKeyboard {
    fn press(&self, virtual_key: u16);
    fn release(&self, virtual_key: u16);
}

/// A virtual pointer device.
///
/// Pointer motion, buttons and scroll all go through the display, and the
/// position cannot be read back, so the only thing a mouse handle provides is
/// its identity.  `mouse::get_location` reports it when it is asked for a
/// position it cannot supply.
#[cfg_attr(test, mockall::automock)]
pub trait VirtualMouse {
    /// Name the device is registered under, for log output.
    fn device_name(&self) -> String;
}

/// Borrowed set of optional backend handles.
#[derive(Clone, Copy, Default)]
pub struct RawInputSink<'a> {
    pub display: Option<&'a dyn DisplayConnection>,
    pub keyboard: Option<&'a dyn VirtualKeyboard>,
    pub mouse: Option<&'a dyn VirtualMouse>,
}

impl<'a> RawInputSink<'a> {
    /// Creates a sink with no handles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(mut self, display: &'a dyn DisplayConnection) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_keyboard(mut self, keyboard: &'a dyn VirtualKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn with_mouse(mut self, mouse: &'a dyn VirtualMouse) -> Self {
        self.mouse = Some(mouse);
        self
    }
}

impl fmt::Debug for RawInputSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawInputSink")
            .field("display", &self.display.is_some())
            .field("keyboard", &self.keyboard.is_some())
            .field("mouse", &self.mouse.is_some())
            .finish()
    }
}
