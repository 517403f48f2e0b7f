//! X11 display connection via Xlib and the XTest extension.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a client synthesize keyboard
//! and pointer events as if they came from real hardware.  The receiving
//! application cannot tell them apart from physical input.
//!
//! The calls used here:
//! - `XKeysymToKeycode(display, keysym)`: resolve a KeySym in the server's
//!   current layout (returns 0 if no key produces it).
//! - `XTestFakeKeyEvent(display, keycode, is_press, delay)`
//! - `XTestFakeRelativeMotionEvent(display, dx, dy, delay)`
//! - `XTestFakeMotionEvent(display, screen, x, y, delay)`
//! - `XTestFakeButtonEvent(display, button, is_press, delay)`
//! - `XFlush(display)`: Xlib buffers requests; nothing reaches the server
//!   until the buffer is flushed.
//!
//! # Permissions
//!
//! The process needs access to the X display, which is normally satisfied
//! when it runs in the same user session.  If `DISPLAY` is unset or the
//! server refuses the connection, [`XDisplay::open`] fails.

use std::ffi::CString;
use std::os::raw::{c_int, c_uint, c_ulong};
use std::ptr::{self, NonNull};

use tracing::info;
use x11::{xlib, xtest};

use crate::backend::BackendError;
use crate::sink::DisplayConnection;

// ── X11 constants ─────────────────────────────────────────────────────────────

/// `CurrentTime`: deliver the synthesized event immediately.
const CURRENT_TIME: c_ulong = 0;

/// Screen `-1` makes `XTestFakeMotionEvent` use the screen the pointer is on.
const SCREEN_DEFAULT: c_int = -1;

/// An open Xlib display connection.
///
/// Holds the raw `Display*` returned by `XOpenDisplay` and closes it on drop.
/// Xlib connections are not thread-safe, so this type is neither `Send` nor
/// `Sync`.
#[derive(Debug)]
pub struct XDisplay {
    display: NonNull<xlib::Display>,
}

impl XDisplay {
    /// Connects to the X display `name`, or to `$DISPLAY` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::DisplayUnavailable`] if the name contains a NUL
    /// byte or `XOpenDisplay` returns null.
    pub fn open(name: Option<&str>) -> Result<Self, BackendError> {
        let label = name.unwrap_or("$DISPLAY").to_string();
        let c_name = name
            .map(CString::new)
            .transpose()
            .map_err(|_| BackendError::DisplayUnavailable(label.clone()))?;
        let name_ptr = c_name.as_ref().map_or(ptr::null(), |n| n.as_ptr());

        // SAFETY: `name_ptr` is null or points at a NUL-terminated string that
        // outlives the call.  XOpenDisplay does not retain the pointer.
        let raw = unsafe { xlib::XOpenDisplay(name_ptr) };
        let display =
            NonNull::new(raw).ok_or_else(|| BackendError::DisplayUnavailable(label.clone()))?;

        info!(display = %label, "opened X display");
        Ok(Self { display })
    }

    fn raw(&self) -> *mut xlib::Display {
        self.display.as_ptr()
    }
}

impl Drop for XDisplay {
    fn drop(&mut self) {
        // SAFETY: the pointer came from a successful XOpenDisplay and is closed
        // exactly once, here.
        unsafe {
            xlib::XCloseDisplay(self.raw());
        }
    }
}

// SAFETY (all methods below): `self.raw()` is a live connection owned by
// `self`, and `XDisplay` cannot leave the thread that opened it.
impl DisplayConnection for XDisplay {
    fn keysym_to_keycode(&self, keysym: u32) -> u8 {
        unsafe { xlib::XKeysymToKeycode(self.raw(), xlib::KeySym::from(keysym)) }
    }

    fn fake_key(&self, keycode: u8, pressed: bool) {
        unsafe {
            xtest::XTestFakeKeyEvent(
                self.raw(),
                c_uint::from(keycode),
                c_int::from(pressed),
                CURRENT_TIME,
            );
        }
    }

    fn fake_relative_motion(&self, dx: i32, dy: i32) {
        unsafe {
            xtest::XTestFakeRelativeMotionEvent(self.raw(), SCREEN_DEFAULT, dx, dy, CURRENT_TIME);
        }
    }

    fn fake_motion(&self, x: i32, y: i32) {
        unsafe {
            xtest::XTestFakeMotionEvent(self.raw(), SCREEN_DEFAULT, x, y, CURRENT_TIME);
        }
    }

    fn fake_button(&self, button: u32, pressed: bool) {
        unsafe {
            xtest::XTestFakeButtonEvent(self.raw(), button, c_int::from(pressed), CURRENT_TIME);
        }
    }

    fn flush(&self) {
        unsafe {
            xlib::XFlush(self.raw());
        }
    }
}
