//! Concrete implementations of the sink handle traits.
//!
//! - [`recording::RecordingBackend`] records calls in memory for tests and
//!   dry runs.
//! - `xtest::XDisplay` (Linux, feature `x11`) talks to an X server through
//!   Xlib and XTest.
//! - `uinput::UinputKeyboard` (Linux, feature `uinput`) is a kernel virtual
//!   keyboard created through `/dev/uinput`.

pub mod recording;

#[cfg(all(target_os = "linux", feature = "uinput"))]
pub mod uinput;
#[cfg(all(target_os = "linux", feature = "x11"))]
pub mod xtest;

use thiserror::Error;

/// Error type for opening a backend.
///
/// Only construction can fail.  Once a backend exists, injection failures are
/// logged rather than returned.
#[derive(Debug, Error)]
pub enum BackendError {
    /// `XOpenDisplay` returned null.
    #[error("cannot open X display {0:?}")]
    DisplayUnavailable(String),

    /// The uinput device could not be created or configured.
    #[error("uinput device error: {0}")]
    Device(#[from] std::io::Error),
}
