//! vinput-emulator: injects decoded remote input into the local session.
//!
//! # Layout
//!
//! - [`sink`]: the backend handle traits and the [`RawInputSink`] bundle.
//! - [`keyboard`]: key events over XTest, text over Ctrl+Shift+U.
//! - [`mouse`]: pointer motion, buttons and wheel scrolling over XTest.
//! - [`dispatch`]: [`InputEmulator`], which routes [`vinput_core::InputEvent`]s
//!   to the emitters.
//! - [`backend`]: XTest display, uinput keyboard and an in-memory recorder.
//! - [`config`]: TOML settings.
//!
//! Emitters never return errors.  Events the host cannot express are dropped
//! and logged, and a missing backend handle makes the emitter a no-op.

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod keyboard;
pub mod mouse;
pub mod sink;

pub use config::{ConfigError, EmulatorConfig, ScrollConfig};
pub use dispatch::InputEmulator;
pub use keyboard::{emit_key, emit_unicode};
pub use mouse::ScrollAccumulator;
pub use sink::{DisplayConnection, RawInputSink, VirtualKeyboard, VirtualMouse};
