//! # vinput-core
//!
//! Shared tables and data types for the vinput input-emulation layer.
//!
//! This crate has zero dependencies on OS APIs, display servers, or device
//! nodes.  It defines:
//!
//! - **`keymap`** – The compile-time translation table from protocol
//!   virtual-key codes (the Windows-style `VK_*` numbering used by
//!   game-streaming clients) to Linux evdev keycodes, USB HID usage codes, and
//!   X11 KeySyms, plus the reverse evdev → virtual-key table used when typing
//!   Unicode text.
//!
//! - **`unicode`** – Conversion of UTF-8 text into the uppercase hex digit
//!   string typed during Ctrl+Shift+U entry.
//!
//! - **`event`** – The decoded input events handed to the emitters by the
//!   session layer.

pub mod event;
pub mod keymap;
pub mod unicode;

pub use event::{InputEvent, MouseButton, UnknownMouseButton, Viewport};
pub use keymap::{KeyEntry, KeycodeTable, ReverseKeyTable, KEYCODES, REVERSE_KEYCODES, UNKNOWN};
pub use unicode::to_hex;
