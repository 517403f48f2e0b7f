//! Protocol virtual-key codes referenced by name in code.
//!
//! The protocol reuses the Windows `VK_*` numbering.  Only the codes the
//! emitters need symbolically are named here; the full set lives in the
//! [`KEYCODES`](super::KEYCODES) table as literal indices.

pub const VKEY_BACK: u16 = 0x08;
pub const VKEY_RETURN: u16 = 0x0D;
pub const VKEY_SHIFT: u16 = 0x10;
pub const VKEY_CONTROL: u16 = 0x11;
pub const VKEY_MENU: u16 = 0x12;
pub const VKEY_ESCAPE: u16 = 0x1B;
pub const VKEY_SPACE: u16 = 0x20;
pub const VKEY_0: u16 = 0x30;
pub const VKEY_9: u16 = 0x39;
pub const VKEY_A: u16 = 0x41;
pub const VKEY_F: u16 = 0x46;
pub const VKEY_U: u16 = 0x55;
pub const VKEY_Z: u16 = 0x5A;
pub const VKEY_SLEEP: u16 = 0x5F;
pub const VKEY_LSHIFT: u16 = 0xA0;
pub const VKEY_RSHIFT: u16 = 0xA1;
pub const VKEY_LCONTROL: u16 = 0xA2;
pub const VKEY_RCONTROL: u16 = 0xA3;
pub const VKEY_NON_US_BACKSLASH: u16 = 0xE2;
