//! X11 KeySym values used by the virtual-key table.
//!
//! Values and names follow `X11/keysymdef.h`.  A KeySym is a *symbol*, not a
//! key position: the X server resolves it to a hardware keycode through the
//! active keyboard layout (`XKeysymToKeycode`), which is why a symbol missing
//! from the layout cannot be typed.
//!
//! Letters use their upper-case symbols (`XK_A` = 0x41).  The layout lookup
//! lands on the same physical key either way.
//!
//! Reference: https://gitlab.freedesktop.org/xorg/proto/xorgproto/-/blob/master/include/X11/keysymdef.h

#![allow(non_upper_case_globals)]

// ── TTY function keys ────────────────────────────────────────────────────────
pub const XK_BackSpace: u32 = 0xFF08;
pub const XK_Tab: u32 = 0xFF09;
pub const XK_Clear: u32 = 0xFF0B;
pub const XK_Return: u32 = 0xFF0D;
pub const XK_Pause: u32 = 0xFF13;
pub const XK_Scroll_Lock: u32 = 0xFF14;
pub const XK_Sys_Req: u32 = 0xFF15;
pub const XK_Escape: u32 = 0xFF1B;
pub const XK_Delete: u32 = 0xFFFF;

// ── International / multi-key ───────────────────────────────────────────────
pub const XK_Kanji: u32 = 0xFF21;
pub const XK_Kana_Shift: u32 = 0xFF2E;
pub const XK_Hangul: u32 = 0xFF31;
pub const XK_Hangul_Jeonja: u32 = 0xFF38;

// ── Cursor control ──────────────────────────────────────────────────────────
pub const XK_Home: u32 = 0xFF50;
pub const XK_Left: u32 = 0xFF51;
pub const XK_Up: u32 = 0xFF52;
pub const XK_Right: u32 = 0xFF53;
pub const XK_Down: u32 = 0xFF54;
pub const XK_Page_Up: u32 = 0xFF55;
pub const XK_Page_Down: u32 = 0xFF56;
pub const XK_End: u32 = 0xFF57;

// ── Misc functions ──────────────────────────────────────────────────────────
pub const XK_Select: u32 = 0xFF60;
pub const XK_Print: u32 = 0xFF61;
pub const XK_Insert: u32 = 0xFF63;
pub const XK_Help: u32 = 0xFF6A;
pub const XK_Num_Lock: u32 = 0xFF7F;

// ── Keypad ──────────────────────────────────────────────────────────────────
pub const XK_KP_Multiply: u32 = 0xFFAA;
pub const XK_KP_Add: u32 = 0xFFAB;
pub const XK_KP_Separator: u32 = 0xFFAC;
pub const XK_KP_Subtract: u32 = 0xFFAD;
pub const XK_KP_Decimal: u32 = 0xFFAE;
pub const XK_KP_Divide: u32 = 0xFFAF;
pub const XK_KP_0: u32 = 0xFFB0;
pub const XK_KP_1: u32 = 0xFFB1;
pub const XK_KP_2: u32 = 0xFFB2;
pub const XK_KP_3: u32 = 0xFFB3;
pub const XK_KP_4: u32 = 0xFFB4;
pub const XK_KP_5: u32 = 0xFFB5;
pub const XK_KP_6: u32 = 0xFFB6;
pub const XK_KP_7: u32 = 0xFFB7;
pub const XK_KP_8: u32 = 0xFFB8;
pub const XK_KP_9: u32 = 0xFFB9;

// ── Function keys (F1 = 0xFFBE, contiguous to F24) ──────────────────────────
pub const XK_F1: u32 = 0xFFBE;
pub const XK_F2: u32 = 0xFFBF;
pub const XK_F3: u32 = 0xFFC0;
pub const XK_F4: u32 = 0xFFC1;
pub const XK_F5: u32 = 0xFFC2;
pub const XK_F6: u32 = 0xFFC3;
pub const XK_F7: u32 = 0xFFC4;
pub const XK_F8: u32 = 0xFFC5;
pub const XK_F9: u32 = 0xFFC6;
pub const XK_F10: u32 = 0xFFC7;
pub const XK_F11: u32 = 0xFFC8;
pub const XK_F12: u32 = 0xFFC9;
pub const XK_F13: u32 = 0xFFCA;
pub const XK_F14: u32 = 0xFFCB;
pub const XK_F15: u32 = 0xFFCC;
pub const XK_F16: u32 = 0xFFCD;
pub const XK_F17: u32 = 0xFFCE;
pub const XK_F18: u32 = 0xFFCF;
pub const XK_F19: u32 = 0xFFD0;
pub const XK_F20: u32 = 0xFFD1;
pub const XK_F21: u32 = 0xFFD2;
pub const XK_F22: u32 = 0xFFD3;
pub const XK_F23: u32 = 0xFFD4;
pub const XK_F24: u32 = 0xFFD5;

// ── Modifiers ───────────────────────────────────────────────────────────────
pub const XK_Shift_L: u32 = 0xFFE1;
pub const XK_Shift_R: u32 = 0xFFE2;
pub const XK_Control_L: u32 = 0xFFE3;
pub const XK_Control_R: u32 = 0xFFE4;
pub const XK_Caps_Lock: u32 = 0xFFE5;
pub const XK_Meta_L: u32 = 0xFFE7;
pub const XK_Meta_R: u32 = 0xFFE8;
pub const XK_Alt_L: u32 = 0xFFE9;
pub const XK_Alt_R: u32 = 0xFFEA;

// ── Latin-1 ─────────────────────────────────────────────────────────────────
pub const XK_space: u32 = 0x0020;
pub const XK_apostrophe: u32 = 0x0027;
pub const XK_comma: u32 = 0x002C;
pub const XK_minus: u32 = 0x002D;
pub const XK_period: u32 = 0x002E;
pub const XK_slash: u32 = 0x002F;
pub const XK_0: u32 = 0x0030;
pub const XK_1: u32 = 0x0031;
pub const XK_2: u32 = 0x0032;
pub const XK_3: u32 = 0x0033;
pub const XK_4: u32 = 0x0034;
pub const XK_5: u32 = 0x0035;
pub const XK_6: u32 = 0x0036;
pub const XK_7: u32 = 0x0037;
pub const XK_8: u32 = 0x0038;
pub const XK_9: u32 = 0x0039;
pub const XK_semicolon: u32 = 0x003B;
pub const XK_equal: u32 = 0x003D;
pub const XK_A: u32 = 0x0041;
pub const XK_B: u32 = 0x0042;
pub const XK_C: u32 = 0x0043;
pub const XK_D: u32 = 0x0044;
pub const XK_E: u32 = 0x0045;
pub const XK_F: u32 = 0x0046;
pub const XK_G: u32 = 0x0047;
pub const XK_H: u32 = 0x0048;
pub const XK_I: u32 = 0x0049;
pub const XK_J: u32 = 0x004A;
pub const XK_K: u32 = 0x004B;
pub const XK_L: u32 = 0x004C;
pub const XK_M: u32 = 0x004D;
pub const XK_N: u32 = 0x004E;
pub const XK_O: u32 = 0x004F;
pub const XK_P: u32 = 0x0050;
pub const XK_Q: u32 = 0x0051;
pub const XK_R: u32 = 0x0052;
pub const XK_S: u32 = 0x0053;
pub const XK_T: u32 = 0x0054;
pub const XK_U: u32 = 0x0055;
pub const XK_V: u32 = 0x0056;
pub const XK_W: u32 = 0x0057;
pub const XK_X: u32 = 0x0058;
pub const XK_Y: u32 = 0x0059;
pub const XK_Z: u32 = 0x005A;
pub const XK_backslash: u32 = 0x005C;
pub const XK_grave: u32 = 0x0060;
pub const XK_braceleft: u32 = 0x007B;
pub const XK_braceright: u32 = 0x007D;
