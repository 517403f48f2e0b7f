//! InputEmulator: routes decoded input events to the emitters.
//!
//! The emitters themselves are stateless functions.  The only state a
//! session needs is the per-axis scroll remainder when
//! `scroll.carry_remainder` is enabled, so that lives here.

use vinput_core::InputEvent;

use crate::config::ScrollConfig;
use crate::keyboard::{emit_key, emit_unicode};
use crate::mouse::{self, ScrollAccumulator, ScrollAxis};
use crate::sink::RawInputSink;

/// Per-session event dispatcher.
#[derive(Debug, Clone)]
pub struct InputEmulator {
    vertical: ScrollAccumulator,
    horizontal: ScrollAccumulator,
}

impl InputEmulator {
    /// Creates a dispatcher with the given scroll settings.
    pub fn new(scroll: &ScrollConfig) -> Self {
        Self {
            vertical: ScrollAccumulator::new(scroll.quantum, scroll.carry_remainder),
            horizontal: ScrollAccumulator::new(scroll.quantum, scroll.carry_remainder),
        }
    }

    /// Emits one event into `sink`.
    pub fn handle(&mut self, sink: &RawInputSink<'_>, event: &InputEvent) {
        match event {
            InputEvent::Key {
                virtual_key,
                release,
            } => emit_key(sink, *virtual_key, *release),
            InputEvent::Unicode { text } => emit_unicode(sink, text),
            InputEvent::MouseMove { dx, dy } => mouse::move_relative(sink, *dx, *dy),
            InputEvent::MouseMoveAbsolute { x, y, viewport } => {
                mouse::move_absolute(sink, *x, *y, viewport)
            }
            InputEvent::MouseButton { button, release } => mouse::button(sink, *button, *release),
            InputEvent::MouseScroll { distance } => {
                let pulses = self.vertical.pulses(*distance);
                mouse::scroll_pulses(sink, ScrollAxis::Vertical, pulses);
            }
            InputEvent::MouseHScroll { distance } => {
                let pulses = self.horizontal.pulses(*distance);
                mouse::scroll_pulses(sink, ScrollAxis::Horizontal, pulses);
            }
        }
    }

    /// Clears carried scroll state, e.g. when a client disconnects.
    pub fn reset(&mut self) {
        self.vertical.reset();
        self.horizontal.reset();
    }
}

impl Default for InputEmulator {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}
