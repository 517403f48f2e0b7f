//! Mouse emitters over XTest.
//!
//! # Mouse scroll via button events
//!
//! X11 has no scroll-wheel request.  A wheel step is a press+release of a
//! dedicated pointer button:
//!
//! | X button | Direction                     |
//! |----------|-------------------------------|
//! | 4        | Up (positive vertical)        |
//! | 5        | Down (negative vertical)      |
//! | 6        | Left (positive horizontal)    |
//! | 7        | Right (negative horizontal)   |
//!
//! Protocol distances are in high-resolution units (120 per wheel detent).
//! Every [`SCROLL_QUANTUM`] units become one button pulse, so a full detent
//! sends two pulses.  The remainder of the division is discarded; the
//! dispatcher can carry it over instead with a [`ScrollAccumulator`].

use tracing::{debug, warn};
use vinput_core::MouseButton;

use crate::sink::{DisplayConnection, RawInputSink};

// ── X11 button numbers ────────────────────────────────────────────────────────

const X_BUTTON_LEFT: u32 = 1;
const X_BUTTON_MIDDLE: u32 = 2;
const X_BUTTON_RIGHT: u32 = 3;
const X_BUTTON_SCROLL_UP: u32 = 4;
const X_BUTTON_SCROLL_DOWN: u32 = 5;
const X_BUTTON_SCROLL_LEFT: u32 = 6;
const X_BUTTON_SCROLL_RIGHT: u32 = 7;

/// High-resolution scroll units per emitted wheel pulse.
pub const SCROLL_QUANTUM: i32 = 60;

/// Wheel axis of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

impl ScrollAxis {
    /// X button for one pulse in the positive or negative direction.
    fn x_button(self, positive: bool) -> u32 {
        match (self, positive) {
            (Self::Vertical, true) => X_BUTTON_SCROLL_UP,
            (Self::Vertical, false) => X_BUTTON_SCROLL_DOWN,
            (Self::Horizontal, true) => X_BUTTON_SCROLL_LEFT,
            (Self::Horizontal, false) => X_BUTTON_SCROLL_RIGHT,
        }
    }
}

/// Moves the pointer by `(dx, dy)` pixels.
pub fn move_relative(sink: &RawInputSink<'_>, dx: i32, dy: i32) {
    let Some(display) = sink.display else {
        return;
    };
    display.fake_relative_motion(dx, dy);
    display.flush();
}

/// Moves the pointer to `(x, y)`, rounded to the nearest pixel.
///
/// The coordinates are used as-is on the screen that currently holds the
/// pointer; `_viewport` is accepted for callers that track one but is not
/// applied.
pub fn move_absolute(sink: &RawInputSink<'_>, x: f32, y: f32, _viewport: &vinput_core::Viewport) {
    let Some(display) = sink.display else {
        return;
    };
    // `as` saturates for out-of-range and NaN values.
    display.fake_motion(x.round() as i32, y.round() as i32);
    display.flush();
}

/// Presses (`release = false`) or releases protocol button `which`.
///
/// Only left (1), middle (2) and right (3) are supported; other numbers are
/// logged and dropped, whether or not a display is attached.
pub fn button(sink: &RawInputSink<'_>, which: u8, release: bool) {
    let x_button = match MouseButton::try_from(which) {
        Ok(MouseButton::Left) => X_BUTTON_LEFT,
        Ok(MouseButton::Middle) => X_BUTTON_MIDDLE,
        Ok(MouseButton::Right) => X_BUTTON_RIGHT,
        Err(err) => {
            warn!("{err}");
            return;
        }
    };
    let Some(display) = sink.display else {
        return;
    };
    display.fake_button(x_button, !release);
    display.flush();
}

/// Scrolls vertically by `distance` high-resolution units.
pub fn scroll(sink: &RawInputSink<'_>, distance: i32) {
    scroll_pulses(sink, ScrollAxis::Vertical, distance / SCROLL_QUANTUM);
}

/// Scrolls horizontally by `distance` high-resolution units.
pub fn hscroll(sink: &RawInputSink<'_>, distance: i32) {
    scroll_pulses(sink, ScrollAxis::Horizontal, distance / SCROLL_QUANTUM);
}

/// Sends `|pulses|` wheel button clicks on `axis`, then one flush.
///
/// Zero pulses sends nothing, not even the flush.
pub fn scroll_pulses(sink: &RawInputSink<'_>, axis: ScrollAxis, pulses: i32) {
    let Some(display) = sink.display else {
        return;
    };
    if pulses == 0 {
        return;
    }
    let x_button = axis.x_button(pulses > 0);
    debug!(?axis, pulses, x_button, "scrolling");
    for _ in 0..pulses.unsigned_abs() {
        click(display, x_button);
    }
    display.flush();
}

/// Current pointer position.
///
/// Pointer readback is not implemented for any backend; this always returns
/// `(0, 0)` and callers must not rely on the value.
pub fn get_location(sink: &RawInputSink<'_>) -> (i32, i32) {
    if let Some(mouse) = sink.mouse {
        debug!(device = %mouse.device_name(), "pointer location is not tracked");
    }
    (0, 0)
}

fn click(display: &dyn DisplayConnection, x_button: u32) {
    display.fake_button(x_button, true);
    display.fake_button(x_button, false);
}

/// Converts scroll distances into pulses for one axis.
///
/// With `carry_remainder` off this is plain truncating division, identical to
/// [`scroll`].  With it on, the part of each distance that did not make a
/// full pulse is kept and added to the next call, so slow trackpad scrolling
/// still produces pulses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAccumulator {
    quantum: i32,
    carry_remainder: bool,
    remainder: i32,
}

impl ScrollAccumulator {
    /// Creates an accumulator.  A non-positive `quantum` falls back to
    /// [`SCROLL_QUANTUM`].
    pub fn new(quantum: i32, carry_remainder: bool) -> Self {
        let quantum = if quantum > 0 { quantum } else { SCROLL_QUANTUM };
        Self {
            quantum,
            carry_remainder,
            remainder: 0,
        }
    }

    /// Returns the (signed) pulse count for `distance`.
    pub fn pulses(&mut self, distance: i32) -> i32 {
        if !self.carry_remainder {
            return distance / self.quantum;
        }
        let total = self.remainder.saturating_add(distance);
        self.remainder = total % self.quantum;
        total / self.quantum
    }

    /// Sub-quantum distance waiting for the next call.
    pub fn remainder(&self) -> i32 {
        self.remainder
    }

    /// Drops any carried remainder.
    pub fn reset(&mut self) {
        self.remainder = 0;
    }
}

impl Default for ScrollAccumulator {
    fn default() -> Self {
        Self::new(SCROLL_QUANTUM, false)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use mockall::Sequence;
    use vinput_core::Viewport;

    use super::*;
    use crate::sink::{MockDisplayConnection, MockVirtualMouse};

    /// Expects `count` press/release pairs of `x_button` followed by a flush.
    fn expect_clicks(display: &mut MockDisplayConnection, x_button: u32, count: usize) {
        let mut seq = Sequence::new();
        for _ in 0..count {
            for pressed in [true, false] {
                display
                    .expect_fake_button()
                    .with(eq(x_button), eq(pressed))
                    .times(1)
                    .in_sequence(&mut seq)
                    .return_const(());
            }
        }
        display.expect_flush().times(1).in_sequence(&mut seq).return_const(());
    }

    // ── Motion ────────────────────────────────────────────────────────────────

    #[test]
    fn test_relative_motion_is_forwarded_and_flushed() {
        let mut display = MockDisplayConnection::new();
        display
            .expect_fake_relative_motion()
            .with(eq(-5), eq(12))
            .times(1)
            .return_const(());
        display.expect_flush().times(1).return_const(());
        let sink = RawInputSink::new().with_display(&display);

        move_relative(&sink, -5, 12);
    }

    #[test]
    fn test_absolute_motion_rounds_to_nearest_pixel() {
        // Arrange
        let mut display = MockDisplayConnection::new();
        display
            .expect_fake_motion()
            .with(eq(11), eq(20))
            .times(1)
            .return_const(());
        display.expect_flush().times(1).return_const(());
        let sink = RawInputSink::new().with_display(&display);

        // Act
        move_absolute(&sink, 10.6, 20.4, &Viewport::default());
    }

    #[test]
    fn test_motion_without_display_is_noop() {
        let mouse = MockVirtualMouse::new();
        let sink = RawInputSink::new().with_mouse(&mouse);

        move_relative(&sink, 1, 1);
        move_absolute(&sink, 1.0, 1.0, &Viewport::default());
    }

    // ── Buttons ───────────────────────────────────────────────────────────────

    #[test]
    fn test_buttons_map_to_x_buttons() {
        for (which, x_button) in [(1u8, 1u32), (2, 2), (3, 3)] {
            let mut display = MockDisplayConnection::new();
            display
                .expect_fake_button()
                .with(eq(x_button), eq(true))
                .times(1)
                .return_const(());
            display.expect_flush().times(1).return_const(());
            let sink = RawInputSink::new().with_display(&display);

            button(&sink, which, false);
        }
    }

    #[test]
    fn test_button_release_sends_not_pressed() {
        let mut display = MockDisplayConnection::new();
        display
            .expect_fake_button()
            .with(eq(3u32), eq(false))
            .times(1)
            .return_const(());
        display.expect_flush().times(1).return_const(());
        let sink = RawInputSink::new().with_display(&display);

        button(&sink, 3, true);
    }

    #[test]
    fn test_unsupported_buttons_make_no_backend_calls() {
        let display = MockDisplayConnection::new();
        let sink = RawInputSink::new().with_display(&display);

        for which in [0u8, 4, 5, 9, u8::MAX] {
            button(&sink, which, false);
            button(&sink, which, true);
        }
    }

    // ── Scroll ────────────────────────────────────────────────────────────────

    #[test]
    fn test_one_detent_up_is_two_pulses_of_button_4() {
        let mut display = MockDisplayConnection::new();
        expect_clicks(&mut display, 4, 2);
        let sink = RawInputSink::new().with_display(&display);

        scroll(&sink, 120);
    }

    #[test]
    fn test_one_and_a_half_detents_up_is_three_pulses_of_button_4() {
        // Arrange
        let mut display = MockDisplayConnection::new();
        expect_clicks(&mut display, 4, 3);
        let sink = RawInputSink::new().with_display(&display);

        // Act
        scroll(&sink, 180);
    }

    #[test]
    fn test_exact_quantum_up_is_one_pulse_of_button_4() {
        let mut display = MockDisplayConnection::new();
        expect_clicks(&mut display, 4, 1);
        let sink = RawInputSink::new().with_display(&display);

        scroll(&sink, SCROLL_QUANTUM);
    }

    #[test]
    fn test_negative_scroll_uses_button_5() {
        let mut display = MockDisplayConnection::new();
        expect_clicks(&mut display, 5, 3);
        let sink = RawInputSink::new().with_display(&display);

        scroll(&sink, -180);
    }

    #[test]
    fn test_horizontal_scroll_uses_buttons_6_and_7() {
        let mut left = MockDisplayConnection::new();
        expect_clicks(&mut left, 6, 1);
        hscroll(&RawInputSink::new().with_display(&left), 60);

        let mut right = MockDisplayConnection::new();
        expect_clicks(&mut right, 7, 2);
        hscroll(&RawInputSink::new().with_display(&right), -130);
    }

    #[test]
    fn test_sub_quantum_scroll_makes_no_backend_calls() {
        // Arrange: no expectations, not even flush
        let display = MockDisplayConnection::new();
        let sink = RawInputSink::new().with_display(&display);

        // Act
        for distance in [0, 59, -59, 1, -1] {
            scroll(&sink, distance);
            hscroll(&sink, distance);
        }
    }

    #[test]
    fn test_scroll_without_display_is_noop() {
        let sink = RawInputSink::new();

        scroll(&sink, 600);
        hscroll(&sink, -600);
    }

    // ── Location ──────────────────────────────────────────────────────────────

    #[test]
    fn test_location_is_always_origin() {
        let mut mouse = MockVirtualMouse::new();
        mouse
            .expect_device_name()
            .returning(|| "vinput mouse".to_string());

        assert_eq!(get_location(&RawInputSink::new()), (0, 0));
        assert_eq!(get_location(&RawInputSink::new().with_mouse(&mouse)), (0, 0));
    }

    // ── ScrollAccumulator ─────────────────────────────────────────────────────

    #[test]
    fn test_accumulator_without_carry_truncates() {
        let mut acc = ScrollAccumulator::new(60, false);

        assert_eq!(acc.pulses(30), 0);
        assert_eq!(acc.pulses(30), 0);
        assert_eq!(acc.pulses(-179), -2);
        assert_eq!(acc.remainder(), 0);
    }

    #[test]
    fn test_accumulator_with_carry_combines_small_steps() {
        // Arrange
        let mut acc = ScrollAccumulator::new(60, true);

        // Act
        let first = acc.pulses(30);
        let second = acc.pulses(30);

        // Assert
        assert_eq!(first + second, 1);
        assert_eq!(acc.remainder(), 0);
    }

    #[test]
    fn test_accumulator_carry_cancels_across_directions() {
        let mut acc = ScrollAccumulator::new(60, true);

        assert_eq!(acc.pulses(50), 0);
        assert_eq!(acc.pulses(-50), 0);
        assert_eq!(acc.remainder(), 0);
        assert_eq!(acc.pulses(-130), -2);
        assert_eq!(acc.remainder(), -10);
    }

    #[test]
    fn test_accumulator_reset_drops_remainder() {
        let mut acc = ScrollAccumulator::new(60, true);
        acc.pulses(45);

        acc.reset();

        assert_eq!(acc.remainder(), 0);
        assert_eq!(acc.pulses(45), 0);
    }

    #[test]
    fn test_accumulator_rejects_non_positive_quantum() {
        let mut acc = ScrollAccumulator::new(0, false);

        assert_eq!(acc.pulses(120), 2);
    }
}
