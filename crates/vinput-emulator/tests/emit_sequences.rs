//! End-to-end emitter sequences recorded through `RecordingBackend`.

use vinput_core::keymap::keysym::XK_A;
use vinput_core::keymap::vkey::{VKEY_LCONTROL, VKEY_LSHIFT, VKEY_U};
use vinput_core::{InputEvent, Viewport};
use vinput_emulator::backend::recording::{BackendCall, RecordingBackend};
use vinput_emulator::mouse::{self, get_location};
use vinput_emulator::{emit_key, emit_unicode, InputEmulator, RawInputSink, ScrollConfig};

fn full_sink(backend: &RecordingBackend) -> RawInputSink<'_> {
    RawInputSink::new()
        .with_display(backend)
        .with_keyboard(backend)
        .with_mouse(backend)
}

fn press(vk: u16) -> (u16, bool) {
    (vk, true)
}

fn release(vk: u16) -> (u16, bool) {
    (vk, false)
}

/// Keyboard events of a full Ctrl+Shift+U sequence typing `digits`.
fn unicode_sequence(digits: &[u16]) -> Vec<(u16, bool)> {
    let mut events = vec![
        press(VKEY_LCONTROL),
        press(VKEY_LSHIFT),
        press(VKEY_U),
        release(VKEY_U),
    ];
    for &vk in digits {
        events.push(press(vk));
        events.push(release(vk));
    }
    events.push(release(VKEY_LSHIFT));
    events.push(release(VKEY_LCONTROL));
    events
}

// ── Keys ──────────────────────────────────────────────────────────────────────

#[test]
fn test_key_press_and_release_on_stock_layout() {
    // Arrange
    let backend = RecordingBackend::new();
    let sink = full_sink(&backend);

    // Act
    emit_key(&sink, 0x41, false);
    emit_key(&sink, 0x41, true);

    // Assert: KEY_A (30) + 8
    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::FakeKey { keycode: 38, pressed: true },
            BackendCall::Flush,
            BackendCall::FakeKey { keycode: 38, pressed: false },
            BackendCall::Flush,
        ]
    );
}

#[test]
fn test_key_missing_from_layout_records_nothing() {
    let backend = RecordingBackend::without_keysyms(&[XK_A]);

    emit_key(&full_sink(&backend), 0x41, false);

    assert!(backend.calls().is_empty());
}

#[test]
fn test_generic_and_left_modifiers_resolve_to_same_keycode() {
    let backend = RecordingBackend::new();
    let sink = full_sink(&backend);

    emit_key(&sink, 0x10, false); // VKEY_SHIFT
    emit_key(&sink, 0xA0, false); // VKEY_LSHIFT

    let calls = backend.calls();
    assert_eq!(calls[0], calls[2]);
    assert_eq!(calls[0], BackendCall::FakeKey { keycode: 50, pressed: true });
}

// ── Unicode ───────────────────────────────────────────────────────────────────

#[test]
fn test_unicode_emoji_types_its_code_point() {
    // Arrange
    let backend = RecordingBackend::new();

    // Act: U+1F471
    emit_unicode(&full_sink(&backend), "👱".as_bytes());

    // Assert
    assert_eq!(
        backend.keyboard_events(),
        unicode_sequence(&[0x31, 0x46, 0x34, 0x37, 0x31])
    );
}

#[test]
fn test_unicode_string_types_one_sequence() {
    let backend = RecordingBackend::new();

    emit_unicode(&full_sink(&backend), b"ab");

    assert_eq!(
        backend.keyboard_events(),
        unicode_sequence(&[0x36, 0x31, 0x36, 0x32])
    );
}

#[test]
fn test_unicode_never_touches_the_display() {
    let backend = RecordingBackend::new();

    emit_unicode(&full_sink(&backend), "é".as_bytes());

    assert!(backend
        .calls()
        .iter()
        .all(|call| matches!(call, BackendCall::KeyboardPress(_) | BackendCall::KeyboardRelease(_))));
}

#[test]
fn test_unicode_without_keyboard_records_nothing() {
    let backend = RecordingBackend::new();
    let sink = RawInputSink::new().with_display(&backend);

    emit_unicode(&sink, b"A");

    assert!(backend.calls().is_empty());
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

#[test]
fn test_scroll_down_one_detent() {
    // Arrange
    let backend = RecordingBackend::new();

    // Act
    mouse::scroll(&full_sink(&backend), -120);

    // Assert
    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::Button { button: 5, pressed: true },
            BackendCall::Button { button: 5, pressed: false },
            BackendCall::Button { button: 5, pressed: true },
            BackendCall::Button { button: 5, pressed: false },
            BackendCall::Flush,
        ]
    );
}

#[test]
fn test_pointer_motion_and_buttons() {
    let backend = RecordingBackend::new();
    let sink = full_sink(&backend);

    mouse::move_relative(&sink, 4, -4);
    mouse::move_absolute(&sink, 639.5, 0.49, &Viewport::default());
    mouse::button(&sink, 1, false);
    mouse::button(&sink, 4, false);
    mouse::button(&sink, 1, true);

    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::RelativeMotion { dx: 4, dy: -4 },
            BackendCall::Flush,
            BackendCall::Motion { x: 640, y: 0 },
            BackendCall::Flush,
            BackendCall::Button { button: 1, pressed: true },
            BackendCall::Flush,
            BackendCall::Button { button: 1, pressed: false },
            BackendCall::Flush,
        ]
    );
}

#[test]
fn test_location_is_origin() {
    let backend = RecordingBackend::new();

    assert_eq!(get_location(&full_sink(&backend)), (0, 0));
    assert!(backend.calls().is_empty());
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[test]
fn test_dispatcher_carries_scroll_when_configured() {
    // Arrange
    let backend = RecordingBackend::new();
    let sink = full_sink(&backend);
    let mut emulator = InputEmulator::new(&ScrollConfig {
        quantum: 60,
        carry_remainder: true,
    });

    // Act: 40 + 40 = 80 → one pulse, 20 left over
    emulator.handle(&sink, &InputEvent::MouseHScroll { distance: 40 });
    emulator.handle(&sink, &InputEvent::MouseHScroll { distance: 40 });

    // Assert
    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::Button { button: 6, pressed: true },
            BackendCall::Button { button: 6, pressed: false },
            BackendCall::Flush,
        ]
    );
}

#[test]
fn test_dispatcher_replays_mixed_script() {
    let backend = RecordingBackend::new();
    let sink = full_sink(&backend);
    let mut emulator = InputEmulator::default();

    for event in [
        InputEvent::Key { virtual_key: 0x1B, release: false },
        InputEvent::Unicode { text: b"A".to_vec() },
        InputEvent::MouseButton { button: 2, release: false },
        InputEvent::MouseScroll { distance: 59 },
    ] {
        emulator.handle(&sink, &event);
    }

    let calls = backend.calls();
    // Escape (1 + 8), then the text sequence, then middle click; the
    // sub-quantum scroll adds nothing.
    assert_eq!(calls[0], BackendCall::FakeKey { keycode: 9, pressed: true });
    assert_eq!(calls[1], BackendCall::Flush);
    assert_eq!(backend.keyboard_events(), unicode_sequence(&[0x34, 0x31]));
    assert_eq!(
        &calls[calls.len() - 2..],
        &[BackendCall::Button { button: 2, pressed: true }, BackendCall::Flush]
    );
}
