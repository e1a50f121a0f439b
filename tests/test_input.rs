use apple_catcher::entities::FrameInput;
use apple_catcher::input::{frame_input, HoldTracker, Key, Keyboard, KeyboardState};

#[test]
fn pressing_is_level_triggered() {
    let mut kb = KeyboardState::new();
    assert!(!kb.pressing(Key::Left));
    kb.set_held(Key::Left, true);
    assert!(kb.pressing(Key::Left));
    kb.end_frame();
    assert!(kb.pressing(Key::Left));
    kb.set_held(Key::Left, false);
    assert!(!kb.pressing(Key::Left));
}

#[test]
fn pressed_is_edge_triggered() {
    let mut kb = KeyboardState::new();
    kb.set_held(Key::Enter, true);
    assert!(kb.pressed(Key::Enter));
    kb.end_frame();
    assert!(!kb.pressed(Key::Enter));

    kb.set_held(Key::Enter, false);
    kb.end_frame();
    kb.set_held(Key::Enter, true);
    assert!(kb.pressed(Key::Enter));
}

#[test]
fn frame_input_maps_keys() {
    let mut kb = KeyboardState::new();
    assert_eq!(frame_input(&kb), FrameInput::default());

    kb.set_held(Key::Right, true);
    kb.set_held(Key::S, true);
    assert_eq!(
        frame_input(&kb),
        FrameInput {
            right: true,
            toggle_sound: true,
            ..FrameInput::default()
        }
    );

    kb.end_frame();
    kb.set_held(Key::Enter, true);
    assert_eq!(
        frame_input(&kb),
        FrameInput {
            right: true,
            reset: true,
            ..FrameInput::default()
        }
    );
}

// ── HoldTracker ───────────────────────────────────────────────────────────────

#[test]
fn tap_within_one_drain_still_registers() {
    let mut keys = HoldTracker::new(4);
    let mut kb = KeyboardState::new();

    // Press and release both arrive before the frame is sampled.
    keys.press(Key::Enter, 1);
    keys.release(Key::Enter);
    keys.press(Key::S, 1);
    keys.release(Key::S);
    keys.apply(&mut kb, 1);

    let input = frame_input(&kb);
    assert!(input.reset);
    assert!(input.toggle_sound);
    kb.end_frame();

    // The tap is consumed: nothing is held on the next frame.
    keys.apply(&mut kb, 2);
    assert!(!kb.pressing(Key::Enter));
    assert!(!kb.pressing(Key::S));
}

#[test]
fn held_key_expires_after_hold_window() {
    let mut keys = HoldTracker::new(4);
    let mut kb = KeyboardState::new();

    keys.press(Key::Left, 1);
    for frame in 1..=5 {
        keys.apply(&mut kb, frame);
        assert!(kb.pressing(Key::Left), "frame {frame}");
        kb.end_frame();
    }
    keys.apply(&mut kb, 6);
    assert!(!kb.pressing(Key::Left));
}

#[test]
fn repeat_refreshes_and_release_drops() {
    let mut keys = HoldTracker::new(2);
    let mut kb = KeyboardState::new();

    keys.press(Key::Right, 1);
    keys.apply(&mut kb, 1);
    assert!(kb.pressed(Key::Right));
    kb.end_frame();

    keys.repeat(Key::Right, 3);
    keys.apply(&mut kb, 5);
    assert!(kb.pressing(Key::Right));
    // A repeat is not a new press.
    assert!(!kb.pressed(Key::Right));

    keys.release(Key::Right);
    keys.apply(&mut kb, 5);
    assert!(!kb.pressing(Key::Right));
}

#[test]
fn held_enter_resets_once() {
    let mut keys = HoldTracker::new(4);
    let mut kb = KeyboardState::new();

    keys.press(Key::Enter, 1);
    keys.apply(&mut kb, 1);
    assert!(frame_input(&kb).reset);
    kb.end_frame();

    keys.repeat(Key::Enter, 2);
    keys.apply(&mut kb, 2);
    assert!(!frame_input(&kb).reset);
}
