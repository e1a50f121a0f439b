/// Keyboard abstraction: level-triggered `pressing` and edge-triggered
/// `pressed`, plus a frame-based implementation the host feeds.

use std::collections::{HashMap, HashSet};

use crate::entities::FrameInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Enter,
    /// Sound on/off.
    S,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Enter, Key::S];
}

pub trait Keyboard {
    /// True for every frame the key is held.
    fn pressing(&self, key: Key) -> bool;
    /// True only on the frame the key goes down.
    fn pressed(&self, key: Key) -> bool;
}

/// Held-key sets for the current and previous frame.
///
/// The host calls `set_held` while collecting input, reads the keyboard
/// during the frame, then calls `end_frame`.
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    previous: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, key: Key, held: bool) {
        if held {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Roll the current held set into the previous one.
    pub fn end_frame(&mut self) {
        self.previous = self.held.clone();
    }
}

impl Keyboard for KeyboardState {
    fn pressing(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn pressed(&self, key: Key) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }
}

/// Sample the commands the game understands for this frame.
pub fn frame_input(keyboard: &impl Keyboard) -> FrameInput {
    FrameInput {
        left: keyboard.pressing(Key::Left),
        right: keyboard.pressing(Key::Right),
        reset: keyboard.pressed(Key::Enter),
        toggle_sound: keyboard.pressed(Key::S),
    }
}

// ── Hold window ───────────────────────────────────────────────────────────────

/// Turns raw press/repeat/release events into per-frame held keys.
///
/// A key stays held while its last press or repeat is within `hold_frames`
/// of the current frame, or until its release arrives on terminals that
/// report releases.  A key pressed since the last `apply` counts as held for
/// that frame even if it was already released, so quick taps are not lost.
#[derive(Clone, Debug)]
pub struct HoldTracker {
    last_seen: HashMap<Key, u64>,
    tapped: HashSet<Key>,
    hold_frames: u64,
}

impl HoldTracker {
    pub fn new(hold_frames: u64) -> Self {
        Self {
            last_seen: HashMap::new(),
            tapped: HashSet::new(),
            hold_frames,
        }
    }

    pub fn press(&mut self, key: Key, frame: u64) {
        self.last_seen.insert(key, frame);
        self.tapped.insert(key);
    }

    pub fn repeat(&mut self, key: Key, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen.remove(&key);
    }

    /// Publish the held set for `frame` into `keyboard` and forget the taps.
    pub fn apply(&mut self, keyboard: &mut KeyboardState, frame: u64) {
        let hold = self.hold_frames;
        self.last_seen.retain(|_, last| frame.saturating_sub(*last) <= hold);
        for key in Key::ALL {
            let held = self.last_seen.contains_key(&key) || self.tapped.contains(&key);
            keyboard.set_held(key, held);
        }
        self.tapped.clear();
    }
}
