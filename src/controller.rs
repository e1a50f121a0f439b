/// The game object the host drives: one `update` per frame.
///
/// Holds the session state, the asset table and the random source, and
/// glues the pure `compute` functions to keyboard, surface and audio.

use rand::Rng;
use tracing::info;

use crate::assets::{Assets, Audio};
use crate::compute::{init_state, tick, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{GameEvent, GameState, Vector2i};
use crate::input::{frame_input, Keyboard};
use crate::render::render;
use crate::surface::Surface;

pub struct GameController<R: Rng> {
    state: GameState,
    assets: Assets,
    rng: R,
}

impl<R: Rng> GameController<R> {
    pub fn new(assets: Assets, rng: R, sound_enabled: bool) -> Self {
        info!(sound_enabled, "session started");
        Self {
            state: init_state(SCREEN_WIDTH, SCREEN_HEIGHT, sound_enabled),
            assets,
            rng,
        }
    }

    /// Size the display for the game.  Call once before the first frame.
    pub fn setup(&self, surface: &mut impl Surface) {
        surface.set_size(Vector2i::new(self.state.width, self.state.height));
    }

    /// Run one frame: simulate, play hit sounds, draw.
    pub fn update(
        &mut self,
        keyboard: &impl Keyboard,
        surface: &mut impl Surface,
        audio: &mut impl Audio,
    ) -> Vec<GameEvent> {
        let input = frame_input(keyboard);
        let (state, events) = tick(&self.state, &input, &self.assets, &mut self.rng);
        self.state = state;

        if self.state.sound_enabled {
            for event in &events {
                if let GameEvent::Hit(kind) = event {
                    audio.play(self.assets.item_sound(*kind));
                }
            }
        }

        render(surface, &self.state, &self.assets);
        events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the session state wholesale (scripted scenarios, tests).
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}
