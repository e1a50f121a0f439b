/// Scene drawing — translates a `GameState` into `Surface` calls.
///
/// No game logic is performed here.

use crate::assets::{Assets, PLAYER_FRAME_SIZE};
use crate::compute::{sprite_offset, GROUND_Y};
use crate::entities::{Actor, ActorKind, Color, GameState, GameStatus, Vector2i};
use crate::surface::Surface;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const SKY: Color = Color::new(128, 255, 255);
pub const GROUND: Color = Color::new(0, 128, 0);
const C_HUD: Color = Color::new(0, 0, 0);
const C_GAME_OVER: Color = Color::new(200, 0, 0);
const C_HINT: Color = Color::new(60, 60, 60);

const GROUND_HEIGHT: i32 = 180;

pub const GAME_OVER_TEXT: &str = "GAME OVER (PRESS ENTER)";

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render(surface: &mut impl Surface, state: &GameState, assets: &Assets) {
    surface.clear();
    draw_background(surface);

    // Collection order: the player goes first, so items draw over it.
    for actor in &state.actors {
        draw_actor(surface, actor, assets);
    }

    draw_hud(surface, state);
}

fn draw_background(surface: &mut impl Surface) {
    surface.set_fill_color(SKY);
    let size = surface.size();
    surface.fill_rectangle(Vector2i::new(0, 0), size);
    surface.set_fill_color(GROUND);
    surface.fill_rectangle(
        Vector2i::new(0, GROUND_Y),
        Vector2i::new(size.x, GROUND_HEIGHT),
    );
}

pub fn draw_actor(surface: &mut impl Surface, actor: &Actor, assets: &Assets) {
    match actor.kind {
        ActorKind::Player => surface.image_cropped(
            assets.player_sheet(),
            actor.pos,
            Vector2i::new(sprite_offset(actor.anim), 0),
            Vector2i::new(PLAYER_FRAME_SIZE, PLAYER_FRAME_SIZE),
        ),
        ActorKind::Item(kind) => surface.image(assets.item_image(kind), actor.pos),
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn score_line(state: &GameState) -> String {
    format!("SCORE: {}   HIGH SCORE: {}", state.score, state.high_score)
}

pub fn sound_line(state: &GameState) -> String {
    let onoff = if state.sound_enabled { "ON" } else { "OFF" };
    format!("SOUND: {} (S)", onoff)
}

fn draw_hud(surface: &mut impl Surface, state: &GameState) {
    surface.set_fill_color(C_HUD);
    surface.set_text_size(20);
    surface.fill_text(&score_line(state), Vector2i::new(8, 8));

    if state.status == GameStatus::GameOver {
        surface.set_fill_color(C_GAME_OVER);
        surface.set_text_size(32);
        surface.fill_text(GAME_OVER_TEXT, Vector2i::new(136, 200));
    }

    surface.set_fill_color(C_HINT);
    surface.set_text_size(12);
    surface.fill_text(&sound_line(state), Vector2i::new(8, surface.height() - 20));
}
