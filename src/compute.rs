/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;
use tracing::{debug, info};

use crate::assets::{Assets, PLAYER_FRAME_SIZE};
use crate::entities::{
    Actor, ActorKind, FrameInput, GameEvent, GameState, GameStatus, ItemKind, Vector2i,
};

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

/// Top of the ground band.  The player stands on it regardless of the
/// live display height.
pub const GROUND_Y: i32 = 400;

/// Actor population (player included) restored at the start of every frame.
pub const POPULATION: usize = 6;

pub const PLAYER_START_X: i32 = 240;
pub const PLAYER_STEP: i32 = 8;
/// How far the 32px sprite may hang off either edge.
pub const PLAYER_OVERHANG: i32 = 16;
pub const ANIM_PERIOD: u32 = 40;
pub const ANIM_FRAME_TICKS: u32 = 10;

pub const MIN_FALL_SPEED: i32 = 4;
pub const MAX_FALL_SPEED: i32 = 12;

/// Hit-test geometry for one item kind: sprite-centre offsets and the
/// distance below which item and player touch.
struct HitShape {
    item_center: Vector2i,
    player_center: Vector2i,
    radius: i32,
}

fn hit_shape(kind: ItemKind) -> HitShape {
    match kind {
        ItemKind::Apple => HitShape {
            item_center: Vector2i::new(38, 48),
            player_center: Vector2i::new(16, 16),
            radius: 40 + 16,
        },
        ItemKind::Bomb => HitShape {
            item_center: Vector2i::new(36, 54),
            player_center: Vector2i::new(16, 16),
            radius: 34 + 8,
        },
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player() -> Actor {
    Actor {
        kind: ActorKind::Player,
        pos: Vector2i::new(PLAYER_START_X, GROUND_Y - PLAYER_FRAME_SIZE),
        alive: true,
        anim: 0,
        speed: 0,
    }
}

/// Build the initial session: a lone player, no items, playing.
pub fn init_state(width: i32, height: i32, sound_enabled: bool) -> GameState {
    GameState {
        actors: vec![new_player()],
        score: 0,
        high_score: 0,
        sound_enabled,
        status: GameStatus::Playing,
        frame: 0,
        width,
        height,
    }
}

/// Start a fresh round, keeping the high score and the sound setting.
pub fn reset(state: &GameState) -> GameState {
    info!(high_score = state.high_score, "round reset");
    GameState {
        actors: vec![new_player()],
        score: 0,
        status: GameStatus::Playing,
        ..state.clone()
    }
}

pub fn toggle_sound(state: &GameState) -> GameState {
    GameState {
        sound_enabled: !state.sound_enabled,
        ..state.clone()
    }
}

/// Spawn one item at the top edge with a random column and fall speed.
pub fn spawn_item(
    kind: ItemKind,
    image_width: i32,
    screen_width: i32,
    rng: &mut impl Rng,
) -> Actor {
    let span = (screen_width - image_width).max(1);
    let x = rng.gen_range(0..span);
    let speed = rng.gen_range(MIN_FALL_SPEED..=MAX_FALL_SPEED);
    debug!(kind = kind.name(), x, speed, "item spawned");
    Actor {
        kind: ActorKind::Item(kind),
        pos: Vector2i::new(x, 0),
        alive: true,
        anim: 0,
        speed,
    }
}

/// Top the actor collection back up to `POPULATION` with random items.
pub fn refill(state: &GameState, assets: &Assets, rng: &mut impl Rng) -> GameState {
    let mut actors = state.actors.clone();
    while actors.len() < POPULATION {
        let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
        let width = assets.item_image(kind).width();
        actors.push(spawn_item(kind, width, state.width, rng));
    }
    GameState {
        actors,
        ..state.clone()
    }
}

// ── Per-actor behaviour ───────────────────────────────────────────────────────

pub fn update_player(player: &Actor, input: &FrameInput, screen_width: i32) -> Actor {
    let mut x = player.pos.x;
    if input.left {
        x = (x - PLAYER_STEP).max(-PLAYER_OVERHANG);
    }
    if input.right {
        x = (x + PLAYER_STEP).min(screen_width - PLAYER_OVERHANG);
    }
    Actor {
        pos: Vector2i::new(x, player.pos.y),
        anim: (player.anim + 1) % ANIM_PERIOD,
        ..player.clone()
    }
}

pub fn update_item(item: &Actor, screen_height: i32) -> Actor {
    let y = item.pos.y + item.speed;
    Actor {
        pos: Vector2i::new(item.pos.x, y),
        alive: item.alive && y <= screen_height,
        ..item.clone()
    }
}

/// Advance one actor by a frame, dispatching on its kind.
pub fn update_actor(actor: &Actor, input: &FrameInput, width: i32, height: i32) -> Actor {
    match actor.kind {
        ActorKind::Player => update_player(actor, input, width),
        ActorKind::Item(_) => update_item(actor, height),
    }
}

/// Horizontal offset of the current frame in the player's sprite sheet.
pub fn sprite_offset(anim: u32) -> i32 {
    (anim / ANIM_FRAME_TICKS) as i32 * PLAYER_FRAME_SIZE
}

/// Circular proximity test between an item and the player's top-left corner.
/// Always false for a non-item actor.
pub fn hit(item: &Actor, player: Vector2i) -> bool {
    let Some(kind) = item.item_kind() else {
        return false;
    };
    let shape = hit_shape(kind);
    let a = item.pos + shape.item_center;
    let b = player + shape.player_center;
    let (dx, dy) = ((a.x - b.x) as i64, (a.y - b.y) as i64);
    let r = shape.radius as i64;
    dx * dx + dy * dy < r * r
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Returns the new state and the events the host should react to (sounds
/// are played for `GameEvent::Hit` when sound is enabled).
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    assets: &Assets,
    rng: &mut impl Rng,
) -> (GameState, Vec<GameEvent>) {
    let mut events = Vec::new();

    // ── 1. Refill the population ─────────────────────────────────────────────
    let mut state = refill(state, assets, rng);
    state.frame += 1;

    // ── 2. One-shot commands ─────────────────────────────────────────────────
    if input.reset {
        state = reset(&state);
        events.push(GameEvent::Reset);
    }
    if input.toggle_sound {
        state = toggle_sound(&state);
        info!(enabled = state.sound_enabled, "sound toggled");
        events.push(GameEvent::SoundToggled(state.sound_enabled));
    }

    // ── 3. Update every actor, resolving hits in collection order ────────────
    let (width, height) = (state.width, state.height);
    for i in 0..state.actors.len() {
        state.actors[i] = update_actor(&state.actors[i], input, width, height);

        if state.status != GameStatus::Playing {
            continue;
        }
        let Some(kind) = state.actors[i].item_kind() else {
            continue;
        };
        let Some(player_pos) = state.player().map(|p| p.pos) else {
            continue;
        };
        if !hit(&state.actors[i], player_pos) {
            continue;
        }

        debug!(kind = kind.name(), score = state.score, "item hit player");
        state.actors[i].alive = false;
        events.push(GameEvent::Hit(kind));
        match kind {
            ItemKind::Apple => state.score += 1,
            ItemKind::Bomb => {
                for actor in state.actors.iter_mut().filter(|a| a.is_player()) {
                    actor.alive = false;
                }
                state.high_score = state.high_score.max(state.score);
                state.status = GameStatus::GameOver;
                info!(score = state.score, high_score = state.high_score, "game over");
                events.push(GameEvent::GameOver { score: state.score });
            }
        }
    }

    // ── 4. Drop dead actors, keeping order ───────────────────────────────────
    state.actors.retain(|a| a.alive);

    (state, events)
}
