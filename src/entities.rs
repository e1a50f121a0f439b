/// All game entity types — pure data, no logic.

// ── Primitives ────────────────────────────────────────────────────────────────

/// Integer screen coordinates (pixels, origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vector2i {
    type Output = Vector2i;

    fn add(self, rhs: Vector2i) -> Vector2i {
        Vector2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// Falling item variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Apple,
    Bomb,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Apple, ItemKind::Bomb];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Apple => "apple",
            ItemKind::Bomb => "bomb",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Item(ItemKind),
}

/// One participant in the frame loop.
///
/// A single record covers the player and every item; `kind` decides how it
/// updates, renders and collides. `anim` is only meaningful for the player
/// and `speed` only for items.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub kind: ActorKind,
    pub pos: Vector2i,
    pub alive: bool,
    /// Player animation counter, 0..40.
    pub anim: u32,
    /// Item fall speed in pixels per frame.
    pub speed: i32,
}

impl Actor {
    pub fn item_kind(&self) -> Option<ItemKind> {
        match self.kind {
            ActorKind::Item(kind) => Some(kind),
            ActorKind::Player => None,
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Commands sampled from the keyboard for a single frame.
///
/// `left`/`right` are level-triggered; `reset`/`toggle_sound` are only set on
/// the frame the key goes down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub reset: bool,
    pub toggle_sound: bool,
}

/// Something that happened during a tick and that the host may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An item touched the player while playing.
    Hit(ItemKind),
    GameOver { score: u32 },
    Reset,
    SoundToggled(bool),
}

/// The entire session state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Player first, then items in spawn order.
    pub actors: Vec<Actor>,
    pub score: u32,
    /// Best score of the process lifetime; survives resets.
    pub high_score: u32,
    pub sound_enabled: bool,
    pub status: GameStatus,
    pub frame: u64,
    pub width: i32,
    pub height: i32,
}

impl GameState {
    pub fn player(&self) -> Option<&Actor> {
        self.actors.iter().find(|a| a.is_player())
    }

    pub fn items(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| !a.is_player())
    }
}
