/// Image and sound table, built once at startup and shared by every actor of
/// the same kind.

use tracing::debug;

use crate::entities::{Color, ItemKind};
use crate::surface::Image;

// ── Geometry of the bundled sprites ───────────────────────────────────────────

pub const PLAYER_FRAME_SIZE: i32 = 32;
pub const PLAYER_FRAMES: i32 = 4;
pub const APPLE_SIZE: (i32, i32) = (76, 96);
pub const BOMB_SIZE: (i32, i32) = (72, 108);

/// Transparent colour used by every bundled sprite.
const KEY: Color = Color::new(255, 0, 255);

// ── Sounds ────────────────────────────────────────────────────────────────────

/// Opaque, reusable sound handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sound {
    name: &'static str,
}

impl Sound {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Audio backend.  `play` must not block the frame.
pub trait Audio {
    fn play(&mut self, sound: &Sound);
}

/// Swallows every sound.
#[derive(Debug, Default)]
pub struct Silent;

impl Audio for Silent {
    fn play(&mut self, _sound: &Sound) {}
}

// ── Asset table ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Assets {
    player_sheet: Image,
    apple: Image,
    bomb: Image,
    apple_sound: Sound,
    bomb_sound: Sound,
}

impl Assets {
    pub fn load() -> Self {
        let assets = Self {
            player_sheet: draw_player_sheet(),
            apple: draw_apple(),
            bomb: draw_bomb(),
            apple_sound: Sound { name: "apple" },
            bomb_sound: Sound { name: "bomb" },
        };
        debug!(
            apple = ?assets.apple.size(),
            bomb = ?assets.bomb.size(),
            "assets ready"
        );
        assets
    }

    pub fn player_sheet(&self) -> &Image {
        &self.player_sheet
    }

    pub fn item_image(&self, kind: ItemKind) -> &Image {
        match kind {
            ItemKind::Apple => &self.apple,
            ItemKind::Bomb => &self.bomb,
        }
    }

    pub fn item_sound(&self, kind: ItemKind) -> &Sound {
        match kind {
            ItemKind::Apple => &self.apple_sound,
            ItemKind::Bomb => &self.bomb_sound,
        }
    }
}

// ── Procedural sprites ────────────────────────────────────────────────────────

fn fill_circle(img: &mut Image, cx: i32, cy: i32, r: i32, color: Color) {
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r * r {
                img.set_pixel(x, y, color);
            }
        }
    }
}

fn fill_rect(img: &mut Image, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    for y in y0..y1 {
        for x in x0..x1 {
            img.set_pixel(x, y, color);
        }
    }
}

fn draw_apple() -> Image {
    let (w, h) = APPLE_SIZE;
    let mut img = Image::new(w, h, KEY).with_color_key(KEY);
    fill_circle(&mut img, 38, 52, 34, Color::new(220, 20, 30));
    fill_circle(&mut img, 26, 40, 7, Color::new(255, 120, 120));
    fill_rect(&mut img, 36, 6, 41, 20, Color::new(110, 60, 20));
    fill_circle(&mut img, 48, 12, 6, Color::new(40, 170, 40));
    img
}

fn draw_bomb() -> Image {
    let (w, h) = BOMB_SIZE;
    let mut img = Image::new(w, h, KEY).with_color_key(KEY);
    fill_circle(&mut img, 36, 68, 32, Color::new(40, 40, 48));
    fill_circle(&mut img, 26, 56, 6, Color::new(120, 120, 140));
    fill_rect(&mut img, 32, 26, 40, 38, Color::new(90, 90, 90));
    fill_rect(&mut img, 35, 12, 38, 26, Color::new(160, 130, 90));
    fill_circle(&mut img, 36, 9, 5, Color::new(255, 200, 0));
    img
}

/// Four 32×32 walking frames laid out left to right.
fn draw_player_sheet() -> Image {
    let size = PLAYER_FRAME_SIZE;
    let mut img = Image::new(size * PLAYER_FRAMES, size, KEY).with_color_key(KEY);
    let stride = [0, 3, 0, -3];
    for (frame, dx) in stride.into_iter().enumerate() {
        let ox = frame as i32 * size;
        fill_circle(&mut img, ox + 16, 7, 6, Color::new(250, 210, 170));
        fill_rect(&mut img, ox + 9, 14, ox + 23, 25, Color::new(40, 60, 200));
        fill_rect(&mut img, ox + 11 + dx, 25, ox + 14 + dx, 32, Color::new(60, 40, 20));
        fill_rect(&mut img, ox + 18 - dx, 25, ox + 21 - dx, 32, Color::new(60, 40, 20));
    }
    img
}
