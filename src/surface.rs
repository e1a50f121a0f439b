/// Drawing surface abstraction plus an in-memory RGB canvas implementing it.
///
/// The game only ever talks to `Surface`; the terminal presenter in the
/// binary reads the finished `Canvas` back out.

use crate::entities::{Color, Vector2i};

// ── Images ────────────────────────────────────────────────────────────────────

/// A bitmap with an optional transparent colour key.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    color_key: Option<Color>,
}

impl Image {
    /// A `width`×`height` image filled with `fill`.
    pub fn new(width: i32, height: i32, fill: Color) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            pixels: vec![fill; len],
            color_key: None,
        }
    }

    /// Pixels equal to `key` are skipped when the image is drawn.
    pub fn with_color_key(mut self, key: Color) -> Self {
        self.color_key = Some(key);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Vector2i {
        Vector2i::new(self.width, self.height)
    }

    pub fn color_key(&self) -> Option<Color> {
        self.color_key
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// Everything the game needs from a display.
pub trait Surface {
    fn size(&self) -> Vector2i;
    fn set_size(&mut self, size: Vector2i);

    fn width(&self) -> i32 {
        self.size().x
    }

    fn height(&self) -> i32 {
        self.size().y
    }

    fn clear(&mut self);
    fn set_fill_color(&mut self, color: Color);
    fn fill_rectangle(&mut self, origin: Vector2i, size: Vector2i);

    fn image(&mut self, image: &Image, pos: Vector2i) {
        self.image_cropped(image, pos, Vector2i::default(), image.size());
    }

    /// Draw the `src_size` region of `image` starting at `src_offset`.
    fn image_cropped(
        &mut self,
        image: &Image,
        pos: Vector2i,
        src_offset: Vector2i,
        src_size: Vector2i,
    );

    fn set_text_size(&mut self, size: u32);
    fn fill_text(&mut self, text: &str, pos: Vector2i);
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Text queued by `fill_text`.  Kept apart from the pixels so a character
/// based presenter can print it verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub pos: Vector2i,
    pub size: u32,
    pub color: Color,
}

#[derive(Clone, Debug)]
pub struct Canvas {
    size: Vector2i,
    pixels: Vec<Color>,
    fill: Color,
    text_size: u32,
    texts: Vec<TextSpan>,
}

const DEFAULT_TEXT_SIZE: u32 = 16;

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let mut canvas = Self {
            size: Vector2i::default(),
            pixels: Vec::new(),
            fill: Color::default(),
            text_size: DEFAULT_TEXT_SIZE,
            texts: Vec::new(),
        };
        canvas.set_size(Vector2i::new(width, height));
        canvas
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some(self.pixels[(y * self.size.x + x) as usize])
    }

    pub fn texts(&self) -> &[TextSpan] {
        &self.texts
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return;
        }
        let idx = (y * self.size.x + x) as usize;
        self.pixels[idx] = color;
    }
}

impl Surface for Canvas {
    fn size(&self) -> Vector2i {
        self.size
    }

    fn set_size(&mut self, size: Vector2i) {
        let size = Vector2i::new(size.x.max(0), size.y.max(0));
        self.size = size;
        self.pixels = vec![Color::default(); (size.x * size.y) as usize];
        self.texts.clear();
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::default());
        self.texts.clear();
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rectangle(&mut self, origin: Vector2i, size: Vector2i) {
        let x0 = origin.x.clamp(0, self.size.x);
        let y0 = origin.y.clamp(0, self.size.y);
        let x1 = (origin.x + size.x).clamp(x0, self.size.x);
        let y1 = (origin.y + size.y).clamp(y0, self.size.y);
        for y in y0..y1 {
            let row = (y * self.size.x) as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(self.fill);
        }
    }

    fn image_cropped(
        &mut self,
        image: &Image,
        pos: Vector2i,
        src_offset: Vector2i,
        src_size: Vector2i,
    ) {
        let key = image.color_key();
        for sy in 0..src_size.y {
            for sx in 0..src_size.x {
                let Some(color) = image.pixel(src_offset.x + sx, src_offset.y + sy) else {
                    continue;
                };
                if key == Some(color) {
                    continue;
                }
                self.put(pos.x + sx, pos.y + sy, color);
            }
        }
    }

    fn set_text_size(&mut self, size: u32) {
        self.text_size = size;
    }

    fn fill_text(&mut self, text: &str, pos: Vector2i) {
        self.texts.push(TextSpan {
            text: text.to_string(),
            pos,
            size: self.text_size,
            color: self.fill,
        });
    }
}
