/// Rendering layer — all terminal I/O lives here.
///
/// The game draws into a `Canvas`; this module scales the finished canvas
/// down to the terminal, two pixel rows per cell using the upper half block,
/// then prints the HUD text on top.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color as TermColor, Print},
    terminal, QueueableCommand,
};

use apple_catcher::assets::{Audio, Sound};
use apple_catcher::entities::Color;
use apple_catcher::surface::{Canvas, Surface, TextSpan};

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Present one complete frame.
pub fn present<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    out.queue(cursor::MoveTo(0, 0))?;
    draw_pixels(out, canvas, cols, rows)?;
    for span in canvas.texts() {
        draw_text(out, canvas, span, cols, rows)?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Pixels ────────────────────────────────────────────────────────────────────

/// Nearest-neighbour sample of the canvas for terminal cell (col, sub-row).
fn sample(canvas: &Canvas, col: u16, sub_row: u32, cols: u16, sub_rows: u32) -> Color {
    let x = col as i64 * canvas.width() as i64 / cols as i64;
    let y = sub_row as i64 * canvas.height() as i64 / sub_rows as i64;
    canvas.pixel(x as i32, y as i32).unwrap_or_default()
}

fn draw_pixels<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let sub_rows = rows as u32 * 2;
    let mut prev: Option<(Color, Color)> = None;

    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row))?;
        for col in 0..cols {
            let top = sample(canvas, col, row as u32 * 2, cols, sub_rows);
            let bot = sample(canvas, col, row as u32 * 2 + 1, cols, sub_rows);

            if prev != Some((top, bot)) {
                out.queue(style::SetForegroundColor(term_color(top)))?;
                out.queue(style::SetBackgroundColor(term_color(bot)))?;
                prev = Some((top, bot));
            }
            out.queue(Print('\u{2580}'))?; // ▀
        }
    }
    Ok(())
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn draw_text<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    span: &TextSpan,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let col = span.pos.x as i64 * cols as i64 / canvas.width().max(1) as i64;
    let row = span.pos.y as i64 * rows as i64 / canvas.height().max(1) as i64;
    if col < 0 || row < 0 || col >= cols as i64 || row >= rows as i64 {
        return Ok(());
    }

    // Keep whatever is underneath as the background so the text reads as
    // printed onto the scene.
    let under = canvas.pixel(span.pos.x, span.pos.y).unwrap_or_default();
    let room = cols as usize - col as usize;
    let text: String = span.text.chars().take(room).collect();

    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(term_color(span.color)))?;
    out.queue(style::SetBackgroundColor(term_color(under)))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Sound ─────────────────────────────────────────────────────────────────────

/// Plays every sound as the terminal bell.  The bell is rung by `flush_bell`
/// so the write happens alongside the rest of the frame's output.
#[derive(Debug, Default)]
pub struct TerminalAudio {
    pending: bool,
}

impl Audio for TerminalAudio {
    fn play(&mut self, sound: &Sound) {
        tracing::trace!(sound = sound.name(), "bell");
        self.pending = true;
    }
}

impl TerminalAudio {
    pub fn flush_bell<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        if std::mem::take(&mut self.pending) {
            out.queue(Print('\u{7}'))?;
        }
        Ok(())
    }
}
