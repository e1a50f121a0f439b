mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use apple_catcher::assets::Assets;
use apple_catcher::compute::{SCREEN_HEIGHT, SCREEN_WIDTH};
use apple_catcher::config::GameConfig;
use apple_catcher::controller::GameController;
use apple_catcher::input::{HoldTracker, Key, KeyboardState};
use apple_catcher::surface::Canvas;

use display::TerminalAudio;

/// Catch the apples, dodge the bombs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for item spawning (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
    /// Start with sound off.
    #[arg(long)]
    mute: bool,
    /// Write logs here; the terminal itself is taken by the game.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Input ─────────────────────────────────────────────────────────────────────

fn game_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::S),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: key events feed a `HoldTracker`, which decides once per
/// frame which game keys are held (see its docs for the hold window).
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> anyhow::Result<()> {
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding item spawner");

    let mut game = GameController::new(
        Assets::load(),
        StdRng::seed_from_u64(seed),
        config.sound_enabled,
    );
    let mut canvas = Canvas::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    game.setup(&mut canvas);

    let mut audio = TerminalAudio::default();
    let mut keyboard = KeyboardState::new();
    let mut keys = HoldTracker::new(config.hold_frames);
    let frame_len = Duration::from_millis(config.frame_millis);

    loop {
        let frame_start = Instant::now();
        let frame = game.state().frame + 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Press && is_quit(&code, modifiers) {
                info!(frame, "quit requested");
                return Ok(());
            }
            let Some(key) = game_key(&code) else {
                continue;
            };
            match kind {
                KeyEventKind::Press => keys.press(key, frame),
                KeyEventKind::Repeat => keys.repeat(key, frame),
                KeyEventKind::Release => keys.release(key),
            }
        }
        keys.apply(&mut keyboard, frame);

        game.update(&keyboard, &mut canvas, &mut audio);
        keyboard.end_frame();

        display::present(out, &canvas).context("drawing frame")?;
        audio.flush_bell(out)?;
        out.flush()?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.mute {
        config.sound_enabled = false;
    }
    info!(?config, "starting apple catcher");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}
