/// Runtime settings, read from an optional TOML file.

use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_FRAME_MILLIS: u64 = 33; // ≈30 FPS

/// A key counts as held if its last press/repeat event arrived within this
/// many frames (terminals without key-release events).
pub const DEFAULT_HOLD_FRAMES: u64 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub frame_millis: u64,
    pub sound_enabled: bool,
    /// Fixed RNG seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
    pub hold_frames: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_millis: DEFAULT_FRAME_MILLIS,
            sound_enabled: true,
            seed: None,
            hold_frames: DEFAULT_HOLD_FRAMES,
        }
    }
}

impl GameConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: GameConfig = toml::from_str(text).context("invalid config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("loading config {}", path.display()))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.frame_millis == 0 {
            bail!("frame_millis must be greater than 0");
        }
        if self.hold_frames == 0 {
            bail!("hold_frames must be greater than 0");
        }
        Ok(())
    }
}
