//! Command line arguments and the scripted command schedule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{RenderConfig, RouletteMode};

/// glint - headless progressive path tracer
#[derive(Parser, Debug)]
#[command(
    name = "glint",
    version,
    about = "Runs the progressive path tracer for a number of frames and saves the result",
    after_help = "EXAMPLES:\n  \
                  glint --scene 1 --frames 256 --output hall.png\n  \
                  glint --spin 0.02 --frames 120 --snapshot-every 10\n  \
                  glint --config render.json --next-scene-at 64 --frames 128"
)]
pub struct Cli {
    /// JSON render configuration to start from
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene preset index
    #[arg(short, long)]
    pub scene: Option<usize>,

    /// Output width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Number of frame ticks to run
    #[arg(short, long, default_value_t = 64)]
    pub frames: u32,

    /// Master RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Camera rotation per frame in radians. Every nonzero step restarts
    /// accumulation.
    #[arg(long)]
    pub spin: Option<f32>,

    /// Russian roulette policy
    #[arg(long, value_enum)]
    pub roulette: Option<CliRoulette>,

    /// Repeat the same noise sequence after every reset
    #[arg(long)]
    pub reseed_on_reset: bool,

    /// Reset accumulation before these frames
    #[arg(long, value_delimiter = ',')]
    pub reset_at: Vec<u32>,

    /// Switch to the next scene before these frames
    #[arg(long, value_delimiter = ',')]
    pub next_scene_at: Vec<u32>,

    /// Toggle pause before these frames
    #[arg(long, value_delimiter = ',')]
    pub pause_at: Vec<u32>,

    /// Also write the image every N frames
    #[arg(long)]
    pub snapshot_every: Option<u32>,

    /// PNG file to write
    #[arg(short, long, default_value = "glint.png")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliRoulette {
    /// Drop dim paths without reweighting (slightly dark)
    Cutoff,
    /// Reweight surviving dim paths (unbiased)
    Compensated,
}

impl From<CliRoulette> for RouletteMode {
    fn from(r: CliRoulette) -> Self {
        match r {
            CliRoulette::Cutoff => RouletteMode::Cutoff,
            CliRoulette::Compensated => RouletteMode::Compensated,
        }
    }
}

/// Discrete command from the outer shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextScene,
    TogglePause,
    Reset,
}

impl Cli {
    /// Build the render configuration: file first, then flag overrides.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => RenderConfig::default(),
        };

        if let Some(scene) = self.scene {
            config.scene = scene;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(spin) = self.spin {
            config.rotation_speed = spin;
        }
        if let Some(roulette) = self.roulette {
            config.roulette = roulette.into();
        }
        if self.reseed_on_reset {
            config.reseed_on_reset = true;
        }

        Ok(config)
    }

    /// Commands to apply before frame `frame`, in a fixed order.
    pub fn commands_at(&self, frame: u32) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.next_scene_at.contains(&frame) {
            commands.push(Command::NextScene);
        }
        if self.pause_at.contains(&frame) {
            commands.push(Command::TogglePause);
        }
        if self.reset_at.contains(&frame) {
            commands.push(Command::Reset);
        }
        commands
    }
}
