//! Headless driver for the Glint progressive path tracer.
//!
//! Plays the part of the interactive shell: issues one frame tick per loop
//! iteration, applies scripted commands and camera spin, and hands finished
//! frames to a PNG sink.

mod cli;
mod sink;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::Renderer;

use crate::cli::{Cli, Command};
use crate::sink::PngSink;

/// Frames between progress log lines.
const PROGRESS_INTERVAL: u32 = 16;

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.render_config()?;
    let spin = config.rotation_speed;

    let mut renderer = Renderer::new(config).context("Failed to initialize renderer")?;
    let mut sink = PngSink::new(&cli.output);

    log::info!(
        "Rendering {} frames of '{}' to {}",
        cli.frames,
        renderer.scene().name(),
        sink.path().display()
    );

    let start = Instant::now();
    for frame in 0..cli.frames {
        for command in cli.commands_at(frame) {
            apply(&mut renderer, command)?;
        }
        renderer.rotate(spin);
        renderer.tick();

        if let Some(every) = cli.snapshot_every.filter(|&n| n > 0) {
            if (frame + 1) % every == 0 {
                renderer.present(&mut sink);
            }
        }

        if (frame + 1) % PROGRESS_INTERVAL == 0 {
            let status = renderer.status();
            log::info!(
                "frame {}/{}: {} samples, scene {} '{}'{}",
                frame + 1,
                cli.frames,
                status.samples,
                status.scene_index,
                status.scene_name,
                if status.paused { " (paused)" } else { "" }
            );
        }
    }

    let elapsed = start.elapsed();
    renderer.present(&mut sink);

    let status = renderer.status();
    log::info!(
        "Finished in {:.2?}: {} samples accumulated, {} image(s) written",
        elapsed,
        status.samples,
        sink.written()
    );

    Ok(())
}

fn apply(renderer: &mut Renderer, command: Command) -> Result<()> {
    match command {
        Command::NextScene => {
            renderer.next_scene().context("Failed to switch scene")?;
            log::info!("Switched to scene '{}'", renderer.scene().name());
        }
        Command::TogglePause => {
            renderer.toggle_pause();
        }
        Command::Reset => renderer.reset(),
    }
    Ok(())
}
