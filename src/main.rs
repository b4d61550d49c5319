//! Whisper Shell command-line entry point
//!
//! Runs one generator and prints its output: the grid as text, or the shell
//! as a JSON summary for an external renderer.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;

use whisper_shell::animation::{FrameState, Timeline};
use whisper_shell::grid::GridGenerator;
use whisper_shell::renderer::{colors, image_size};
use whisper_shell::shell::{ShellBounds, ShellGenerator};
use whisper_shell::{DetailPreset, Settings};

#[derive(Parser, Debug)]
#[command(name = "whisper-shell", version)]
struct Cli {
    /// Settings JSON (defaults are used when omitted or unreadable).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a hidden-word grid.
    Grid {
        /// Seed (defaults to the configured slider seed).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a JSON summary of a shell sculpture.
    Shell {
        /// Seed for the control points.
        #[arg(long)]
        seed: Option<u64>,

        /// Detail preset: low, medium or high.
        #[arg(long)]
        preset: Option<DetailPreset>,

        /// Include every frame's camera state.
        #[arg(long)]
        timeline: bool,
    },
}

#[derive(Serialize)]
struct ShellSummary {
    seed: u64,
    preset: String,
    stroke_rgb: [u8; 3],
    background_rgb: [u8; 3],
    layers: usize,
    points_per_layer: usize,
    total_points: usize,
    bounds: Option<ShellBounds>,
    total_frames: u32,
    duration_secs: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    frames: Option<Vec<FrameState>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    match cli.cmd {
        Command::Grid { seed } => {
            let seed = seed.unwrap_or_else(|| settings.grid.slider_seed());
            let grid = GridGenerator::from_settings(&settings.grid).generate(seed);
            let (w, h) = image_size(&grid, settings.grid.cell_size);

            println!("{}", grid);
            println!();
            let [ir, ig, ib] = colors::to_rgb8(colors::GRID_INK);
            let [br, bg, bb] = colors::to_rgb8(colors::GRID_BACKGROUND);
            println!(
                "seed {}: {} of {} \"{}\" placed ({}x{} px, {} px glyphs, rgb({}, {}, {}) on rgb({}, {}, {}))",
                seed,
                grid.placed_words(),
                grid.target_words,
                settings.grid.secret_word,
                w,
                h,
                settings.grid.font_size,
                ir,
                ig,
                ib,
                br,
                bg,
                bb
            );
        }
        Command::Shell {
            seed,
            preset,
            timeline,
        } => {
            if let Some(preset) = preset {
                settings.apply_preset(preset);
            }

            let seed = seed.unwrap_or(settings.shell.seed);
            let shell = ShellGenerator::from_settings(&settings.shell)
                .generate(seed)
                .context("building shell")?;
            let schedule = Timeline::from_settings(shell.layers.len(), &settings.animation);

            let summary = ShellSummary {
                seed,
                preset: settings.preset.to_string(),
                stroke_rgb: colors::to_rgb8(colors::SHELL_STROKE),
                background_rgb: colors::to_rgb8(colors::SHELL_BACKGROUND),
                layers: shell.layers.len(),
                points_per_layer: settings.shell.samples,
                total_points: shell.point_count(),
                bounds: shell.bounds,
                total_frames: schedule.total_frames(),
                duration_secs: schedule.duration_secs(settings.animation.fps),
                frames: timeline.then(|| schedule.frames().collect()),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
