//! framekit CLI: sample tweens, measure the frame clock, inspect layout geometry.
//!
//! Usage:
//!   framekit tween [OPTIONS]      Sample a tween frame by frame
//!   framekit clock [OPTIONS]      Measure frame deltas on a live clock
//!   framekit page-box [OPTIONS]   Compute page geometry for a client rect
//!   framekit cursor [OPTIONS]     Map a pointer position into every cursor space
//!   framekit config [--init]      Show or write the configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use framekit_common::config::FrameKitConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "framekit",
    about = "Frame clock, tweening, and layout geometry utilities",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/framekit/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a tween frame by frame
    Tween {
        /// Start value
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        from: f64,

        /// End value
        #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
        to: f64,

        /// Duration in seconds (config default when omitted)
        #[arg(long)]
        duration: Option<f64>,

        /// Easing: linear|ease-in|ease-out|ease-in-out
        #[arg(long)]
        easing: Option<String>,

        /// Frames per second (config default when omitted)
        #[arg(long)]
        fps: Option<u32>,

        /// Drive frames from a real timer instead of simulated time
        #[arg(long)]
        realtime: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Measure frame deltas on a live frame clock
    Clock {
        /// Target tick rate (config default when omitted)
        #[arg(long)]
        fps: Option<u32>,

        /// Number of frames to measure (config default when omitted)
        #[arg(long)]
        frames: Option<u32>,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Compute page geometry and visibility for a client rectangle
    PageBox {
        /// Client-space left edge
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Client-space top edge
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Element width
        #[arg(long)]
        width: f64,

        /// Element height
        #[arg(long)]
        height: f64,

        /// Horizontal page scroll
        #[arg(long, default_value = "0.0")]
        scroll_x: f64,

        /// Vertical page scroll
        #[arg(long, default_value = "0.0")]
        scroll_y: f64,

        /// Viewport width
        #[arg(long, default_value = "1920")]
        viewport_width: f64,

        /// Viewport height
        #[arg(long, default_value = "1080")]
        viewport_height: f64,
    },

    /// Map a pointer position into parallax, 3D, and canvas coordinates
    Cursor {
        /// Pointer client X
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer client Y
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Container width
        #[arg(long)]
        width: f64,

        /// Container height
        #[arg(long)]
        height: f64,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to --config or the standard location
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FrameKitConfig::load_from(path)?,
        None => FrameKitConfig::load(),
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    framekit_common::logging::init_logging(&config.logging)?;

    match cli.command {
        Commands::Tween {
            from,
            to,
            duration,
            easing,
            fps,
            realtime,
            json,
        } => {
            let args = commands::tween::TweenArgs {
                from,
                to,
                duration_secs: duration.unwrap_or(config.animation.duration_secs),
                easing: easing.unwrap_or_else(|| config.animation.easing.clone()),
                fps: fps.unwrap_or(config.animation.fps),
                realtime,
                json,
            };
            commands::tween::run(args).await
        }
        Commands::Clock { fps, frames, json } => {
            commands::clock::run(
                fps.unwrap_or(config.clock.target_fps),
                frames.unwrap_or(config.clock.frames),
                json,
            )
            .await
        }
        Commands::PageBox {
            x,
            y,
            width,
            height,
            scroll_x,
            scroll_y,
            viewport_width,
            viewport_height,
        } => commands::page_box::run(
            x,
            y,
            width,
            height,
            scroll_x,
            scroll_y,
            viewport_width,
            viewport_height,
        ),
        Commands::Cursor {
            x,
            y,
            width,
            height,
        } => commands::cursor::run(x, y, width, height),
        Commands::Config { init } => {
            commands::config::run(&config, cli.config.as_deref(), init)
        }
    }
}
