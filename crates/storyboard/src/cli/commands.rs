//! CLI command definitions.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;
use storyboard::AspectRatio;

/// Storyboard - turn scripts into illustrated storyboards
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn free-text scripts into illustrated storyboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./storyboard.toml and ~/.config/storyboard/)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a storyboard from a script
    #[command(group(ArgGroup::new("input").required(true).args(["script", "text"])))]
    Generate {
        /// Path to a script file
        #[arg(long)]
        script: Option<PathBuf>,

        /// Script text given inline
        #[arg(long)]
        text: Option<String>,

        /// Aspect ratio of the panels (1:1, 16:9, 9:16, 4:3, 3:4)
        #[arg(long)]
        aspect_ratio: Option<AspectRatio>,

        /// Directory the panels and storyboard.json are written to
        #[arg(long, default_value = "storyboard")]
        output_dir: PathBuf,
    },

    /// List the supported aspect ratios
    AspectRatios,

    /// Chat with the storyboard assistant (reads lines from stdin)
    Chat,
}
