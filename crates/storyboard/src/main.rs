//! Storyboard CLI binary.
//!
//! - Generate a storyboard from a script file or inline text
//! - List the supported aspect ratios
//! - Chat with the storyboard assistant

use clap::Parser;
use storyboard::StoryboardConfig;
use storyboard::observability::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, list_aspect_ratios, run_chat, run_generate};

    // Load .env before anything reads GEMINI_API_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new("storyboard")
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = match &cli.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };

    match cli.command {
        Commands::Generate {
            script,
            text,
            aspect_ratio,
            output_dir,
        } => {
            let source = cli::ScriptSource::from_args(script, text);
            run_generate(&config, source, aspect_ratio, &output_dir).await?;
        }

        Commands::AspectRatios => {
            list_aspect_ratios(&config);
        }

        Commands::Chat => {
            run_chat(&config).await?;
        }
    }

    Ok(())
}
