//! Rewind - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{Cli, Command, Settings, parse_script, render_text, run_script, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Loading settings from {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(settings),
        Command::Replay { script, json } => run_replay(&settings, &script, json),
    }
}

/// Runs a script headlessly and prints the final game.
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, script: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    info!("Running replay");
    let steps = parse_script(script)?;
    let session = run_script(&steps)?;
    let view = session.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view, *settings.show_locations()));
    }
    Ok(())
}
