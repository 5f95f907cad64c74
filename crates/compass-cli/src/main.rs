//! Knee Load Compass CLI
//!
//! Terminal front end for the questionnaire: an interactive session, a
//! one-shot assessment and the saved result history.

mod args;
mod cli;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use compass_core::CompassBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        language,
        catalog_file,
        content_file,
        command,
    } = Args::parse();

    let config = CompassBuilder::new()
        .with_language(language.map(Into::into))
        .with_catalog_path(catalog_file)
        .with_content_path(content_file)
        .build()
        .context("Failed to load questionnaire configuration")?;
    let session_language = config.language;

    let cli = Cli::new(config, TerminalRenderer::new(!no_color), database_file);

    info!("Compass started");

    match command {
        Some(Run(run)) => cli.run_session(io::stdin().lock(), run.save).await,
        Some(Assess(assess)) => {
            let (json, save) = (assess.json, assess.save);
            cli.assess(assess.into_params(session_language), json, save)
                .await
        }
        Some(History(history)) => cli.history(history.into()).await,
        Some(Steps) => cli.steps(),
        None => cli.run_session(io::stdin().lock(), false).await,
    }
}
