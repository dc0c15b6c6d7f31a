use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use fpl_form::config::{self, Cli};
use fpl_form::fetch::HttpSource;
use fpl_form::pipeline;
use fpl_form::prompt::Prompt;

fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    sensible_env_logger::init!();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    println!("\n\tEPL Player Form");

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let config = cli.into_config(&mut prompt)?;

    let source = HttpSource::new(config::endpoints_from_env());
    let summary = pipeline::run(&source, &config).context("form report failed")?;

    println!(
        "\nRanked {} of {} {}s through gameweek {}",
        summary.ranked.len(),
        summary.players_considered,
        config.position.label().to_lowercase(),
        summary.current_gameweek
    );
    println!("Report: {}", summary.output.display());
    println!("\nDone. Exiting Program");
    Ok(())
}
