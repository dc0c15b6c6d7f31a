use std::path::PathBuf;

use log::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::fetch::{Dataset, StatsSource};
use crate::form::build_player_forms;
use crate::form_rankings::top_performers;
use crate::model::PlayerForm;
use crate::player_filter::select_position;
use crate::report_export::write_report;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub players_considered: usize,
    pub current_gameweek: u32,
    pub ranked: Vec<PlayerForm>,
    pub output: PathBuf,
}

/// Fetch, filter, reconstruct, rank, export. Nothing is written unless every earlier stage succeeds.
pub fn run(source: &dyn StatsSource, config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    println!("\nGathering league data");
    let dataset = Dataset::load(source)?;

    println!("\nGathering list of {}s", config.position.label().to_lowercase());
    let players = select_position(&dataset.players, config.position);
    info!("{} players match {}", players.len(), config.position);

    println!("\nGathering statistics for {} players", players.len());
    let table = build_player_forms(&dataset, &players, &config.stat)?;

    println!(
        "\nSorting out top {} performers in the last {} game weeks",
        config.top_n, config.window
    );
    let ranked = top_performers(&table.forms, config.top_n, config.window)?;

    println!("\nGenerating Excel sheet with top performers data");
    let report = write_report(&ranked, config.window, table.current_gameweek, &config.output)?;
    info!(
        "report {}: {} rows x {} columns",
        report.path.display(),
        report.rows,
        report.columns
    );

    Ok(RunSummary {
        players_considered: table.forms.len(),
        current_gameweek: table.current_gameweek,
        ranked,
        output: report.path,
    })
}
