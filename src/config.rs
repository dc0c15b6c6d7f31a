use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result as AnyResult;
use clap::Parser;

use crate::error::{FormError, Result};
use crate::fetch::{DEFAULT_BASE_URL, Endpoint, Endpoints};
use crate::form::DEFAULT_FORM_STAT;
use crate::model::Position;
use crate::prompt::Prompt;
use crate::report_export::DEFAULT_REPORT_PATH;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "Rank Fantasy Premier League players by recent form")]
pub struct Cli {
    /// Position to rank: 1-4, or gk / def / mid / fwd
    #[arg(short, long)]
    pub position: Option<String>,

    /// Number of top performers to report
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Number of recent gameweeks to score
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Report path (defaults to $FPL_REPORT_PATH or eplPlayerFantasyForm.xlsx)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fixture stat used as points (defaults to $FPL_FORM_STAT or bps)
    #[arg(long)]
    pub stat: Option<String>,
}

impl Cli {
    /// Fills anything not given on the command line from the prompt, then validates.
    pub fn into_config<R: BufRead, W: Write>(self, prompt: &mut Prompt<R, W>) -> AnyResult<RunConfig> {
        let position = match self.position.as_deref() {
            Some(raw) => raw.parse::<Position>()?,
            None => prompt.position()?,
        };
        let (top_n, window) = match (self.top, self.window) {
            (Some(top), Some(window)) => (top, window),
            (None, None) => prompt.counts()?,
            (Some(top), None) => (top, prompt.number("Number of recent game weeks")?),
            (None, Some(window)) => (prompt.number("Number of top performers")?, window),
        };

        let config = RunConfig {
            position,
            top_n,
            window,
            output: self.output.unwrap_or_else(report_path_from_env),
            stat: self.stat.unwrap_or_else(form_stat_from_env),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub position: Position,
    pub top_n: usize,
    pub window: usize,
    pub output: PathBuf,
    pub stat: String,
}

impl RunConfig {
    pub fn new(position: Position, top_n: usize, window: usize) -> Self {
        Self {
            position,
            top_n,
            window,
            output: PathBuf::from(DEFAULT_REPORT_PATH),
            stat: DEFAULT_FORM_STAT.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(FormError::invalid_argument("performer count must be at least 1"));
        }
        if self.window == 0 {
            return Err(FormError::invalid_argument("gameweek window must be at least 1"));
        }
        if self.stat.trim().is_empty() {
            return Err(FormError::invalid_argument("form stat must not be empty"));
        }
        Ok(())
    }
}

pub fn endpoints_from_env() -> Endpoints {
    let base = env_string("FPL_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut endpoints = Endpoints::from_base(&base);
    for (endpoint, key) in [
        (Endpoint::Players, "FPL_PLAYERS_URL"),
        (Endpoint::Teams, "FPL_TEAMS_URL"),
        (Endpoint::Fixtures, "FPL_FIXTURES_URL"),
        (Endpoint::Gameweeks, "FPL_GAMEWEEKS_URL"),
    ] {
        if let Some(url) = env_string(key) {
            endpoints.set(endpoint, url);
        }
    }
    endpoints
}

pub fn http_timeout_secs() -> u64 {
    env_string("FPL_HTTP_TIMEOUT_SECS")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
        .clamp(1, 120)
}

pub fn report_path_from_env() -> PathBuf {
    env_string("FPL_REPORT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
}

pub fn form_stat_from_env() -> String {
    env_string("FPL_FORM_STAT").unwrap_or_else(|| DEFAULT_FORM_STAT.to_string())
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
