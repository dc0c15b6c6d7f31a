use std::fmt;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::http_client::http_client;
use crate::model::{Fixture, Gameweek, Player, Team};

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/drf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Players,
    Teams,
    Fixtures,
    Gameweeks,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Players,
        Endpoint::Teams,
        Endpoint::Fixtures,
        Endpoint::Gameweeks,
    ];

    /// Path segment below the API base.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Players => "elements",
            Endpoint::Teams => "teams",
            Endpoint::Fixtures => "fixtures",
            Endpoint::Gameweeks => "events",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::Players => "players",
            Endpoint::Teams => "teams",
            Endpoint::Fixtures => "fixtures",
            Endpoint::Gameweeks => "gameweeks",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub players: String,
    pub teams: String,
    pub fixtures: String,
    pub gameweeks: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        let url = |e: Endpoint| format!("{base}/{}/", e.path());
        Self {
            players: url(Endpoint::Players),
            teams: url(Endpoint::Teams),
            fixtures: url(Endpoint::Fixtures),
            gameweeks: url(Endpoint::Gameweeks),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Players => &self.players,
            Endpoint::Teams => &self.teams,
            Endpoint::Fixtures => &self.fixtures,
            Endpoint::Gameweeks => &self.gameweeks,
        }
    }

    pub fn set(&mut self, endpoint: Endpoint, url: String) {
        match endpoint {
            Endpoint::Players => self.players = url,
            Endpoint::Teams => self.teams = url,
            Endpoint::Fixtures => self.fixtures = url,
            Endpoint::Gameweeks => self.gameweeks = url,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_base(DEFAULT_BASE_URL)
    }
}

/// Where raw payloads come from. One call is one round-trip for HTTP sources.
pub trait StatsSource {
    fn fetch(&self, endpoint: Endpoint) -> Result<Value>;
}

pub struct HttpSource {
    endpoints: Endpoints,
}

impl HttpSource {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl StatsSource for HttpSource {
    fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        let url = self.endpoints.url(endpoint);
        debug!("GET {url}");
        let client = http_client(endpoint, url)?;
        let resp = client
            .get(url)
            .send()
            .map_err(|e| FormError::network(endpoint, url, e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FormError::network(endpoint, url, format!("http {status}")));
        }
        let body = resp
            .text()
            .map_err(|e| FormError::network(endpoint, url, format!("failed reading body: {e}")))?;
        parse_json_body(endpoint, &body)
    }
}

pub fn parse_json_body(endpoint: Endpoint, raw: &str) -> Result<Value> {
    serde_json::from_str(raw.trim()).map_err(|source| FormError::Parse { endpoint, source })
}

/// All four payloads for one run, fetched once and shared by reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub gameweeks: Vec<Gameweek>,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
}

impl Dataset {
    pub fn load(source: &dyn StatsSource) -> Result<Self> {
        let gameweeks = fetch_records(source, Endpoint::Gameweeks)?;
        let players = fetch_records(source, Endpoint::Players)?;
        let teams = fetch_records(source, Endpoint::Teams)?;
        let fixtures = fetch_records(source, Endpoint::Fixtures)?;
        Ok(Self {
            gameweeks,
            players,
            teams,
            fixtures,
        })
    }
}

pub fn fetch_records<T: DeserializeOwned>(
    source: &dyn StatsSource,
    endpoint: Endpoint,
) -> Result<Vec<T>> {
    let value = source.fetch(endpoint)?;
    let records: Vec<T> =
        serde_json::from_value(value).map_err(|source| FormError::Parse { endpoint, source })?;
    info!("{endpoint}: {} records", records.len());
    Ok(records)
}
