#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use fpl_form::fetch::{Dataset, Endpoint, StatsSource, parse_json_body};
use fpl_form::model::PlayerForm;
use fpl_form::{FormError, Result};

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn fixture_name(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Players => "elements.json",
        Endpoint::Teams => "teams.json",
        Endpoint::Fixtures => "fixtures.json",
        Endpoint::Gameweeks => "events.json",
    }
}

/// Serves `tests/fixtures/*.json`, optionally failing one endpoint, and records every call.
#[derive(Default)]
pub struct FixtureSource {
    pub failing: Option<Endpoint>,
    pub overrides: Vec<(Endpoint, Value)>,
    pub calls: RefCell<Vec<Endpoint>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(endpoint: Endpoint) -> Self {
        Self {
            failing: Some(endpoint),
            ..Self::default()
        }
    }

    pub fn with_override(mut self, endpoint: Endpoint, value: Value) -> Self {
        self.overrides.push((endpoint, value));
        self
    }
}

impl StatsSource for FixtureSource {
    fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        self.calls.borrow_mut().push(endpoint);
        if self.failing == Some(endpoint) {
            return Err(FormError::network(
                endpoint,
                "http://fixtures.invalid/",
                "connection refused",
            ));
        }
        if let Some((_, value)) = self.overrides.iter().find(|(e, _)| *e == endpoint) {
            return Ok(value.clone());
        }
        parse_json_body(endpoint, &read_fixture(fixture_name(endpoint)))
    }
}

pub fn load_dataset() -> Dataset {
    Dataset::load(&FixtureSource::new()).expect("fixture dataset should load")
}

pub fn form(name: &str, points: &[i64]) -> PlayerForm {
    PlayerForm {
        player_id: name.bytes().map(u32::from).sum(),
        name: name.to_string(),
        team: "Team".to_string(),
        next_opponent: "Opponent".to_string(),
        points: points.to_vec(),
    }
}

pub fn temp_report_path(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fpl_form_{test}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir.join("form.xlsx")
}
