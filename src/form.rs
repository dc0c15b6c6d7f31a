use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use serde_json::Value;

use crate::error::{FormError, Result};
use crate::fetch::Dataset;
use crate::model::{Fixture, Gameweek, Player, PlayerForm, Side, Team};

pub const DEFAULT_FORM_STAT: &str = "bps";

const NO_OPPONENT: &str = "-";

/// The id of the single gameweek flagged `is_current`.
pub fn current_gameweek(gameweeks: &[Gameweek]) -> Result<u32> {
    let mut flagged = gameweeks.iter().filter(|gw| gw.is_current);
    let Some(current) = flagged.next() else {
        return Err(FormError::data_consistency("no gameweek is flagged current"));
    };
    if let Some(other) = flagged.next() {
        return Err(FormError::data_consistency(format!(
            "gameweeks {} and {} are both flagged current",
            current.id, other.id
        )));
    }
    Ok(current.id)
}

/// Fixtures grouped by gameweek. Unscheduled fixtures are left out.
#[derive(Debug, Default)]
pub struct FixtureIndex<'a> {
    by_gameweek: BTreeMap<u32, Vec<&'a Fixture>>,
}

impl<'a> FixtureIndex<'a> {
    pub fn build(fixtures: &'a [Fixture]) -> Self {
        let mut by_gameweek: BTreeMap<u32, Vec<&'a Fixture>> = BTreeMap::new();
        for fixture in fixtures {
            let Some(gw) = fixture.event else { continue };
            by_gameweek.entry(gw).or_default().push(fixture);
        }
        Self { by_gameweek }
    }

    pub fn gameweek(&self, gameweek: u32) -> &[&'a Fixture] {
        self.by_gameweek
            .get(&gameweek)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The fixture `team_id` plays in `gameweek`, with the side it plays on.
    pub fn team_fixture(&self, gameweek: u32, team_id: u32) -> Option<(&'a Fixture, Side)> {
        self.gameweek(gameweek)
            .iter()
            .find_map(|f| f.side_of(team_id).map(|side| (*f, side)))
    }
}

/// Shared lookups for reconstructing every selected player's form in one run.
pub struct FormContext<'a> {
    teams: HashMap<u32, &'a Team>,
    index: FixtureIndex<'a>,
    current: u32,
    stat: &'a str,
}

impl<'a> FormContext<'a> {
    pub fn new(dataset: &'a Dataset, stat: &'a str) -> Result<Self> {
        let current = current_gameweek(&dataset.gameweeks)?;
        let index = FixtureIndex::build(&dataset.fixtures);
        if let Some(gameweek) = (1..=current).find(|gw| index.gameweek(*gw).is_empty()) {
            return Err(FormError::MissingFixture { gameweek });
        }
        let stat_recorded = (1..=current)
            .flat_map(|gw| index.gameweek(gw))
            .any(|f| has_stat(f, stat));
        if !stat_recorded {
            return Err(FormError::data_consistency(format!(
                "no fixture up to gameweek {current} records stat {stat:?}"
            )));
        }
        let teams = dataset.teams.iter().map(|t| (t.id, t)).collect();
        debug!("current gameweek {current}, form stat {stat:?}");
        Ok(Self {
            teams,
            index,
            current,
            stat,
        })
    }

    pub fn current_gameweek(&self) -> u32 {
        self.current
    }

    /// Points for gameweeks `1..=current`. A week the team has no fixture counts as 0.
    pub fn point_sequence(&self, player: &Player) -> Vec<i64> {
        (1..=self.current)
            .map(|gw| match self.index.team_fixture(gw, player.team) {
                Some((fixture, side)) => fixture_points(fixture, self.stat, side, player.id),
                None => {
                    trace!("player {} team {} has no fixture in gw{gw}", player.id, player.team);
                    0
                }
            })
            .collect()
    }

    pub fn player_form(&self, player: &Player) -> Result<PlayerForm> {
        let Some(team) = self.teams.get(&player.team) else {
            return Err(FormError::data_consistency(format!(
                "player {} references unknown team {}",
                player.id, player.team
            )));
        };
        let next_opponent = team
            .next_opponent_id()
            .and_then(|id| self.teams.get(&id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| NO_OPPONENT.to_string());

        Ok(PlayerForm {
            player_id: player.id,
            name: player.display_name(),
            team: team.name.clone(),
            next_opponent,
            points: self.point_sequence(player),
        })
    }
}

/// Forms for `players`, in the order given, plus the gameweek they run up to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTable {
    pub current_gameweek: u32,
    pub forms: Vec<PlayerForm>,
}

pub fn build_player_forms(dataset: &Dataset, players: &[&Player], stat: &str) -> Result<FormTable> {
    let ctx = FormContext::new(dataset, stat)?;
    let forms = players
        .iter()
        .map(|p| ctx.player_form(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(FormTable {
        current_gameweek: ctx.current_gameweek(),
        forms,
    })
}

/// Value recorded for `player_id` in the `side` table of `stat`; 0 if the player is absent.
pub fn fixture_points(fixture: &Fixture, stat: &str, side: Side, player_id: u32) -> i64 {
    let Some(rows) = side_table(fixture, stat, side) else {
        return 0;
    };
    rows.iter()
        .find(|row| row.get("element").and_then(Value::as_u64) == Some(u64::from(player_id)))
        .and_then(|row| row.get("value"))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

fn has_stat(fixture: &Fixture, stat: &str) -> bool {
    side_table(fixture, stat, Side::Home).is_some() || side_table(fixture, stat, Side::Away).is_some()
}

// Accepts both `{"bps": {"h": [..], "a": [..]}}` and `{"identifier": "bps", "h": [..], "a": [..]}`.
fn side_table<'f>(fixture: &'f Fixture, stat: &str, side: Side) -> Option<&'f Vec<Value>> {
    fixture.stats.iter().find_map(|entry| {
        let table = if entry.get("identifier").and_then(Value::as_str) == Some(stat) {
            entry
        } else {
            entry.get(stat)?
        };
        table.get(side.key()).and_then(Value::as_array)
    })
}
