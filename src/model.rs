use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// `element_type` value used by the player endpoint.
    pub fn code(self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim().to_ascii_lowercase();
        if let Ok(code) = s.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| {
                FormError::invalid_argument(format!("position code {code} is not one of 1-4"))
            });
        }
        match s.as_str() {
            "gk" | "gkp" | "keeper" | "goalkeeper" => Ok(Position::Goalkeeper),
            "def" | "defender" => Ok(Position::Defender),
            "mid" | "midfielder" => Ok(Position::Midfielder),
            "fw" | "fwd" | "forward" => Ok(Position::Forward),
            _ => Err(FormError::invalid_argument(format!(
                "unknown position {:?}",
                raw.trim()
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Key used for this side inside a fixture's stat tables.
    pub fn key(self) -> &'static str {
        match self {
            Side::Home => "h",
            Side::Away => "a",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Player {
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    pub element_type: u8,
    pub team: u32,
}

impl Player {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.second_name.trim())
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub next_event_fixture: Vec<TeamFixtureRef>,
}

impl Team {
    pub fn next_opponent_id(&self) -> Option<u32> {
        self.next_event_fixture.first().map(|f| f.opponent)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamFixtureRef {
    pub opponent: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    pub id: u32,
    /// Gameweek; `None` while the fixture is unscheduled.
    #[serde(default)]
    pub event: Option<u32>,
    pub team_h: u32,
    pub team_a: u32,
    #[serde(default)]
    pub stats: Vec<Value>,
}

impl Fixture {
    pub fn side_of(&self, team_id: u32) -> Option<Side> {
        if self.team_h == team_id {
            Some(Side::Home)
        } else if self.team_a == team_id {
            Some(Side::Away)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gameweek {
    pub id: u32,
    #[serde(default)]
    pub is_current: bool,
}

/// A player's per-gameweek points from gameweek 1 up to the current gameweek.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerForm {
    pub player_id: u32,
    pub name: String,
    pub team: String,
    pub next_opponent: String,
    pub points: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parses_codes_and_names() {
        assert_eq!("1".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!(" 4 ".parse::<Position>().unwrap(), Position::Forward);
        assert_eq!("MID".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("defender".parse::<Position>().unwrap(), Position::Defender);
        assert!(matches!(
            "5".parse::<Position>(),
            Err(FormError::InvalidArgument(_))
        ));
        assert!("winger".parse::<Position>().is_err());
    }

    #[test]
    fn fixture_side_lookup() {
        let fixture = Fixture {
            id: 1,
            event: Some(1),
            team_h: 3,
            team_a: 7,
            stats: Vec::new(),
        };
        assert_eq!(fixture.side_of(3), Some(Side::Home));
        assert_eq!(fixture.side_of(7), Some(Side::Away));
        assert_eq!(fixture.side_of(9), None);
    }

    #[test]
    fn display_name_joins_and_trims() {
        let player = Player {
            id: 1,
            first_name: "Mohamed".to_string(),
            second_name: "Salah ".to_string(),
            element_type: 3,
            team: 10,
        };
        assert_eq!(player.display_name(), "Mohamed Salah");
    }
}
