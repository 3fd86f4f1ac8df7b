//! Roster: the fixed eight-player squad
//!
//! Four home and four away players exist for the lifetime of the process.
//! Players are created at the kick-off layout and only ever moved, never
//! added or removed.

use serde::{Deserialize, Serialize};

use super::coordinates::Coordinate;

/// Which side a player (or goal, or score line) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    #[default]
    Home,
    Away,
}

impl TeamSide {
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

/// One player on the pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable id, team prefix plus number ("h1".."h4", "a1".."a4")
    pub id: String,
    pub team: TeamSide,
    pub position: Coordinate,
}

impl Player {
    fn new(id: &str, team: TeamSide, x: f32, y: f32) -> Self {
        Self { id: id.to_string(), team, position: Coordinate::new(x, y) }
    }
}

pub const HOME_PLAYERS: usize = 4;
pub const AWAY_PLAYERS: usize = 4;
pub const ROSTER_SIZE: usize = HOME_PLAYERS + AWAY_PLAYERS;

/// Kick-off layout. Also the layout restored by a match reset.
pub fn initial_roster() -> Vec<Player> {
    vec![
        Player::new("h1", TeamSide::Home, 20.0, 50.0),
        Player::new("h2", TeamSide::Home, 30.0, 30.0),
        Player::new("h3", TeamSide::Home, 30.0, 70.0),
        Player::new("h4", TeamSide::Home, 40.0, 50.0),
        Player::new("a1", TeamSide::Away, 80.0, 50.0),
        Player::new("a2", TeamSide::Away, 70.0, 30.0),
        Player::new("a3", TeamSide::Away, 70.0, 70.0),
        Player::new("a4", TeamSide::Away, 60.0, 50.0),
    ]
}
