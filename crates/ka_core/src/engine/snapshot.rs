//! Read-only state snapshot for presentation layers
//!
//! A [`MatchSnapshot`] is a full copy of everything a view needs to render:
//! roster with selection flags materialized, ball position, score, clock, and
//! the running flag. Rebuilt after every intent; views never mutate it.

use serde::{Deserialize, Serialize};

use super::coordinates::Coordinate;
use super::roster::TeamSide;

/// One player as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: String,
    pub team: TeamSide,
    pub position: Coordinate,
    pub selected: bool,
}

/// Current score. Never decreases within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Everything a view needs, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub players: Vec<PlayerView>,
    pub ball: Coordinate,
    pub score: Score,
    pub clock_seconds: u32,
    pub running: bool,
}
