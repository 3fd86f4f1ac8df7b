//! Goal mouths and scoring rules
//!
//! Two goal mouths sit at the x extremes of the pitch, spanning y 35-65.
//! The ball entering a mouth scores for the side that does NOT own it:
//! the home goal sits at x<=5 and concedes to the away team, the away goal
//! at x>=95 and concedes to the home team. The two bands are mutually
//! exclusive by construction, so no tie-break is needed.

use super::coordinates::Coordinate;
use super::pitch_constants::goal;
use super::roster::TeamSide;

/// One goal mouth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    /// The side defending this goal
    pub owner: TeamSide,
}

impl Goal {
    /// Goal defended by the home team (x<=5)
    pub const fn home_goal() -> Self {
        Self { owner: TeamSide::Home }
    }

    /// Goal defended by the away team (x>=95)
    pub const fn away_goal() -> Self {
        Self { owner: TeamSide::Away }
    }

    /// The side that scores when the ball enters this goal
    pub const fn scorer(self) -> TeamSide {
        self.owner.opponent()
    }

    /// Whether `ball_pos` lies inside this goal mouth
    pub fn contains(self, ball_pos: Coordinate) -> bool {
        let in_mouth = ball_pos.y >= goal::MOUTH_Y_MIN && ball_pos.y <= goal::MOUTH_Y_MAX;
        match self.owner {
            TeamSide::Home => ball_pos.x <= goal::HOME_LINE_X && in_mouth,
            TeamSide::Away => ball_pos.x >= goal::AWAY_LINE_X && in_mouth,
        }
    }
}

/// The side scoring at `ball_pos`, if the ball sits in a goal mouth.
pub fn scoring_side(ball_pos: Coordinate) -> Option<TeamSide> {
    for g in [Goal::home_goal(), Goal::away_goal()] {
        if g.contains(ball_pos) {
            return Some(g.scorer());
        }
    }
    None
}
