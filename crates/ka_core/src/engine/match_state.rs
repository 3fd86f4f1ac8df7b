//! Match state: the sole owner of game truth
//!
//! All mutation happens here, synchronously, in response to discrete intents
//! (pointer clicks translated to percent coordinates, plus the one-second
//! tick). Presentation layers read [`MatchState::snapshot`] and drain queued
//! events after each intent; they never mutate state directly.
//!
//! Selection is a single `Option<String>` rather than a per-player flag, so
//! "at most one selected player" holds by construction.

use log::{debug, info};

use super::coordinates::Coordinate;
use super::events::MatchEvent;
use super::goal::scoring_side;
use super::pitch_constants::kick;
use super::roster::{initial_roster, Player, TeamSide};
use super::snapshot::{MatchSnapshot, PlayerView, Score};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone)]
pub struct MatchState {
    players: Vec<Player>,
    ball: Coordinate,
    score: Score,
    clock_seconds: u32,
    running: bool,
    selected: Option<String>,
    pending_events: Vec<MatchEvent>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// A fresh match: kick-off layout, ball centered, 0-0, clock 0, paused.
    pub fn new() -> Self {
        Self {
            players: initial_roster(),
            ball: Coordinate::CENTER,
            score: Score::default(),
            clock_seconds: 0,
            running: false,
            selected: None,
            pending_events: Vec::new(),
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn ball(&self) -> Coordinate {
        self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn clock_seconds(&self) -> u32 {
        self.clock_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn player(&self, id: &str) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::PlayerNotFound(id.to_string()))
    }

    /// Full read-only copy for the presentation layer.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: self
                .players
                .iter()
                .map(|p| PlayerView {
                    id: p.id.clone(),
                    team: p.team,
                    position: p.position,
                    selected: self.selected.as_deref() == Some(p.id.as_str()),
                })
                .collect(),
            ball: self.ball,
            score: self.score,
            clock_seconds: self.clock_seconds,
            running: self.running,
        }
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ========================
    // Intents
    // ========================

    /// Mark `id` as the selected player, deselecting everyone else.
    ///
    /// Selection is untouched when the id is unknown.
    pub fn select_player(&mut self, id: &str) -> Result<()> {
        let player = self.player(id)?;
        debug!("selected {} ({})", player.id, player.team.as_str());
        self.selected = Some(id.to_string());
        Ok(())
    }

    /// Unconditionally place a player at `target`.
    ///
    /// No collision checks, no bounds clamp: players may stand on each other
    /// and clicks slightly outside the surface land slightly off the pitch.
    pub fn move_player(&mut self, id: &str, target: Coordinate) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::PlayerNotFound(id.to_string()))?;
        player.position = target;
        Ok(())
    }

    /// Field click while a player is selected: move the player, and kick the
    /// ball if the player started within kick range of it.
    ///
    /// The proximity test and the kick direction both use the position the
    /// player occupied BEFORE the move. The click target doubles as the
    /// player's destination and the direction reference, so the kick can fire
    /// even though the player ends up far from where the ball was. Preserved
    /// on purpose.
    pub fn attempt_kick(&mut self, actor_id: &str, target: Coordinate) -> Result<()> {
        let origin = self.player(actor_id)?.position;
        self.move_player(actor_id, target)?;

        if origin.distance_to(self.ball) < kick::RADIUS_PCT {
            let angle = origin.angle_to(target);
            let kicked = self.ball.offset(angle, kick::TRAVEL_PCT).clamp_to_ball_bounds();
            self.move_ball(kicked);
        }
        Ok(())
    }

    /// Replace the ball position, then evaluate the goal mouths.
    ///
    /// A goal bumps the scoring side by one, recenters the ball, and queues a
    /// notification naming the scorer.
    pub fn move_ball(&mut self, target: Coordinate) {
        self.ball = target;

        if let Some(side) = scoring_side(target) {
            match side {
                TeamSide::Home => self.score.home += 1,
                TeamSide::Away => self.score.away += 1,
            }
            self.ball = Coordinate::CENTER;
            info!(
                "goal for {} at {}s, score {}-{}",
                side.as_str(),
                self.clock_seconds,
                self.score.home,
                self.score.away
            );
            self.pending_events.push(MatchEvent::goal(side, self.clock_seconds));
        }
    }

    /// Routing intent for a raw field click: kick with the selected player,
    /// or ignore the click when nobody is selected.
    pub fn field_clicked(&mut self, target: Coordinate) -> Result<()> {
        match self.selected.clone() {
            Some(id) => self.attempt_kick(&id, target),
            None => {
                debug!("field click at ({:.1}, {:.1}) ignored, no selection", target.x, target.y);
                Ok(())
            }
        }
    }

    /// Flip between Running and Paused.
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        debug!("play state now {}", if self.running { "running" } else { "paused" });
    }

    /// One second of match time. Ticks delivered while paused are ignored,
    /// which makes a late-firing host timer harmless.
    pub fn tick(&mut self) {
        if self.running {
            self.clock_seconds += 1;
        } else {
            debug!("tick ignored while paused");
        }
    }

    /// Back to the fresh-match state: kick-off layout, ball centered, 0-0,
    /// clock 0, paused, nobody selected, event queue empty.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("match reset");
    }
}
