//! Fire-and-forget match events
//!
//! The core queues events as side effects of intents; the presentation layer
//! drains them after each intent and shows them however it likes, typically
//! as a transient toast. Delivery is best effort: dropping a drained batch
//! is legal and loses no game state.

use serde::{Deserialize, Serialize};

use super::roster::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
}

/// One notification emitted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub event_type: EventType,
    /// The side the event names (for goals, the scoring side)
    pub team: TeamSide,
    /// Match clock reading when the event fired
    pub at_seconds: u32,
}

impl MatchEvent {
    pub fn goal(team: TeamSide, at_seconds: u32) -> Self {
        Self { event_type: EventType::Goal, team, at_seconds }
    }
}
