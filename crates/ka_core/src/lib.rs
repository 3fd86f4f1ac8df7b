//! # ka_core - Click-driven 2D football mini-game core
//!
//! This library owns the entire state of a small two-dimensional football
//! mini-game: eight players on a percent-scaled pitch, a ball, a score, and
//! a match clock. It is driven by exactly two external inputs, pointer
//! clicks translated to pitch coordinates and a one-second tick, and it
//! exposes a read-only snapshot plus fire-and-forget goal events for a
//! presentation layer to consume.
//!
//! ## Integration
//! - Typed hosts construct a [`MatchState`] and call its intent methods.
//! - String hosts use [`apply_intent_json`] for a JSON-in/JSON-out surface.
//! - Hosts own the wall-clock timer; [`TickTimer`] guarantees the
//!   start/stop pairing when entering and leaving the running state.

pub mod api;
pub mod engine;
pub mod error;

pub use api::{apply_intent, apply_intent_json, IntentRequest, IntentResponse};
pub use engine::{
    pixel_to_percent, Coordinate, EventType, MatchEvent, MatchSnapshot, MatchState, Player,
    PlayerView, Score, SurfaceRect, TeamSide, TickTimer, TimerCommand, ROSTER_SIZE,
};
pub use error::{CoreError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
