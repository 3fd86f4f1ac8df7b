//! Game engine: pitch geometry, roster, and the match state machine.

pub mod coordinates;
pub mod events;
pub mod goal;
pub mod match_state;
pub mod pitch_constants;
pub mod roster;
pub mod snapshot;
pub mod timer;

pub use coordinates::{pixel_to_percent, Coordinate, SurfaceRect};
pub use events::{EventType, MatchEvent};
pub use goal::{scoring_side, Goal};
pub use match_state::MatchState;
pub use roster::{initial_roster, Player, TeamSide, ROSTER_SIZE};
pub use snapshot::{MatchSnapshot, PlayerView, Score};
pub use timer::{TickTimer, TimerCommand};
