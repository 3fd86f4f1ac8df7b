//! JSON intent API
//!
//! Presentation hosts that prefer strings over linking the Rust types drive
//! the match through this surface: one JSON intent in, one JSON response out.
//! The response carries the schema version, the post-intent snapshot, and the
//! events drained by this intent.

use serde::{Deserialize, Serialize};

use crate::engine::coordinates::Coordinate;
use crate::engine::events::MatchEvent;
use crate::engine::match_state::MatchState;
use crate::engine::snapshot::MatchSnapshot;
use crate::error::{CoreError, Result};
use crate::SCHEMA_VERSION;

/// Inbound intent, tagged by the `intent` field.
///
/// ```json
/// {"intent": "field_clicked", "x": 60.0, "y": 50.0}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum IntentRequest {
    SelectPlayer { id: String },
    FieldClicked { x: f32, y: f32 },
    ToggleRunning,
    Reset,
    Tick,
}

/// Outbound result of one intent.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    pub schema_version: u8,
    pub snapshot: MatchSnapshot,
    pub events: Vec<MatchEvent>,
}

/// Apply one typed intent and collect the resulting snapshot and events.
pub fn apply_intent(state: &mut MatchState, request: IntentRequest) -> Result<IntentResponse> {
    match request {
        IntentRequest::SelectPlayer { id } => state.select_player(&id)?,
        IntentRequest::FieldClicked { x, y } => state.field_clicked(Coordinate::new(x, y))?,
        IntentRequest::ToggleRunning => state.toggle_running(),
        IntentRequest::Reset => state.reset(),
        IntentRequest::Tick => state.tick(),
    }

    Ok(IntentResponse {
        schema_version: SCHEMA_VERSION,
        snapshot: state.snapshot(),
        events: state.drain_events(),
    })
}

/// JSON-in, JSON-out wrapper around [`apply_intent`].
pub fn apply_intent_json(state: &mut MatchState, request_json: &str) -> Result<String> {
    let request: IntentRequest = serde_json::from_str(request_json)?;
    let response = apply_intent(state, request)?;
    serde_json::to_string(&response).map_err(CoreError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_select_then_click_through_json() {
        let mut state = MatchState::new();

        let select = json!({"intent": "select_player", "id": "h4"}).to_string();
        let out = apply_intent_json(&mut state, &select).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        let h4 = parsed["snapshot"]["players"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == "h4")
            .unwrap();
        assert_eq!(h4["selected"], true);

        let click = json!({"intent": "field_clicked", "x": 60.0, "y": 50.0}).to_string();
        let out = apply_intent_json(&mut state, &click).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let h4 = parsed["snapshot"]["players"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == "h4")
            .unwrap();
        assert_eq!(h4["position"]["x"], 60.0);
        // Out of kick range: ball untouched, no events
        assert_eq!(parsed["snapshot"]["ball"]["x"], 50.0);
        assert_eq!(parsed["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_unknown_player_id_is_an_error() {
        let mut state = MatchState::new();
        let request = json!({"intent": "select_player", "id": "h9"}).to_string();
        let err = apply_intent_json(&mut state, &request).unwrap_err();
        assert!(matches!(err, CoreError::PlayerNotFound(_)));
    }

    #[test]
    fn test_unknown_intent_tag_is_rejected() {
        let mut state = MatchState::new();
        let request = json!({"intent": "throw_in"}).to_string();
        let err = apply_intent_json(&mut state, &request).unwrap_err();
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let mut state = MatchState::new();
        let err = apply_intent_json(&mut state, "{oops").unwrap_err();
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }

    #[test]
    fn test_tick_and_toggle_through_json() {
        let mut state = MatchState::new();
        apply_intent(&mut state, IntentRequest::Tick).unwrap();
        assert_eq!(state.clock_seconds(), 0); // paused, tick ignored

        apply_intent(&mut state, IntentRequest::ToggleRunning).unwrap();
        apply_intent(&mut state, IntentRequest::Tick).unwrap();
        let response = apply_intent(&mut state, IntentRequest::Tick).unwrap();
        assert_eq!(response.snapshot.clock_seconds, 2);
        assert!(response.snapshot.running);

        let response = apply_intent(&mut state, IntentRequest::Reset).unwrap();
        assert_eq!(response.snapshot.clock_seconds, 0);
        assert!(!response.snapshot.running);
    }
}
