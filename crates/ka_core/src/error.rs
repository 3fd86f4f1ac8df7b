use std::fmt;

#[derive(Debug)]
pub enum CoreError {
    PlayerNotFound(String),
    InvalidIntent(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::PlayerNotFound(id) => write!(f, "Player not found: {}", id),
            CoreError::InvalidIntent(msg) => write!(f, "Invalid intent: {}", msg),
            CoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoreError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::DeserializationError(err.to_string())
        } else {
            CoreError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_player_id() {
        let err = CoreError::PlayerNotFound("h9".to_string());
        assert_eq!(err.to_string(), "Player not found: h9");
    }

    #[test]
    fn test_malformed_json_maps_to_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = CoreError::from(parse_err);
        assert!(matches!(err, CoreError::DeserializationError(_)));
    }
}
