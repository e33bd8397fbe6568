use std::fmt;

/// Internal engine failures.
///
/// Player-facing validation problems (closed window, missing funds, ...) are
/// reported through outcome values instead; this type is reserved for
/// malformed input at the JSON boundary and broken world invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    InvalidParameter(String),
    NotFound(String),
    InvariantViolation(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            EngineError::NotFound(msg) => write!(f, "Not found: {}", msg),
            EngineError::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
            EngineError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            EngineError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            EngineError::DeserializationError(err.to_string())
        } else {
            EngineError::SerializationError(err.to_string())
        }
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(err: serde_yaml::Error) -> Self {
        EngineError::DeserializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::NotFound("league table for Spain Division 1".to_string());
        assert_eq!(err.to_string(), "Not found: league table for Spain Division 1");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: EngineError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, EngineError::DeserializationError(_)));
    }
}
