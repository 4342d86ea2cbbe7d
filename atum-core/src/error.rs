//! Error types for Atum core.

use std::{error::Error, fmt};

/// Error type for Atum core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtumError {
    /// The generative backend could not be reached or rejected the request.
    Unavailable(String),
    /// The generative backend answered with blank text.
    EmptyResponse,
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for AtumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "generator unavailable: {message}"),
            Self::EmptyResponse => write!(f, "empty response"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for AtumError {}

impl From<serde_json::Error> for AtumError {
    fn from(value: serde_json::Error) -> Self {
        Self::Other(format!("json error: {value}"))
    }
}

/// Convenience result type for Atum core.
pub type Result<T> = std::result::Result<T, AtumError>;

#[cfg(test)]
mod tests {
    use super::AtumError;

    #[test]
    fn unavailable_error_formats_message() {
        let error = AtumError::Unavailable("connection refused".to_string());
        assert_eq!(
            format!("{error}"),
            "generator unavailable: connection refused"
        );
    }

    #[test]
    fn empty_response_formats_message() {
        assert_eq!(format!("{}", AtumError::EmptyResponse), "empty response");
    }

    #[test]
    fn other_error_formats_message() {
        let error = AtumError::Other("atum failed".to_string());
        assert_eq!(format!("{error}"), "atum failed");
    }

    #[test]
    fn from_json_error_maps_variant() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("bad json");
        let error: AtumError = parse_error.into();
        match error {
            AtumError::Other(message) => assert!(message.starts_with("json error")),
            other => panic!("expected Other variant, got {other:?}"),
        }
    }
}
