//! Error types for roomnet
//!
//! Only mutators and configuration handling return errors. Queries
//! (traversals, shortest paths, spanning trees, connectivity) degrade to
//! empty results or an infinite weight instead.

mod macros;

use thiserror::Error;

/// Errors that can occur during roomnet operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// A required value is missing or malformed. Programmer error, never
    /// recovered internally.
    #[error("invalid {context}: {value}")]
    InvalidArgument { context: String, value: String },

    /// The operation targets a vertex that is not in the graph
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    /// The operation requires at least one element and there is none
    #[error("{context} is empty")]
    EmptyCollection { context: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl GraphError {
    /// Create an error for an invalid argument or configuration value
    pub fn invalid_argument(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidArgument {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an operation on an empty collection
    pub fn empty_collection(context: &str) -> Self {
        GraphError::EmptyCollection {
            context: context.to_string(),
        }
    }

    /// Whether the caller can reasonably recover from this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraphError::NotFound { .. } | GraphError::EmptyCollection { .. }
        )
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidArgument { .. } => "invalid_argument",
            GraphError::NotFound { .. } => "not_found",
            GraphError::EmptyCollection { .. } => "empty_collection",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::TomlSerialize(_) => "toml_serialize_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "type": self.error_type(),
                "recoverable": self.is_recoverable(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roomnet operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::invalid_argument("edge weight", -1.0);
        assert_eq!(err.to_string(), "invalid edge weight: -1");

        let err = GraphError::not_found("vertex", "\"Kitchen\"");
        assert_eq!(err.to_string(), "vertex not found: \"Kitchen\"");

        let err = GraphError::empty_collection("graph");
        assert_eq!(err.to_string(), "graph is empty");
    }

    #[test]
    fn test_recoverable_kinds() {
        assert!(!GraphError::invalid_argument("edge weight", "NaN").is_recoverable());
        assert!(GraphError::not_found("vertex", "x").is_recoverable());
        assert!(GraphError::empty_collection("graph").is_recoverable());
        let io = std::io::Error::other("disk");
        assert!(!GraphError::from(io).is_recoverable());
    }

    #[test]
    fn test_to_json() {
        let json = GraphError::not_found("vertex", "Hall").to_json();
        assert_eq!(json["error"]["type"], "not_found");
        assert_eq!(json["error"]["recoverable"], true);
        assert_eq!(json["error"]["message"], "vertex not found: Hall");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GraphError = io.into();
        assert_eq!(err.error_type(), "io_error");
    }
}
