//! Error types for the roster dashboard.

use serde::Serialize;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// A shared error type for every roster crate.
///
/// The three user-facing families are `Fetch` (remote roster load failed),
/// `Storage` (persisted state could not be read or written) and `Validation`
/// (a form submission was rejected). The remaining variants describe the
/// plumbing failures those families are built from.
#[derive(Error, Debug, Clone, Serialize)]
pub enum RosterError {
    /// Remote roster load failed or returned an unparsable payload
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Durable local storage read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Form input rejected, one message per offending field
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the per-field messages when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RosterError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for RosterError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, RosterError>`.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = RosterError::fetch("connection refused");
        assert!(err.is_fetch());
        assert_eq!(err.to_string(), "Fetch error: connection refused");
    }

    #[test]
    fn test_not_found_display() {
        let err = RosterError::not_found("employee", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: employee '42'");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RosterError = json_err.into();
        assert!(matches!(err, RosterError::Serialization { ref format, .. } if format == "JSON"));
    }

    #[test]
    fn test_validation_errors_accessor() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        let err: RosterError = errors.into();
        assert!(err.is_validation());
        assert_eq!(
            err.validation_errors().and_then(|e| e.get("email")),
            Some("Email is required")
        );
        assert!(RosterError::storage("quota").validation_errors().is_none());
    }
}
