//! Error types for the Voyageur application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Voyageur application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum VoyageurError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid or missing user input for a single field
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Multiple errors
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<VoyageurError>),
}

impl VoyageurError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
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

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a validation error.
    ///
    /// Returns true for a single `Validation` error and for a `Multiple`
    /// that contains at least one `Validation` error, which is how form
    /// validation reports all failing fields at once.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation { .. } => true,
            Self::Multiple(errors) => errors.iter().any(|e| e.is_validation()),
            _ => false,
        }
    }

    /// Collects the field-level messages of all contained validation errors.
    ///
    /// Used by callers that surface inline per-field messages. Non-validation
    /// errors contribute nothing.
    pub fn validation_messages(&self) -> Vec<(String, String)> {
        match self {
            Self::Validation { field, message } => vec![(field.clone(), message.clone())],
            Self::Multiple(errors) => errors
                .iter()
                .flat_map(|e| e.validation_messages())
                .collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for VoyageurError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for VoyageurError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for VoyageurError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for VoyageurError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for VoyageurError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for VoyageurError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, VoyageurError>`.
pub type Result<T> = std::result::Result<T, VoyageurError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_validation_flattens_multiple() {
        let err = VoyageurError::Multiple(vec![
            VoyageurError::validation("source", "Source is required"),
            VoyageurError::validation("endDate", "End date is required"),
        ]);
        assert!(err.is_validation());

        let messages = err.validation_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].0, "source");
    }

    #[test]
    fn test_non_validation_has_no_messages() {
        let err = VoyageurError::data_access("read failed");
        assert!(!err.is_validation());
        assert!(err.validation_messages().is_empty());
    }
}
