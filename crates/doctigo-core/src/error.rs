//! Error types for the Doctigo booking core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inventory::BedType;

/// A shared error type for the booking core.
///
/// The first four variants form the failure taxonomy of the conversation
/// flow; the remaining variants cover configuration and serialization
/// plumbing with automatic conversion via `From`.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BookingError {
    /// Malformed or out-of-order user input. Recovered locally by
    /// re-prompting; the session state is left unchanged.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No free unit of the requested bed type. Recovered locally by
    /// re-prompting the bed step.
    #[error("No {bed_type} available at {hospital}")]
    InventoryExhausted { hospital: String, bed_type: BedType },

    /// An external collaborator (e.g. the vitals provider) failed.
    /// Degrades the flow, never blocks it.
    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// A programming-contract breach (e.g. assembling an appointment
    /// outside the terminal step). Fatal; surfaced to the caller.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },
}

impl BookingError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an InventoryExhausted error
    pub fn exhausted(hospital: impl Into<String>, bed_type: BedType) -> Self {
        Self::InventoryExhausted {
            hospital: hospital.into(),
            bed_type,
        }
    }

    /// Creates a CollaboratorUnavailable error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::CollaboratorUnavailable(message.into())
    }

    /// Creates an InvariantViolation error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an InventoryExhausted error
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::InventoryExhausted { .. })
    }

    /// Check if the flow can recover from this error by waiting for the
    /// next user event.
    ///
    /// Validation, exhaustion and collaborator failures are recoverable;
    /// invariant violations and plumbing errors are not.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InventoryExhausted { .. } | Self::CollaboratorUnavailable(_)
        )
    }
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for BookingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, BookingError>`.
pub type Result<T> = std::result::Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        assert!(BookingError::validation("empty name").is_recoverable());
        assert!(BookingError::exhausted("City Hospital", BedType::VipCabin).is_recoverable());
        assert!(BookingError::collaborator("vitals down").is_recoverable());
        assert!(!BookingError::invariant("build outside terminal step").is_recoverable());
        assert!(!BookingError::config("bad stock table").is_recoverable());
    }

    #[test]
    fn test_exhausted_message_names_hospital_and_type() {
        let err = BookingError::exhausted("Munni Medical Hall", BedType::GeneralCabin);
        let message = err.to_string();
        assert!(message.contains("Munni Medical Hall"));
        assert!(message.contains("General Cabin"));
    }
}
