//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ReactionType;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid user_status event: {0}")]
    InvalidEvent(String),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Emoji Resolution Errors
    // =========================================================================
    #[error("Unknown emoji: {name}")]
    UnknownEmoji { name: String },

    #[error("Unknown {reaction_type} emoji code: {code}")]
    UnknownEmojiCode {
        reaction_type: ReactionType,
        code: String,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Transport error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    TransportError {
        status: Option<u16>,
        message: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and API-style reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEvent(_) => "INVALID_EVENT",
            Self::InvalidUserId(_) => "INVALID_USER_ID",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownEmoji { .. } => "UNKNOWN_EMOJI",
            Self::UnknownEmojiCode { .. } => "UNKNOWN_EMOJI_CODE",
            Self::TransportError { .. } => "TRANSPORT_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEvent(_) | Self::InvalidUserId(_) | Self::ValidationError(_)
        )
    }

    /// Check if this is an emoji resolution error
    pub fn is_unknown_emoji(&self) -> bool {
        matches!(self, Self::UnknownEmoji { .. } | Self::UnknownEmojiCode { .. })
    }

    /// Check if this came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError { .. })
    }

    /// Create a transport error
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::TransportError {
            status,
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}
