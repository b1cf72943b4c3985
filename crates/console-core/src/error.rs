//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid value for {attribute}: {value}")]
    InvalidValue { attribute: String, value: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition { action: &'static str, state: &'static str },

    #[error("File rejected: {0}")]
    FileRejected(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Message suitable for a user-facing notice.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::Api { message, .. } if !message.is_empty() => message.clone(),
            DomainError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            DomainError::NotAuthenticated => "Your session has ended. Please sign in again.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            DomainError::NotAuthenticated | DomainError::Api { status: 401, .. }
        )
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
