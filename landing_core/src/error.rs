//! Error types shared by the REST client, session storage and join flow.

use thiserror::Error;

use crate::join::JoinRejection;

/// Errors raised while talking to the landing API or the session store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
    /// The request never produced an HTTP response
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        endpoint: &'static str,
        message: String,
    },

    /// The server answered with a non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// The body could not be decoded into the expected view-model
    #[error("malformed {endpoint} payload: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },

    /// `304 Not Modified` arrived but no cached page is held
    #[error("landing page not modified but no cached copy is held")]
    NotModified,

    /// Session storage rejected a read or write
    #[error("session storage unavailable: {0}")]
    Storage(String),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LandingError {
    pub(crate) fn transport(endpoint: &'static str, err: impl std::fmt::Display) -> Self {
        LandingError::Transport {
            endpoint,
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(endpoint: &'static str, err: impl std::fmt::Display) -> Self {
        LandingError::Decode {
            endpoint,
            message: err.to_string(),
        }
    }
}

/// Errors surfaced inline by the email join form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Client-side validation refused the input
    #[error("{0}")]
    Invalid(JoinRejection),

    /// The server accepted the request but declined the signup
    #[error("{0}")]
    Rejected(String),

    /// Transport or status failure
    #[error("join request failed: {0}")]
    Failed(#[from] LandingError),
}

impl JoinError {
    /// Message shown under the form, `None` when the failure must stay silent.
    pub fn user_message(&self) -> Option<String> {
        match self {
            JoinError::Invalid(rejection) => rejection.user_message().map(str::to_owned),
            JoinError::Rejected(message) if !message.trim().is_empty() => Some(message.clone()),
            JoinError::Rejected(_) | JoinError::Failed(_) => {
                Some("Something went wrong. Please try again.".to_owned())
            }
        }
    }
}
