use std::fmt;

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Step of a settings update that ran after the node config was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyStage {
    /// Re-fetching the wallet record.
    Reload,
    /// Installing the refreshed session.
    SessionInstall,
}

impl fmt::Display for ApplyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyStage::Reload => f.write_str("wallet reload"),
            ApplyStage::SessionInstall => f.write_str("session install"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("wallet not found: {0}")]
    WalletNotFound(String),

    #[error("no active wallet session; run `walletctl create <name>` first")]
    NoSession,

    #[error("an update is already in flight")]
    Busy,

    #[error("node config saved but {stage} failed: {source}")]
    PartiallyApplied {
        stage: ApplyStage,
        #[source]
        source: Box<SettingsError>,
    },

    #[error("confirmation does not match, please enter {expected}")]
    ConfirmationMismatch { expected: &'static str },

    #[error("cannot {action} while clear storage is {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SettingsError>;
