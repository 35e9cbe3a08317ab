//! Clear-storage confirmation gate.
//!
//! ```text
//! Closed --open--> Warning{ack=false} --set_acknowledged(true)--> Warning{ack=true}
//!   ^                                                                   |
//!   |                                                           confirm_warning
//!   |                                                                   v
//!   +--cancel (any state)--  Done <--execute-- Executing <--execute-- TypeConfirm{typed}
//! ```

use std::future::Future;

use tracing::{info, warn};

use crate::config::{CLEAR_CONFIRMATION_TOKEN, RELOAD_DELAY};
use crate::error::{Result, SettingsError};
use crate::storage::LocalStorage;

/// Restarts the application after local storage is gone.
pub trait AppReloader: Send + Sync {
    /// Navigate to the application root and fully reload, dropping all
    /// in-memory state.
    fn reload_to_root(&self) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClearStorageState {
    #[default]
    Closed,
    /// Risk warning shown; the confirm action is enabled once acknowledged.
    Warning { acknowledged: bool },
    /// Waiting for the user to type the confirmation token.
    TypeConfirm { typed: String },
    Executing,
    Done,
}

impl ClearStorageState {
    pub fn name(&self) -> &'static str {
        match self {
            ClearStorageState::Closed => "closed",
            ClearStorageState::Warning { .. } => "warning",
            ClearStorageState::TypeConfirm { .. } => "type-confirm",
            ClearStorageState::Executing => "executing",
            ClearStorageState::Done => "done",
        }
    }
}

/// Two-stage confirmation in front of the local storage wipe.
#[derive(Debug, Default)]
pub struct ClearStorageFlow {
    state: ClearStorageState,
}

impl ClearStorageFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ClearStorageState {
        &self.state
    }

    /// Whether the confirmation dialog is showing.
    pub fn is_open(&self) -> bool {
        matches!(
            self.state,
            ClearStorageState::Warning { .. } | ClearStorageState::TypeConfirm { .. }
        )
    }

    pub fn can_confirm_warning(&self) -> bool {
        matches!(self.state, ClearStorageState::Warning { acknowledged: true })
    }

    pub fn can_execute(&self) -> bool {
        matches!(
            &self.state,
            ClearStorageState::TypeConfirm { typed } if typed == CLEAR_CONFIRMATION_TOKEN
        )
    }

    fn invalid(&self, action: &'static str) -> SettingsError {
        SettingsError::InvalidTransition {
            state: self.state.name(),
            action,
        }
    }

    /// Open the dialog on the risk warning.
    pub fn open(&mut self) -> Result<()> {
        match self.state {
            ClearStorageState::Closed => {
                self.state = ClearStorageState::Warning {
                    acknowledged: false,
                };
                Ok(())
            }
            _ => Err(self.invalid("open")),
        }
    }

    pub fn set_acknowledged(&mut self, acknowledged: bool) -> Result<()> {
        match self.state {
            ClearStorageState::Warning { .. } => {
                self.state = ClearStorageState::Warning { acknowledged };
                Ok(())
            }
            _ => Err(self.invalid("acknowledge")),
        }
    }

    /// Move past the warning. Only allowed once the risk is acknowledged.
    pub fn confirm_warning(&mut self) -> Result<()> {
        if !self.can_confirm_warning() {
            return Err(self.invalid("confirm"));
        }
        self.state = ClearStorageState::TypeConfirm {
            typed: String::new(),
        };
        Ok(())
    }

    /// Record the text typed into the confirmation field.
    pub fn set_typed(&mut self, value: &str) -> Result<()> {
        if let ClearStorageState::TypeConfirm { typed } = &mut self.state {
            *typed = value.to_string();
            return Ok(());
        }
        Err(self.invalid("type confirmation"))
    }

    /// Close the dialog and discard all confirmation state.
    pub fn cancel(&mut self) {
        self.state = ClearStorageState::Closed;
    }

    /// Wipe local storage, wait [`RELOAD_DELAY`], then reload to the root.
    ///
    /// Deletion is best effort: a failure is logged and the reload still
    /// happens.
    ///
    /// # Errors
    ///
    /// [`SettingsError::ConfirmationMismatch`] if the typed value is not the
    /// confirmation token (the flow stays on the confirmation step), or
    /// [`SettingsError::InvalidTransition`] outside the confirmation step.
    pub async fn execute<L, R>(&mut self, storage: &L, reloader: &R) -> Result<()>
    where
        L: LocalStorage,
        R: AppReloader,
    {
        match &self.state {
            ClearStorageState::TypeConfirm { typed } if typed == CLEAR_CONFIRMATION_TOKEN => {}
            ClearStorageState::TypeConfirm { .. } => {
                return Err(SettingsError::ConfirmationMismatch {
                    expected: CLEAR_CONFIRMATION_TOKEN,
                })
            }
            _ => return Err(self.invalid("clear storage")),
        }

        self.state = ClearStorageState::Executing;
        info!("clearing local storage");
        if let Err(e) = storage.delete_database().await {
            warn!(error = %e, "local storage deletion failed");
        }

        tokio::time::sleep(RELOAD_DELAY).await;
        reloader.reload_to_root().await;

        self.state = ClearStorageState::Done;
        Ok(())
    }
}
