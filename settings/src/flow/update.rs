//! Node configuration update: validate, diff, persist, refresh the session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ApplyStage, Result, SettingsError};
use crate::form::ConfigFormValues;
use crate::service::WalletService;
use crate::session::SessionStore;
use crate::types::{Session, WalletConfig};

/// Result of a submission.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// Nothing differed from the loaded configuration; no call was made.
    Unchanged,
    /// The update was persisted and this session is now active.
    Applied(Arc<Session>),
}

/// Applies edited node configuration through a [`WalletService`].
pub struct ConfigUpdateFlow<S> {
    service: S,
    sessions: SessionStore,
    loading: AtomicBool,
}

/// Clears the loading flag when dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: WalletService> ConfigUpdateFlow<S> {
    pub fn new(service: S, sessions: SessionStore) -> Self {
        Self {
            service,
            sessions,
            loading: AtomicBool::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// True while a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Submit `edited` against the loaded `current` configuration.
    ///
    /// Calls persist, reload and session install strictly in that order.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::Busy`] if another submission is in flight.
    /// - [`SettingsError::Validation`] if any field is invalid.
    /// - The service error as-is if persisting fails.
    /// - [`SettingsError::PartiallyApplied`] if persisting succeeded but the
    ///   reload or session install failed. The session store is untouched.
    pub async fn submit(
        &self,
        current: &WalletConfig,
        edited: &ConfigFormValues,
        wallet_id: &str,
    ) -> Result<UpdateOutcome> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SettingsError::Busy);
        }
        let _loading = LoadingGuard(&self.loading);

        edited.validate()?;

        if edited.matches(current) {
            debug!(wallet = wallet_id, "node config unchanged, skipping update");
            return Ok(UpdateOutcome::Unchanged);
        }

        let request = edited.to_update_request(wallet_id);
        self.service.update_wallet_node_config(&request).await?;

        let wallet = self
            .service
            .find_wallet_by_identifier(wallet_id)
            .await
            .map_err(|e| partially_applied(wallet_id, ApplyStage::Reload, e))?;

        let session = Session::new(wallet);
        self.service
            .set_current_session(&session)
            .await
            .map_err(|e| partially_applied(wallet_id, ApplyStage::SessionInstall, e))?;

        let session = self.sessions.set(session);
        info!(
            wallet = wallet_id,
            session = %session.id,
            chain_id = %request.chain_id,
            node_url = %request.node_url,
            "node config updated"
        );
        Ok(UpdateOutcome::Applied(session))
    }
}

fn partially_applied(wallet_id: &str, stage: ApplyStage, source: SettingsError) -> SettingsError {
    warn!(
        wallet = wallet_id,
        %stage,
        error = %source,
        "node config saved but session was not refreshed"
    );
    SettingsError::PartiallyApplied {
        stage,
        source: Box::new(source),
    }
}
