//! Wallet service collaborators.
//!
//! [`WalletService`] is the contract both settings workflows are written
//! against. Two backends implement it: [`LocalWalletService`] over the JSON
//! wallet database, and [`RemoteWalletService`] over HTTP.

pub mod local;
pub mod remote;

use std::future::Future;

use crate::error::Result;
use crate::types::{Session, SettingsUpdateRequest, WalletRecord};

pub use local::LocalWalletService;
pub use remote::RemoteWalletService;

pub trait WalletService: Send + Sync {
    /// Persist node/chain/fee configuration for `request.wallet_id`.
    ///
    /// Fails if the wallet is unknown or the request is malformed.
    fn update_wallet_node_config(
        &self,
        request: &SettingsUpdateRequest,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Load a wallet record. Fails with `WalletNotFound` if there is none.
    fn find_wallet_by_identifier(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<WalletRecord>> + Send;

    /// Install `session` as the process-wide active session.
    fn set_current_session(&self, session: &Session) -> impl Future<Output = Result<()>> + Send;

    /// The session installed last, if any.
    fn current_session(&self) -> impl Future<Output = Result<Option<Session>>> + Send;
}
