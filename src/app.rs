//! Application context: the wallet service backend plus the active session.

use tracing::info;
use wallet_settings::{
    AppReloader, LocalWalletService, RemoteWalletService, Result, Session, SessionStore,
    SettingsConfig, SettingsUpdateRequest, WalletDatabase, WalletRecord, WalletService,
};

/// Wallet service selected by configuration.
pub enum Backend {
    Local(LocalWalletService),
    Remote(RemoteWalletService),
}

impl Backend {
    pub fn from_config(config: &SettingsConfig) -> Result<Self> {
        match &config.service_url {
            Some(url) => {
                info!(url = %url, "using remote wallet service");
                Ok(Backend::Remote(RemoteWalletService::new(url)?))
            }
            None => {
                info!(path = %config.database_path().display(), "using local wallet database");
                Ok(Backend::Local(local_storage(config)))
            }
        }
    }
}

impl WalletService for Backend {
    async fn update_wallet_node_config(&self, request: &SettingsUpdateRequest) -> Result<()> {
        match self {
            Backend::Local(s) => s.update_wallet_node_config(request).await,
            Backend::Remote(s) => s.update_wallet_node_config(request).await,
        }
    }

    async fn find_wallet_by_identifier(&self, identifier: &str) -> Result<WalletRecord> {
        match self {
            Backend::Local(s) => s.find_wallet_by_identifier(identifier).await,
            Backend::Remote(s) => s.find_wallet_by_identifier(identifier).await,
        }
    }

    async fn set_current_session(&self, session: &Session) -> Result<()> {
        match self {
            Backend::Local(s) => s.set_current_session(session).await,
            Backend::Remote(s) => s.set_current_session(session).await,
        }
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        match self {
            Backend::Local(s) => s.current_session().await,
            Backend::Remote(s) => s.current_session().await,
        }
    }
}

/// Local database under the data dir. Nothing is read until a service
/// call needs it.
pub fn local_storage(config: &SettingsConfig) -> LocalWalletService {
    LocalWalletService::new(WalletDatabase::new(config.database_path()))
}

/// Restore the last installed session into a fresh store.
pub async fn restore_sessions(backend: &Backend) -> Result<SessionStore> {
    let store = SessionStore::new();
    if let Some(session) = backend.current_session().await? {
        info!(wallet = %session.wallet.identifier, "session restored");
        store.set(session);
    }
    Ok(store)
}

/// Reload after local storage is wiped: every in-memory session is dropped
/// so nothing refers to the deleted database.
pub struct Restart {
    pub sessions: SessionStore,
}

impl AppReloader for Restart {
    async fn reload_to_root(&self) {
        self.sessions.clear();
        info!("application state reset");
    }
}
