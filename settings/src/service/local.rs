//! Wallet service over the local JSON database.

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::{DEFAULT_CHAIN_ID, DEFAULT_INDEXING_URL, DEFAULT_NODE_URL};
use crate::error::{Result, SettingsError};
use crate::service::WalletService;
use crate::storage::{LocalStorage, WalletDatabase};
use crate::types::{
    FeeConfig, NetworkConfig, Session, SettingsUpdateRequest, WalletConfig, WalletRecord,
};
use crate::validation::{
    parse_positive_integer, validate_chain_id, validate_url, FieldError, FormField,
    ValidationErrors,
};

/// Wallet service backed by a [`WalletDatabase`] file.
///
/// Read-modify-write cycles are serialized by an internal lock.
#[derive(Debug)]
pub struct LocalWalletService {
    db: WalletDatabase,
    lock: Mutex<()>,
}

impl LocalWalletService {
    pub fn new(db: WalletDatabase) -> Self {
        Self {
            db,
            lock: Mutex::new(()),
        }
    }

    pub fn database(&self) -> &WalletDatabase {
        &self.db
    }

    /// Create a wallet with the default node configuration.
    pub async fn create_wallet(&self, name: &str, address: &str) -> Result<WalletRecord> {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.db.load().await?;

        let wallet = WalletRecord {
            identifier: hex::encode(rand::random::<[u8; 16]>()),
            name: name.to_string(),
            address: address.to_string(),
            config: WalletConfig {
                node_url: DEFAULT_NODE_URL.to_string(),
                indexing_url: DEFAULT_INDEXING_URL.to_string(),
                network: NetworkConfig {
                    chain_id: DEFAULT_CHAIN_ID.to_string(),
                },
                fee: None,
            },
        };
        snapshot.wallets.push(wallet.clone());
        self.db.save(&snapshot).await?;

        info!(wallet = %wallet.identifier, name, "wallet created");
        Ok(wallet)
    }

    /// All stored wallets.
    pub async fn list_wallets(&self) -> Result<Vec<WalletRecord>> {
        Ok(self.db.load().await?.wallets)
    }
}

/// Reject requests the form layer should never have produced.
fn check_request(request: &SettingsUpdateRequest) -> std::result::Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [
        validate_url(FormField::NodeUrl, &request.node_url),
        validate_url(FormField::IndexingUrl, &request.indexing_url),
        validate_chain_id(&request.chain_id),
        parse_positive_integer(FormField::NetworkFee, &request.network_fee).map(|_| ()),
        parse_positive_integer(FormField::GasLimit, &request.gas_limit).map(|_| ()),
    ]
    .into_iter()
    .filter_map(|r| r.err())
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

impl WalletService for LocalWalletService {
    async fn update_wallet_node_config(&self, request: &SettingsUpdateRequest) -> Result<()> {
        check_request(request)?;

        let _guard = self.lock.lock().await;
        let mut snapshot = self.db.load().await?;
        let wallet = snapshot
            .wallet_mut(&request.wallet_id)
            .ok_or_else(|| SettingsError::WalletNotFound(request.wallet_id.clone()))?;

        wallet.config.node_url = request.node_url.clone();
        wallet.config.indexing_url = request.indexing_url.clone();
        wallet.config.network.chain_id = request.chain_id.clone();
        wallet.config.fee = Some(FeeConfig {
            network_fee: Some(request.network_fee.clone()),
            gas_limit: Some(request.gas_limit.clone()),
        });

        self.db.save(&snapshot).await?;
        debug!(wallet = %request.wallet_id, "node config persisted");
        Ok(())
    }

    async fn find_wallet_by_identifier(&self, identifier: &str) -> Result<WalletRecord> {
        let snapshot = self.db.load().await?;
        snapshot
            .wallet(identifier)
            .cloned()
            .ok_or_else(|| SettingsError::WalletNotFound(identifier.to_string()))
    }

    async fn set_current_session(&self, session: &Session) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut snapshot = self.db.load().await?;
        snapshot.current_session = Some(session.clone());
        self.db.save(&snapshot).await
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.db.load().await?.current_session)
    }
}

impl LocalStorage for LocalWalletService {
    async fn delete_database(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.db.delete().await?;
        info!(path = %self.db.path().display(), "local wallet database deleted");
        Ok(())
    }
}
