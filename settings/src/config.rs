//! Static defaults and runtime configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Network fee used when a wallet carries no explicit fee configuration.
pub const FIXED_DEFAULT_FEE: u64 = 10_000;
/// Gas limit used when a wallet carries no explicit fee configuration.
pub const FIXED_DEFAULT_GAS_LIMIT: u64 = 300_000;

/// Node configuration given to newly created wallets.
pub const DEFAULT_NODE_URL: &str = "https://mainnet.crypto.org";
pub const DEFAULT_INDEXING_URL: &str = "https://crypto.org/explorer/api/v1/";
pub const DEFAULT_CHAIN_ID: &str = "crypto-org-chain-mainnet-1";

/// Literal the user must type before local storage is wiped.
pub const CLEAR_CONFIRMATION_TOKEN: &str = "CLEAR";

/// Delay between deleting local storage and reloading the application.
pub const RELOAD_DELAY: Duration = Duration::from_secs(2);

/// Name of the wallet database file inside the data directory.
pub const DATABASE_FILE: &str = "wallets.json";

/// Runtime configuration for the settings service.
#[derive(Debug, Clone)]
pub struct SettingsConfig {
    /// Directory holding the local wallet database.
    pub data_dir: PathBuf,
    /// Remote wallet service base URL; the local database is used if not set.
    pub service_url: Option<String>,
}

impl SettingsConfig {
    /// Full path of the local wallet database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("wallet-data"),
            service_url: None,
        }
    }
}
