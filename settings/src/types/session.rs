use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::WalletRecord;

/// Active wallet session.
///
/// Each session carries a fresh random `id`; replacing the session is how a
/// configuration change becomes visible to the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub wallet: WalletRecord,
}

impl Session {
    pub fn new(wallet: WalletRecord) -> Self {
        Self {
            id: hex::encode(rand::random::<[u8; 16]>()),
            created_at: Utc::now(),
            wallet,
        }
    }
}
