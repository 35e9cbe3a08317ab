use serde::{Deserialize, Serialize};

use crate::config::{FIXED_DEFAULT_FEE, FIXED_DEFAULT_GAS_LIMIT};

/// Node/chain configuration stored with a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    pub node_url: String,
    pub indexing_url: String,
    pub network: NetworkConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<FeeConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub chain_id: String,
}

/// Fee settings. Values are kept as strings, the way they are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<String>,
}

impl WalletConfig {
    /// Network fee in effect, falling back to [`FIXED_DEFAULT_FEE`].
    pub fn network_fee(&self) -> u64 {
        self.fee
            .as_ref()
            .and_then(|f| f.network_fee.as_deref())
            .and_then(parse_fee_value)
            .unwrap_or(FIXED_DEFAULT_FEE)
    }

    /// Gas limit in effect, falling back to [`FIXED_DEFAULT_GAS_LIMIT`].
    pub fn gas_limit(&self) -> u64 {
        self.fee
            .as_ref()
            .and_then(|f| f.gas_limit.as_deref())
            .and_then(parse_fee_value)
            .unwrap_or(FIXED_DEFAULT_GAS_LIMIT)
    }
}

fn parse_fee_value(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(v) if v >= 1 => Some(v),
        _ => {
            tracing::debug!(value = raw, "ignoring unusable stored fee value");
            None
        }
    }
}

/// Wallet record as held by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub config: WalletConfig,
}
