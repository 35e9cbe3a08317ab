use serde::{Deserialize, Serialize};

/// Node config update sent to the wallet service.
///
/// Fee fields are stringified at this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdateRequest {
    pub wallet_id: String,
    pub chain_id: String,
    pub node_url: String,
    pub indexing_url: String,
    pub network_fee: String,
    pub gas_limit: String,
}
