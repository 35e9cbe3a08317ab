//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use wallet_settings::{
    FeeConfig, NetworkConfig, Result, Session, SettingsError, SettingsUpdateRequest,
    WalletConfig, WalletRecord, WalletService,
};

pub const WALLET_ID: &str = "wallet-1";

/// Config from the reference scenario.
pub fn scenario_config() -> WalletConfig {
    WalletConfig {
        node_url: "http://a.com".into(),
        indexing_url: "http://b.com".into(),
        network: NetworkConfig {
            chain_id: "1".into(),
        },
        fee: Some(FeeConfig {
            network_fee: Some("5000".into()),
            gas_limit: Some("300000".into()),
        }),
    }
}

pub fn scenario_wallet() -> WalletRecord {
    WalletRecord {
        identifier: WALLET_ID.into(),
        name: "main".into(),
        address: "cro1abc".into(),
        config: scenario_config(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Update(SettingsUpdateRequest),
    Find(String),
    SetSession(String),
}

/// Which service call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nothing,
    Update,
    Find,
    SetSession,
}

/// In-memory wallet service that records every call.
pub struct RecordingService {
    wallet: Mutex<WalletRecord>,
    calls: Mutex<Vec<Call>>,
    fail_at: FailAt,
}

impl RecordingService {
    pub fn new(wallet: WalletRecord) -> Self {
        Self::failing(wallet, FailAt::Nothing)
    }

    pub fn failing(wallet: WalletRecord, fail_at: FailAt) -> Self {
        Self {
            wallet: Mutex::new(wallet),
            calls: Mutex::new(Vec::new()),
            fail_at,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn wallet(&self) -> WalletRecord {
        self.wallet.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail(what: &str) -> SettingsError {
        SettingsError::Http {
            status: 500,
            message: format!("{what} failed"),
        }
    }
}

impl WalletService for RecordingService {
    async fn update_wallet_node_config(&self, request: &SettingsUpdateRequest) -> Result<()> {
        self.record(Call::Update(request.clone()));
        if self.fail_at == FailAt::Update {
            return Err(Self::fail("update"));
        }
        let mut wallet = self.wallet.lock().unwrap();
        if wallet.identifier != request.wallet_id {
            return Err(SettingsError::WalletNotFound(request.wallet_id.clone()));
        }
        wallet.config.node_url = request.node_url.clone();
        wallet.config.indexing_url = request.indexing_url.clone();
        wallet.config.network.chain_id = request.chain_id.clone();
        wallet.config.fee = Some(FeeConfig {
            network_fee: Some(request.network_fee.clone()),
            gas_limit: Some(request.gas_limit.clone()),
        });
        Ok(())
    }

    async fn find_wallet_by_identifier(&self, identifier: &str) -> Result<WalletRecord> {
        self.record(Call::Find(identifier.to_string()));
        if self.fail_at == FailAt::Find {
            return Err(Self::fail("find"));
        }
        Ok(self.wallet())
    }

    async fn set_current_session(&self, session: &Session) -> Result<()> {
        self.record(Call::SetSession(session.id.clone()));
        if self.fail_at == FailAt::SetSession {
            return Err(Self::fail("set session"));
        }
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        Ok(None)
    }
}
