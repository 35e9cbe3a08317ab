//! Local wallet database: a single JSON document on disk.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::types::{Session, WalletRecord};

/// Local persisted storage that can be wiped as a whole.
pub trait LocalStorage: Send + Sync {
    /// Irreversibly delete the entire local database.
    fn delete_database(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Everything kept in the wallet database file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSnapshot {
    #[serde(default)]
    pub wallets: Vec<WalletRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_session: Option<Session>,
}

impl DatabaseSnapshot {
    pub fn wallet(&self, identifier: &str) -> Option<&WalletRecord> {
        self.wallets.iter().find(|w| w.identifier == identifier)
    }

    pub fn wallet_mut(&mut self, identifier: &str) -> Option<&mut WalletRecord> {
        self.wallets.iter_mut().find(|w| w.identifier == identifier)
    }
}

/// File-backed wallet database.
#[derive(Debug, Clone)]
pub struct WalletDatabase {
    path: PathBuf,
}

impl WalletDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the database. A missing file is an empty database.
    pub async fn load(&self) -> Result<DatabaseSnapshot> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DatabaseSnapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the database atomically (temp file, then rename).
    pub async fn save(&self, snapshot: &DatabaseSnapshot) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), wallets = snapshot.wallets.len(), "database saved");
        Ok(())
    }

    /// Remove the database file. Deleting a missing database succeeds.
    pub async fn delete(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
