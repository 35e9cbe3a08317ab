//! Wallet service over HTTP/JSON.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Result, SettingsError};
use crate::service::WalletService;
use crate::types::{Session, SettingsUpdateRequest, WalletRecord};

/// HTTP client for a remote wallet service.
///
/// Routes:
/// - `PUT /wallets/{id}/node-config`
/// - `GET /wallets/{id}`
/// - `PUT /session`, `GET /session`
#[derive(Debug, Clone)]
pub struct RemoteWalletService {
    client: Client,
    base: Url,
    base_url: String,
}

impl RemoteWalletService {
    /// Create a client for `base_url`. Fails if it is not an absolute URL
    /// that can carry a path.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        Ok(Self {
            client: Client::new(),
            base,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL extended by `segments`, each percent-encoded as one segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON resource; `Ok(None)` on 404.
    async fn get_optional<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Option<T>> {
        let resp = self.client.get(self.url(path)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_status(resp).await?;
        resp.json::<T>().await.map(Some).map_err(SettingsError::Request)
    }

    /// PUT a JSON body, ignoring the response body.
    async fn put<B: Serialize + ?Sized>(&self, path: &[&str], body: &B) -> Result<()> {
        let resp = self.client.put(self.url(path)).json(body).send().await?;
        check_status(resp).await?;
        Ok(())
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(SettingsError::Http {
        status,
        message: body,
    })
}

impl WalletService for RemoteWalletService {
    async fn update_wallet_node_config(&self, request: &SettingsUpdateRequest) -> Result<()> {
        let path = ["wallets", request.wallet_id.as_str(), "node-config"];
        match self.put(&path, request).await {
            Err(SettingsError::Http { status: 404, .. }) => {
                Err(SettingsError::WalletNotFound(request.wallet_id.clone()))
            }
            other => other,
        }
    }

    async fn find_wallet_by_identifier(&self, identifier: &str) -> Result<WalletRecord> {
        self.get_optional(&["wallets", identifier])
            .await?
            .ok_or_else(|| SettingsError::WalletNotFound(identifier.to_string()))
    }

    async fn set_current_session(&self, session: &Session) -> Result<()> {
        self.put(&["session"], session).await
    }

    async fn current_session(&self) -> Result<Option<Session>> {
        self.get_optional(&["session"]).await
    }
}
