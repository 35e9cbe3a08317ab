//! Integration tests for the HTTP wallet service against a mock server.

mod common;

use common::*;
use serde_json::json;
use wallet_settings::{
    RemoteWalletService, Session, SettingsError, SettingsUpdateRequest, WalletService,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wallet_json() -> serde_json::Value {
    json!({
        "identifier": WALLET_ID,
        "name": "main",
        "address": "cro1abc",
        "config": {
            "nodeUrl": "http://a.com",
            "indexingUrl": "http://b.com",
            "network": { "chainId": "1" },
            "fee": { "networkFee": "5000", "gasLimit": "300000" }
        }
    })
}

#[test]
fn test_rejects_relative_base_url() {
    assert!(matches!(
        RemoteWalletService::new("wallets.local"),
        Err(SettingsError::InvalidUrl(_))
    ));
    assert!(matches!(
        RemoteWalletService::new("mailto:ops@wallets.local"),
        Err(SettingsError::InvalidUrl(_))
    ));
    let svc = RemoteWalletService::new("http://127.0.0.1:9000/").unwrap();
    assert_eq!(svc.base_url(), "http://127.0.0.1:9000");
}

#[tokio::test]
async fn test_update_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/wallets/{WALLET_ID}/node-config")))
        .and(body_json(json!({
            "walletId": WALLET_ID,
            "chainId": "2",
            "nodeUrl": "http://a.com",
            "indexingUrl": "http://b.com",
            "networkFee": "5000",
            "gasLimit": "300000"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    svc.update_wallet_node_config(&SettingsUpdateRequest {
        wallet_id: WALLET_ID.into(),
        chain_id: "2".into(),
        node_url: "http://a.com".into(),
        indexing_url: "http://b.com".into(),
        network_fee: "5000".into(),
        gas_limit: "300000".into(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_update_maps_errors() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wallets/missing/node-config"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/wallets/{WALLET_ID}/node-config")))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad gas limit"))
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    let mut req = SettingsUpdateRequest {
        wallet_id: "missing".into(),
        chain_id: "1".into(),
        node_url: "http://a.com".into(),
        indexing_url: "http://b.com".into(),
        network_fee: "1".into(),
        gas_limit: "1".into(),
    };
    let err = svc.update_wallet_node_config(&req).await.unwrap_err();
    assert!(matches!(err, SettingsError::WalletNotFound(id) if id == "missing"));

    req.wallet_id = WALLET_ID.into();
    let err = svc.update_wallet_node_config(&req).await.unwrap_err();
    match err {
        SettingsError::Http { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad gas limit");
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_find_wallet() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{WALLET_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    let wallet = svc.find_wallet_by_identifier(WALLET_ID).await.unwrap();
    assert_eq!(wallet, scenario_wallet());

    let err = svc.find_wallet_by_identifier("other").await.unwrap_err();
    assert!(matches!(err, SettingsError::WalletNotFound(id) if id == "other"));
}

#[tokio::test]
async fn test_wallet_id_is_one_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wallets/team%2Fa%3Fb%23c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(wallet_json()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/wallets/team%2Fa%3Fb%23c/node-config"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    let wallet = svc.find_wallet_by_identifier("team/a?b#c").await.unwrap();
    assert_eq!(wallet, scenario_wallet());

    let request = SettingsUpdateRequest {
        wallet_id: "team/a?b#c".into(),
        chain_id: "1".into(),
        node_url: "http://a.com".into(),
        indexing_url: "http://b.com".into(),
        network_fee: "5000".into(),
        gas_limit: "300000".into(),
    };
    svc.update_wallet_node_config(&request).await.unwrap();
}

#[tokio::test]
async fn test_base_path_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/session"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&format!("{}/api/", server.uri())).unwrap();
    assert!(svc.current_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_install_and_restore() {
    let server = MockServer::start().await;
    let session = Session::new(scenario_wallet());
    let body = serde_json::to_value(&session).unwrap();

    Mock::given(method("PUT"))
        .and(path("/session"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    svc.set_current_session(&session).await.unwrap();
    let restored = svc.current_session().await.unwrap().unwrap();
    assert_eq!(restored, session);
}

#[tokio::test]
async fn test_no_session_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let svc = RemoteWalletService::new(&server.uri()).unwrap();
    assert!(svc.current_session().await.unwrap().is_none());
}
