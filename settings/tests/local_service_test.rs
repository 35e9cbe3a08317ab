//! Integration tests for the JSON-file wallet service.

use tempfile::TempDir;
use wallet_settings::config::{DEFAULT_CHAIN_ID, DEFAULT_NODE_URL};
use wallet_settings::{
    ConfigForm, ConfigUpdateFlow, FormField, LocalStorage, LocalWalletService, Session,
    SessionStore, SettingsError, SettingsUpdateRequest, UpdateOutcome, WalletDatabase,
    WalletService,
};

fn service(dir: &TempDir) -> LocalWalletService {
    LocalWalletService::new(WalletDatabase::new(dir.path().join("data").join("wallets.json")))
}

fn request(wallet_id: &str) -> SettingsUpdateRequest {
    SettingsUpdateRequest {
        wallet_id: wallet_id.into(),
        chain_id: "testnet-2".into(),
        node_url: "https://node.example.org".into(),
        indexing_url: "https://index.example.org/api".into(),
        network_fee: "20000".into(),
        gas_limit: "400000".into(),
    }
}

#[tokio::test]
async fn test_missing_database_is_empty() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    assert!(svc.list_wallets().await.unwrap().is_empty());
    assert!(svc.current_session().await.unwrap().is_none());
    assert!(matches!(
        svc.find_wallet_by_identifier("nope").await,
        Err(SettingsError::WalletNotFound(_))
    ));
}

#[tokio::test]
async fn test_create_wallet_uses_default_config() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);

    let wallet = svc.create_wallet("main", "cro1xyz").await.unwrap();
    assert_eq!(wallet.identifier.len(), 32);
    assert_eq!(wallet.config.node_url, DEFAULT_NODE_URL);
    assert_eq!(wallet.config.network.chain_id, DEFAULT_CHAIN_ID);
    assert!(wallet.config.fee.is_none());

    let loaded = svc.find_wallet_by_identifier(&wallet.identifier).await.unwrap();
    assert_eq!(loaded, wallet);
}

#[tokio::test]
async fn test_update_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let wallet = service(&dir).create_wallet("main", "").await.unwrap();

    service(&dir)
        .update_wallet_node_config(&request(&wallet.identifier))
        .await
        .unwrap();

    let reloaded = service(&dir)
        .find_wallet_by_identifier(&wallet.identifier)
        .await
        .unwrap();
    assert_eq!(reloaded.config.network.chain_id, "testnet-2");
    assert_eq!(reloaded.config.node_url, "https://node.example.org");
    assert_eq!(reloaded.config.network_fee(), 20_000);
    assert_eq!(reloaded.config.gas_limit(), 400_000);
}

#[tokio::test]
async fn test_update_rejects_unknown_wallet_and_malformed_request() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let wallet = svc.create_wallet("main", "").await.unwrap();

    let err = svc
        .update_wallet_node_config(&request("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, SettingsError::WalletNotFound(id) if id == "missing"));

    let mut bad = request(&wallet.identifier);
    bad.gas_limit = "0".into();
    bad.node_url = String::new();
    let err = svc.update_wallet_node_config(&bad).await.unwrap_err();
    match err {
        SettingsError::Validation(errors) => {
            assert!(errors.get(FormField::GasLimit).is_some());
            assert!(errors.get(FormField::NodeUrl).is_some());
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let untouched = svc.find_wallet_by_identifier(&wallet.identifier).await.unwrap();
    assert_eq!(untouched, wallet);
}

#[tokio::test]
async fn test_session_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let wallet = svc.create_wallet("main", "").await.unwrap();
    let session = Session::new(wallet);

    svc.set_current_session(&session).await.unwrap();

    let restored = service(&dir).current_session().await.unwrap().unwrap();
    assert_eq!(restored, session);
}

#[tokio::test]
async fn test_delete_database_wipes_everything() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let wallet = svc.create_wallet("main", "").await.unwrap();
    svc.set_current_session(&Session::new(wallet)).await.unwrap();
    assert!(svc.database().path().exists());

    svc.delete_database().await.unwrap();

    assert!(!svc.database().path().exists());
    assert!(svc.list_wallets().await.unwrap().is_empty());
    assert!(svc.current_session().await.unwrap().is_none());
    // Deleting again is fine.
    svc.delete_database().await.unwrap();
}

#[tokio::test]
async fn test_update_flow_against_local_database() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir);
    let wallet = svc.create_wallet("main", "").await.unwrap();
    let store = SessionStore::with_session(Session::new(wallet.clone()));
    let flow = ConfigUpdateFlow::new(svc, store);

    let mut form = ConfigForm::initialize(&wallet.config);
    form.set(FormField::GasLimit, "123456");
    let outcome = flow
        .submit(&wallet.config, form.values(), &wallet.identifier)
        .await
        .unwrap();

    let session = match outcome {
        UpdateOutcome::Applied(s) => s,
        UpdateOutcome::Unchanged => panic!("expected update"),
    };
    assert_eq!(session.wallet.config.gas_limit(), 123_456);

    let persisted = service(&dir).current_session().await.unwrap().unwrap();
    assert_eq!(persisted.id, session.id);
    assert_eq!(flow.sessions().get().unwrap().id, session.id);
}
