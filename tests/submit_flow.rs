//! End-to-end transaction submission against a mock router.

use alloy::primitives::Signature;
use serde_json::Value;

use halo_client::client::ClientError;
use halo_client::config::RouterConfig;
use halo_client::router::RouterError;
use halo_client::signer::EthereumSigner;
use halo_client::transaction::ProposeParams;
use halo_client::{HaloClient, RouterClient, Signer, Transaction, TxAction};

mod common;

const INFO: &str = r#"{
    "dapp": "halo",
    "chainID": "1",
    "govern": "0x95Eb44B81d992534c86994df7D25f5bebE285057",
    "feeRecipient": "0xc6B2FcadaEC9FdC6dA8e416B682d4915F85986f6",
    "routers": ["0xD110107aDb30BCe6C0646EAF77cC1C815012331d"],
    "routerState": null,
    "stakePools": ["basic"],
    "haloAddr": "0xD110107aDb30BCe6C0646EAF77cC1C815012331d"
}"#;

fn router_for(server: &common::MockServer) -> RouterClient {
    RouterClient::new(&RouterConfig {
        url: server.url(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn test_signer() -> Signer {
    Signer::Ethereum(EthereumSigner::from_private_key(common::TEST_KEY).unwrap())
}

async fn accepting_router() -> common::MockServer {
    common::start_mock_server(|req| match (req.method.as_str(), req.path.as_str()) {
        ("GET", "/info") => (200, INFO.to_string()),
        ("POST", "/submit") => (200, r#"{"everHash":"0x1111"}"#.to_string()),
        _ => (404, "\"not found\"".to_string()),
    })
    .await
}

#[tokio::test]
async fn test_transfer_is_signed_and_submitted() {
    let server = accepting_router().await;
    let client = HaloClient::connect(router_for(&server), test_signer())
        .await
        .unwrap();

    let resp = client
        .transfer("0x70997970c51812dc3a010c7d01b50e0d17dc79c8", "1500000000000000000")
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.ever_hash.as_deref(), Some("0x1111"));

    let submits = server.find("POST", "/submit");
    assert_eq!(submits.len(), 1);

    let posted: Value = serde_json::from_str(&submits[0].body).unwrap();
    assert_eq!(posted["dapp"], "halo");
    assert_eq!(posted["chainID"], "1");
    assert_eq!(posted["action"], "transfer");
    assert_eq!(posted["from"], common::TEST_ADDRESS);
    assert_eq!(posted["fee"], "0");
    assert_eq!(posted["feeRecipient"], "0xc6B2FcadaEC9FdC6dA8e416B682d4915F85986f6");
    assert_eq!(posted["version"], "v1");
    assert_eq!(
        posted["params"],
        r#"{"to":"0x70997970C51812dc3A010C7d01b50e0d17dc79C8","amount":"1500000000000000000"}"#
    );

    let tx: Transaction = serde_json::from_value(posted).unwrap();
    let raw = alloy::hex::decode(&tx.sig).unwrap();
    let signature = Signature::from_raw(&raw).unwrap();
    let recovered = signature
        .recover_address_from_msg(tx.canonical_string())
        .unwrap();
    assert_eq!(recovered.to_string(), common::TEST_ADDRESS);
}

#[tokio::test]
async fn test_rejected_submit_keeps_body() {
    let server = common::start_mock_server(|req| match req.path.as_str() {
        "/info" => (200, INFO.to_string()),
        _ => (400, "\"err_invalid_nonce\"".to_string()),
    })
    .await;
    let client = HaloClient::connect(router_for(&server), test_signer())
        .await
        .unwrap();

    let err = client.leave().await.unwrap_err();
    match err {
        ClientError::Router(RouterError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "\"err_invalid_nonce\"");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_params_never_reach_router() {
    let server = accepting_router().await;
    let client = HaloClient::connect(router_for(&server), test_signer())
        .await
        .unwrap();

    let proposal = ProposeParams {
        name: "window".into(),
        source: "function run() {}".into(),
        start: 200,
        end: 100,
        ..Default::default()
    };
    assert!(client.propose(proposal).await.is_err());
    assert!(server.find("POST", "/submit").is_empty());
}

#[tokio::test]
async fn test_nonces_strictly_increase() {
    let server = accepting_router().await;
    let client = HaloClient::connect(router_for(&server), test_signer())
        .await
        .unwrap();

    for _ in 0..3 {
        client.stake("basic", "10").await.unwrap();
    }

    let nonces: Vec<i64> = server
        .find("POST", "/submit")
        .iter()
        .map(|r| {
            let tx: Transaction = serde_json::from_str(&r.body).unwrap();
            assert_eq!(tx.action, TxAction::Stake);
            tx.nonce.parse().unwrap()
        })
        .collect();
    assert_eq!(nonces.len(), 3);
    assert!(nonces.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_query_endpoints() {
    let server = common::start_mock_server(|req| match req.path.as_str() {
        "/balance/0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266" => {
            (200, r#"{"balance":"42"}"#.to_string())
        }
        "/proposal/0xabc?detail=true" => (200, r#"{"id":"0xabc"}"#.to_string()),
        _ => (404, "\"not found\"".to_string()),
    })
    .await;
    let router = router_for(&server);

    let balance = router.get_balance(common::TEST_ADDRESS).await.unwrap();
    assert_eq!(balance["balance"], "42");

    let proposal = router.get_proposal("0xabc", true).await.unwrap();
    assert_eq!(proposal["id"], "0xabc");

    let missing = router.get_tx("0xdead").await;
    assert!(matches!(missing, Err(RouterError::Status { status: 404, .. })));
}
