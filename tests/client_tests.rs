//! End-to-end client behavior over a mock HTTP node: typed decoding, param
//! marshaling, and terminal diagnostics.

use btc_rpc_client::{
    ExecutionState, HttpTransport, MethodRegistry, RetryConfig, RpcClient, RpcError,
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

fn client_for(server: &ServerGuard) -> RpcClient {
    let transport =
        HttpTransport::new(Url::parse(&server.url()).unwrap(), None, None).unwrap();
    RpcClient::with_transport(
        Arc::new(transport),
        MethodRegistry::standard(),
        RetryConfig {
            max_attempts: 2,
            retry_delay: Duration::from_millis(10),
        },
    )
}

#[tokio::test]
async fn get_block_decodes_the_typed_result() {
    let mut server = Server::new_async().await;
    let hash = "00000000000000000007878ec04bb2b2e12317804810f4c26033585b3f81ffaa";
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "getblock",
            "params": [hash, true]
        })))
        .with_status(200)
        .with_body(
            json!({
                "result": {
                    "hash": hash,
                    "confirmations": 2,
                    "size": 1234,
                    "height": 820000u64,
                    "version": 536870912u32,
                    "merkleroot": "7e9d9f...e1",
                    "tx": ["b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b"],
                    "time": 1703252017u64,
                    "nonce": 1765503561u64,
                    "bits": "17034219",
                    "difficulty": 67957790298897.88
                },
                "error": null,
                "id": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let block = client.get_block(hash).await.unwrap();
    assert_eq!(block.hash, hash);
    assert_eq!(block.height, 820000);
    assert_eq!(block.tx.len(), 1);
}

#[tokio::test]
async fn send_raw_transaction_returns_the_txid() {
    let mut server = Server::new_async().await;
    let txid = "b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b";
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "sendrawtransaction",
            "params": ["00ff"]
        })))
        .with_status(200)
        .with_body(json!({"result": txid, "error": null, "id": 1}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.send_raw_transaction("00ff").await.unwrap(), txid);
}

#[tokio::test]
async fn duplicate_broadcast_surfaces_an_executed_terminal_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(500)
        .with_body(
            json!({
                "result": null,
                "error": {"code": -27, "message": "transaction already in block chain"},
                "id": 1
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let error = client.send_raw_transaction("00ff").await.unwrap_err();
    assert_eq!(error.execution_state(), ExecutionState::Executed);
    match error {
        RpcError::Terminal(terminal) => {
            assert_eq!(terminal.attempts, 1);
            assert!(!terminal.pure);
        }
        other => panic!("expected terminal error, got: {other}"),
    }
}

#[tokio::test]
async fn create_raw_transaction_marshals_inputs_and_outputs() {
    let mut server = Server::new_async().await;
    let txid = "b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b";
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "createrawtransaction",
            "params": [
                [{"txid": txid, "vout": 0}],
                {"1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa": 0.05}
            ]
        })))
        .with_status(200)
        .with_body(json!({"result": "0200000001...", "error": null, "id": 1}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let inputs = vec![btc_rpc_client::models::RpcTxInput {
        txid: txid.to_string(),
        vout: 0,
    }];
    let mut outputs = BTreeMap::new();
    outputs.insert("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(), 0.05);
    let hex = client.create_raw_transaction(&inputs, &outputs).await.unwrap();
    assert_eq!(hex, "0200000001...");
}

#[tokio::test]
async fn send_to_address_emits_explicit_optional_fields() {
    let mut server = Server::new_async().await;
    let txid = "b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b";
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "sendtoaddress",
            "params": ["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 0.1, null, null, true]
        })))
        .with_status(200)
        .with_body(json!({"result": txid, "error": null, "id": 1}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let options = btc_rpc_client::models::SendToAddressOptions {
        subtract_fee_from_amount: Some(true),
        ..Default::default()
    };
    let result = client
        .send_to_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", 0.1, &options)
        .await
        .unwrap();
    assert_eq!(result, txid);
}

#[tokio::test]
async fn list_unspent_decodes_each_output() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "listunspent",
            "params": [1, 9999999]
        })))
        .with_status(200)
        .with_body(
            json!({
                "result": [{
                    "txid": "b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b",
                    "vout": 0,
                    "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
                    "scriptPubKey": "76a914...88ac",
                    "amount": 0.05,
                    "confirmations": 6,
                    "spendable": true
                }],
                "error": null,
                "id": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let unspent = client.list_unspent(1, 9999999).await.unwrap();
    assert_eq!(unspent.len(), 1);
    assert_eq!(unspent[0].vout, 0);
}

#[tokio::test]
async fn is_ready_reflects_node_reachability() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(json!({"result": 820000, "error": null, "id": 1}).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.is_ready().await);

    let unreachable = RpcClient::new(
        Url::parse("http://127.0.0.1:9").unwrap(),
        None,
        None,
    )
    .unwrap();
    assert!(!unreachable.is_ready().await);
}
