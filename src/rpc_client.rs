// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// rpc_client.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::decode::decode;
use crate::method_registry::MethodRegistry;
use crate::models::{RpcBlock, RpcTransaction, RpcTxInput, RpcUnspentOutput, SendToAddressOptions};
use crate::retry::{run_with_retry, RetryConfig};
use crate::rpc_error::{RpcResult, TransportError};
use crate::transport::{HttpTransport, Transport};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// The RPC client for a Bitcoin Core style node.
///
/// Every command runs through the retry pipeline: bounded attempts with a
/// fixed delay, side-effect classification on each failure, and a terminal
/// error carrying the final execution-state verdict. Cheap to share across
/// tasks via `Arc`; concurrent calls need no coordination.
pub struct RpcClient {
    transport: Arc<dyn Transport>,
    registry: MethodRegistry,
    retry: RetryConfig,
}

impl RpcClient {
    /// Creates a client for the given endpoint with optional basic auth,
    /// the standard method table and default retry behavior.
    pub fn new(
        endpoint: Url,
        rpc_user: Option<String>,
        rpc_pass: Option<String>,
    ) -> Result<Self, TransportError> {
        Ok(Self {
            transport: Arc::new(HttpTransport::new(endpoint, rpc_user, rpc_pass)?),
            registry: MethodRegistry::standard(),
            retry: RetryConfig::default(),
        })
    }

    /// Creates a client with an injected transport, method table and retry
    /// configuration.
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        registry: MethodRegistry,
        retry: RetryConfig,
    ) -> Self {
        Self {
            transport,
            registry,
            retry,
        }
    }

    /// Invokes one method through the retry/decode pipeline.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> RpcResult<T> {
        let method_is_pure = self.registry.is_pure(method);
        let raw = run_with_retry(
            self.transport.as_ref(),
            method,
            &params,
            method_is_pure,
            &self.retry,
        )
        .await?;
        Ok(decode(method, raw)?)
    }

    // Transaction methods

    /// Broadcasts a signed raw transaction, returning its txid.
    pub async fn send_raw_transaction(&self, hex: &str) -> RpcResult<String> {
        self.call("sendrawtransaction", vec![json!(hex)]).await
    }

    /// Sends an amount to an address, returning the txid.
    pub async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        options: &SendToAddressOptions,
    ) -> RpcResult<String> {
        let mut params = vec![json!(address), json!(amount)];
        options.extend_params(&mut params);
        self.call("sendtoaddress", params).await
    }

    /// Builds an unsigned raw transaction from the given outpoints and
    /// address/amount map, returning its hex encoding.
    pub async fn create_raw_transaction(
        &self,
        inputs: &[RpcTxInput],
        outputs: &BTreeMap<String, f64>,
    ) -> RpcResult<String> {
        let inputs = Value::Array(
            inputs
                .iter()
                .map(|input| json!({"txid": input.txid, "vout": input.vout}))
                .collect(),
        );
        let outputs = Value::Object(
            outputs
                .iter()
                .map(|(address, amount)| (address.clone(), json!(amount)))
                .collect(),
        );
        self.call("createrawtransaction", vec![inputs, outputs])
            .await
    }

    /// Returns wallet information about a transaction.
    pub async fn get_transaction(&self, txid: &str) -> RpcResult<RpcTransaction> {
        self.call("gettransaction", vec![json!(txid)]).await
    }

    /// Returns the serialized transaction as a hex string.
    pub async fn get_raw_transaction(&self, txid: &str) -> RpcResult<String> {
        self.call("getrawtransaction", vec![json!(txid)]).await
    }

    /// Sets the fee rate used by subsequent sends.
    pub async fn set_tx_fee(&self, amount: f64) -> RpcResult<bool> {
        self.call("settxfee", vec![json!(amount)]).await
    }

    // Blockchain methods

    /// Returns the block with the given hash.
    pub async fn get_block(&self, hash: &str) -> RpcResult<RpcBlock> {
        self.call("getblock", vec![json!(hash), json!(true)]).await
    }

    /// Returns the hash of the block at the given height.
    pub async fn get_block_hash(&self, height: u64) -> RpcResult<String> {
        self.call("getblockhash", vec![json!(height)]).await
    }

    /// Returns the number of blocks in the longest chain.
    pub async fn get_block_count(&self) -> RpcResult<u64> {
        self.call("getblockcount", vec![]).await
    }

    // Wallet methods

    /// Returns the wallet's total available balance.
    pub async fn get_balance(&self) -> RpcResult<f64> {
        self.call("getbalance", vec![]).await
    }

    /// Returns unspent outputs with between `min_conf` and `max_conf`
    /// confirmations.
    pub async fn list_unspent(
        &self,
        min_conf: u32,
        max_conf: u32,
    ) -> RpcResult<Vec<RpcUnspentOutput>> {
        self.call("listunspent", vec![json!(min_conf), json!(max_conf)])
            .await
    }

    /// Reports whether the node is reachable, via a single lightweight
    /// read-only call. Never fails; any error maps to `false`.
    pub async fn is_ready(&self) -> bool {
        match self.transport.invoke("getblockcount", &[]).await {
            Ok(_) => true,
            Err(error) => {
                debug!(error = %error, "readiness probe failed");
                false
            }
        }
    }
}
