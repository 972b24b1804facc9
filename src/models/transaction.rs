// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// transaction.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Wallet transaction information as returned by `gettransaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTransaction {
    pub txid: String,
    pub amount: f64,
    #[serde(default)]
    pub fee: Option<f64>,
    pub confirmations: i64,
    #[serde(default)]
    pub blockhash: Option<String>,
    #[serde(default)]
    pub blockindex: Option<u32>,
    #[serde(default)]
    pub blocktime: Option<u64>,
    pub time: u64,
    pub timereceived: u64,
    #[serde(default)]
    pub details: Vec<RpcTransactionDetail>,
    #[serde(default)]
    pub hex: Option<String>,
}

/// One input or output detail entry inside a wallet transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTransactionDetail {
    #[serde(default)]
    pub address: Option<String>,
    pub category: String,
    pub amount: f64,
    pub vout: u32,
    #[serde(default)]
    pub fee: Option<f64>,
}

/// Outpoint reference consumed by `createrawtransaction`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcTxInput {
    pub txid: String,
    pub vout: u32,
}
