// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// block.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Block information as returned by verbose `getblock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcBlock {
    pub hash: String,
    pub confirmations: i64,
    pub size: u32,
    pub height: u64,
    pub version: u32,
    pub merkleroot: String,
    pub tx: Vec<String>,
    pub time: u64,
    pub nonce: u64,
    pub bits: String,
    pub difficulty: f64,
    #[serde(default)]
    pub previousblockhash: Option<String>,
    #[serde(default)]
    pub nextblockhash: Option<String>,
}
