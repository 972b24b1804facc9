// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// unspent.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// One spendable output as returned by `listunspent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcUnspentOutput {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    pub amount: f64,
    pub confirmations: i64,
    #[serde(default)]
    pub spendable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_an_unspent_output() {
        let raw = json!({
            "txid": "b4749f017444b051c44dfd2720e88f314ff94f3dd6d56d40ef65854fcd7fff6b",
            "vout": 0,
            "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "scriptPubKey": "76a914...88ac",
            "amount": 0.05,
            "confirmations": 6,
            "spendable": true
        });
        let utxo: RpcUnspentOutput = serde_json::from_value(raw).unwrap();
        assert_eq!(utxo.vout, 0);
        assert_eq!(utxo.script_pub_key, "76a914...88ac");
        assert!(utxo.spendable);
    }
}
