// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// rpc_request.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl RpcRequest {
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: 1,
            method: method.to_string(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = RpcRequest::new("getblockhash", vec![json!(99)]);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(
            wire,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getblockhash",
                "params": [99]
            })
        );
    }

    #[test]
    fn request_without_params_keeps_an_empty_array() {
        let request = RpcRequest::new("getblockcount", vec![]);
        let wire = serde_json::to_value(&request).unwrap();
        assert!(wire.get("params").unwrap().as_array().unwrap().is_empty());
    }
}
