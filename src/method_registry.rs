// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// method_registry.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::collections::HashMap;

/// Whether a remote command mutates node/wallet state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Read-only; safe to retry regardless of execution uncertainty.
    Pure,
    /// Assumed to mutate remote state.
    Mutating,
}

/// Configuration table mapping method name to purity, injected into the
/// client at construction. Methods absent from the table are treated as
/// mutating.
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    kinds: HashMap<String, MethodKind>,
}

impl MethodRegistry {
    /// An empty table: every method is treated as mutating.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table for the command set this client exposes.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for method in [
            "getbalance",
            "getblock",
            "getblockcount",
            "getblockhash",
            "getrawtransaction",
            "gettransaction",
            "listunspent",
            "validateaddress",
            // Builds a transaction locally without touching node state.
            "createrawtransaction",
        ] {
            registry.register(method, MethodKind::Pure);
        }
        for method in ["sendrawtransaction", "sendtoaddress", "settxfee"] {
            registry.register(method, MethodKind::Mutating);
        }
        registry
    }

    pub fn register(&mut self, method: impl Into<String>, kind: MethodKind) {
        self.kinds.insert(method.into(), kind);
    }

    pub fn kind_of(&self, method: &str) -> MethodKind {
        self.kinds
            .get(method)
            .copied()
            .unwrap_or(MethodKind::Mutating)
    }

    pub fn is_pure(&self, method: &str) -> bool {
        self.kind_of(method) == MethodKind::Pure
    }
}
