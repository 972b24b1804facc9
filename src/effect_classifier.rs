// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// effect_classifier.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::execution_state::ExecutionState;
use crate::rpc_error::TransportError;
use tracing::debug;

/// Node error codes pattern-matched by the classifier and the retry policy.
/// Values follow the Bitcoin Core RPC protocol.
pub mod error_codes {
    /// Transaction or block failed validation.
    pub const RPC_VERIFY_ERROR: i64 = -25;
    /// Transaction rejected by the mempool (insufficient priority/fee, etc.).
    pub const RPC_VERIFY_REJECTED: i64 = -26;
    /// Transaction already in chain.
    pub const RPC_VERIFY_ALREADY_IN_CHAIN: i64 = -27;
    /// Node still warming up ("Loading block index...").
    pub const RPC_IN_WARMUP: i64 = -28;
    /// Invalid type supplied for a parameter.
    pub const RPC_TYPE_ERROR: i64 = -3;
    /// Invalid, missing or duplicate parameter.
    pub const RPC_INVALID_PARAMETER: i64 = -8;
    /// JSON-RPC: the request object is not valid.
    pub const RPC_INVALID_REQUEST: i64 = -32600;
    /// JSON-RPC: method does not exist.
    pub const RPC_METHOD_NOT_FOUND: i64 = -32601;
    /// JSON-RPC: invalid method parameters.
    pub const RPC_INVALID_PARAMS: i64 = -32602;
}

use error_codes::*;

/// One classification rule: first match wins.
struct Rule {
    name: &'static str,
    applies: fn(&TransportError) -> bool,
    verdict: ExecutionState,
}

/// Ordered rule table, evaluated in priority order. Kept separate from the
/// retry policy so the two can be tested independently.
const RULES: &[Rule] = &[
    // The node rejected the broadcast because the effect already took hold,
    // on this attempt or a prior/concurrent one.
    Rule {
        name: "duplicate-broadcast",
        applies: |err| match err {
            TransportError::Node { code, message } => {
                *code == RPC_VERIFY_ALREADY_IN_CHAIN
                    || contains_any(
                        message,
                        &[
                            "already in block chain",
                            "already in the mempool",
                            "txn-already-in-mempool",
                            "txn-already-known",
                        ],
                    )
            }
            _ => false,
        },
        verdict: ExecutionState::Executed,
    },
    // The request never reached the node's execution path.
    Rule {
        name: "connection-failed",
        applies: |err| matches!(err, TransportError::Connect(_)),
        verdict: ExecutionState::NotExecuted,
    },
    Rule {
        name: "timed-out",
        applies: |err| matches!(err, TransportError::Timeout(_)),
        verdict: ExecutionState::NotExecuted,
    },
    // An empty body means the node never produced a response. A non-empty
    // unparseable body falls through to the unknown default.
    Rule {
        name: "empty-response-body",
        applies: |err| {
            matches!(err, TransportError::MalformedResponse { body } if body.trim().is_empty())
        },
        verdict: ExecutionState::NotExecuted,
    },
    // The node refused to execute anything while warming up.
    Rule {
        name: "node-warming-up",
        applies: |err| matches!(err, TransportError::Node { code, .. } if *code == RPC_IN_WARMUP),
        verdict: ExecutionState::NotExecuted,
    },
    // Validation/mempool rejection happens before the effect is applied.
    Rule {
        name: "verify-rejected",
        applies: |err| {
            matches!(err, TransportError::Node { code, .. }
                if *code == RPC_VERIFY_ERROR || *code == RPC_VERIFY_REJECTED)
        },
        verdict: ExecutionState::NotExecuted,
    },
    // Request never parsed or dispatched by the node.
    Rule {
        name: "malformed-request",
        applies: |err| {
            matches!(err, TransportError::Node { code, .. }
                if *code == RPC_INVALID_REQUEST
                    || *code == RPC_METHOD_NOT_FOUND
                    || *code == RPC_INVALID_PARAMS
                    || *code == RPC_TYPE_ERROR
                    || *code == RPC_INVALID_PARAMETER)
        },
        verdict: ExecutionState::NotExecuted,
    },
];

/// Determines whether the remote side effect for a failed call was already
/// executed. Pure function of the error content; performs no I/O.
///
/// Errors matching no rule yield `Unknown`, the conservative default for
/// methods that are not pure.
pub fn classify(method: &str, error: &TransportError) -> ExecutionState {
    for rule in RULES {
        if (rule.applies)(error) {
            debug!(method, rule = rule.name, verdict = %rule.verdict, "classified failed attempt");
            return rule.verdict;
        }
    }
    debug!(method, verdict = %ExecutionState::Unknown, "no classification rule matched");
    ExecutionState::Unknown
}

fn contains_any(message: &str, needles: &[&str]) -> bool {
    let lower = message.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}
