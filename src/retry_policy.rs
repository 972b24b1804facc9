// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// retry_policy.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::effect_classifier::error_codes::*;
use crate::execution_state::ExecutionState;
use crate::rpc_error::TransportError;

/// Decides whether the retry executor may attempt again after a failure.
///
/// Evaluated fresh on every failed attempt; it never inspects attempt
/// history beyond the current error and classification. Unrecognized error
/// classes fail closed.
pub fn should_retry(
    method_is_pure: bool,
    execution_state: ExecutionState,
    error: &TransportError,
) -> bool {
    // Never retry a call whose side effect may already have landed. Pure
    // methods are idempotent by definition and skip this gate.
    if !method_is_pure && execution_state != ExecutionState::NotExecuted {
        return false;
    }

    match error {
        // Transient network failures.
        TransportError::Connect(_) | TransportError::Timeout(_) => true,

        // Server-side hiccups and throttling.
        TransportError::Http { status, .. } => *status >= 500 || *status == 429,

        TransportError::Node { code, .. } => match *code {
            // Node busy, will come up eventually.
            RPC_IN_WARMUP => true,
            // Retrying a malformed request cannot change the outcome.
            RPC_INVALID_REQUEST | RPC_METHOD_NOT_FOUND | RPC_INVALID_PARAMS | RPC_TYPE_ERROR
            | RPC_INVALID_PARAMETER => false,
            // Fail closed.
            _ => false,
        },

        // Fail closed.
        _ => false,
    }
}
