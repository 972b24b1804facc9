// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// rpc_error.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::execution_state::ExecutionState;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Transport-level failure for one attempt.
///
/// Carries enough detail (an error code and/or message) for the effect
/// classifier to pattern-match known node error conditions.
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// The TCP/TLS connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request timed out before a response arrived.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A non-success HTTP status with no parseable JSON-RPC error body.
    #[error("HTTP status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be parsed as a JSON-RPC envelope.
    #[error("malformed response body: {body:?}")]
    MalformedResponse { body: String },

    /// The node answered with a JSON-RPC error object.
    #[error("node error {code}: {message}")]
    Node { code: i64, message: String },

    /// The envelope carried neither a result nor an error.
    #[error("node returned no result for '{0}'")]
    EmptyResult(String),

    /// Any other client-side request failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// The call succeeded remotely but the result shape is unexpected.
///
/// Always terminal and always tagged executed: only local decoding failed.
#[derive(Error, Debug, Clone)]
#[error("failed to decode '{method}' result as {expected}: {message} \
         (the remote call succeeded; the remote side effect was executed)")]
pub struct DecodeError {
    pub method: String,
    pub expected: &'static str,
    pub message: String,
}

/// The final error surfaced by the retry executor.
///
/// Bundles the last transport error with the full diagnostic context the
/// caller needs to judge whether the underlying operation must be treated as
/// applied, not applied, or indeterminate.
#[derive(Error, Debug)]
pub struct TerminalError {
    pub method: String,
    pub params: Vec<Value>,
    pub pure: bool,
    pub attempts: u32,
    pub max_attempts: u32,
    /// Classification of the last attempt. The single most important field
    /// for mutating methods.
    pub execution_state: ExecutionState,
    #[source]
    pub source: TransportError,
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rpc call '{}' ({}) failed after {} of {} attempts: {}; {}",
            self.method,
            if self.pure { "read-only" } else { "side-effecting" },
            self.attempts,
            self.max_attempts,
            self.source,
            self.execution_state.verdict(),
        )
    }
}

/// Errors surfaced by the client. All retryable conditions are absorbed by
/// the retry executor; only these terminal conditions propagate.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error(transparent)]
    Terminal(#[from] Box<TerminalError>),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl RpcError {
    /// The execution-state verdict attached to this failure.
    ///
    /// Decode failures are executed by construction: the remote call
    /// succeeded before the local shape mismatch was detected.
    pub fn execution_state(&self) -> ExecutionState {
        match self {
            RpcError::Terminal(err) => err.execution_state,
            RpcError::Decode(_) => ExecutionState::Executed,
        }
    }
}

/// Result type for client operations
pub type RpcResult<T> = Result<T, RpcError>;
