// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// lib.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Bitcoin RPC Client Library
//!
//! This crate provides a JSON-RPC client for Bitcoin Core style nodes with a
//! retry engine that tells calls that are safe to retry unconditionally
//! apart from calls whose side effect may already have landed on the node.
//! Terminal failures carry an execution-state verdict so callers can decide
//! whether to reconcile against node state before resubmitting.

pub mod models;
mod decode;
mod effect_classifier;
mod execution_state;
mod method_registry;
mod retry;
mod retry_policy;
mod rpc_client;
mod rpc_error;
mod transport;

pub use decode::decode;
pub use effect_classifier::{classify, error_codes};
pub use execution_state::ExecutionState;
pub use method_registry::{MethodKind, MethodRegistry};
pub use retry::{CallAttempt, RetryConfig};
pub use retry_policy::should_retry;
pub use rpc_client::RpcClient;
pub use rpc_error::{DecodeError, RpcError, RpcResult, TerminalError, TransportError};
pub use transport::{HttpTransport, Transport};

// Re-export commonly used types
pub use models::{RpcBlock, RpcRequest, RpcResponse, RpcResponseError, RpcTransaction};
