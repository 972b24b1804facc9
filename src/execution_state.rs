// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// execution_state.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;

/// Verdict on whether a failed call's side effect nonetheless took hold on
/// the node.
///
/// Produced by the effect classifier for one failed attempt and carried on
/// the terminal error so the caller can decide whether manual reconciliation
/// against node state is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// The node demonstrably processed the request (e.g. a duplicate-broadcast
    /// error, or the call succeeded and only local decoding failed).
    Executed,

    /// The request never reached the node's execution path.
    NotExecuted,

    /// No marker either way. For side-effecting methods this is resolved
    /// toward safety against double execution, never toward availability.
    Unknown,
}

impl ExecutionState {
    /// Plain-terms phrasing used in terminal error messages.
    pub fn verdict(&self) -> &'static str {
        match self {
            ExecutionState::Executed => "the remote side effect was executed",
            ExecutionState::NotExecuted => "the remote side effect was not executed",
            ExecutionState::Unknown => "it is unknown whether the remote side effect was executed",
        }
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionState::Executed => write!(f, "executed"),
            ExecutionState::NotExecuted => write!(f, "not executed"),
            ExecutionState::Unknown => write!(f, "unknown"),
        }
    }
}
