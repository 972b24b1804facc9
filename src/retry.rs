// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// retry.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::effect_classifier::classify;
use crate::execution_state::ExecutionState;
use crate::retry_policy::should_retry;
use crate::rpc_error::{TerminalError, TransportError};
use crate::transport::Transport;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry behavior for one logical call. Bounded attempts with a constant
/// inter-attempt delay are the only rate-limiting mechanism; there is no
/// exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            retry_delay: Duration::from_millis(5000),
        }
    }
}

/// One invocation attempt, 1-based.
#[derive(Debug, Clone)]
pub struct CallAttempt<'a> {
    pub method: &'a str,
    pub params: &'a [Value],
    pub attempt: u32,
    pub max_attempts: u32,
}

/// Runs the bounded-attempt loop for one logical call.
///
/// On each failure the attempt is classified, then the retry policy is
/// consulted; side-effecting methods are never re-attempted once the
/// classification is anything other than not-executed. The terminal error
/// always carries the classification of the last attempt.
///
/// Deliberately an explicit loop with an accumulating counter rather than
/// recursion, so attempt depth never grows the call stack.
pub(crate) async fn run_with_retry(
    transport: &dyn Transport,
    method: &str,
    params: &[Value],
    method_is_pure: bool,
    config: &RetryConfig,
) -> Result<Value, Box<TerminalError>> {
    let mut attempt: u32 = 1;
    loop {
        let call = CallAttempt {
            method,
            params,
            attempt,
            max_attempts: config.max_attempts,
        };
        debug!(
            method = call.method,
            attempt = call.attempt,
            max_attempts = call.max_attempts,
            "issuing rpc attempt"
        );

        let error = match transport.invoke(method, params).await {
            // Success is terminal; no classification needed.
            Ok(result) => return Ok(result),
            Err(error) => error,
        };

        let execution_state = classify(method, &error);
        let retry = should_retry(method_is_pure, execution_state, &error);

        if retry && attempt < config.max_attempts {
            warn!(
                method,
                attempt,
                max_attempts = config.max_attempts,
                error = %error,
                delay_ms = config.retry_delay.as_millis() as u64,
                "rpc attempt failed, retrying after delay"
            );
            tokio::time::sleep(config.retry_delay).await;
            attempt += 1;
            continue;
        }

        return Err(Box::new(terminal(
            method,
            params,
            method_is_pure,
            attempt,
            config.max_attempts,
            execution_state,
            error,
        )));
    }
}

fn terminal(
    method: &str,
    params: &[Value],
    pure: bool,
    attempts: u32,
    max_attempts: u32,
    execution_state: ExecutionState,
    source: TransportError,
) -> TerminalError {
    warn!(
        method,
        attempts,
        max_attempts,
        execution_state = %execution_state,
        error = %source,
        "rpc call failed terminally"
    );
    TerminalError {
        method: method.to_string(),
        params: params.to_vec(),
        pure,
        attempts,
        max_attempts,
        execution_state,
        source,
    }
}
