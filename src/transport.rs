// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// transport.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::models::{RpcRequest, RpcResponse};
use crate::rpc_error::TransportError;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REPORTED_BODY_LEN: usize = 512;

/// Request/response channel to the node: method name and parameters in, raw
/// result or transport error out. One call per invocation, no retry here.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, method: &str, params: &[Value]) -> Result<Value, TransportError>;
}

/// JSON-RPC over HTTP transport backed by reqwest.
pub struct HttpTransport {
    endpoint: Url,
    http_client: Client,
}

impl HttpTransport {
    /// Creates a transport for the given endpoint, with optional basic auth.
    pub fn new(
        endpoint: Url,
        rpc_user: Option<String>,
        rpc_pass: Option<String>,
    ) -> Result<Self, TransportError> {
        let mut builder = Client::builder().timeout(DEFAULT_REQUEST_TIMEOUT);

        if let (Some(user), Some(pass)) = (rpc_user, rpc_pass) {
            let auth = format!("{}:{}", user, pass);
            let encoded = general_purpose::STANDARD.encode(auth.as_bytes());
            builder = builder.default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    format!("Basic {}", encoded)
                        .parse()
                        .map_err(|_| TransportError::Request("invalid auth header".to_string()))?,
                );
                headers
            });
        }

        Ok(Self {
            endpoint,
            http_client: builder
                .build()
                .map_err(|e| TransportError::Request(e.to_string()))?,
        })
    }

    /// Creates a transport with an existing HTTP client.
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self {
            endpoint,
            http_client: client,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        let request = RpcRequest::new(method, params.to_vec());

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!(method, status = status.as_u16(), body_len = body.len(), "received rpc response");

        // The node reports call failures inside a JSON-RPC error body, often
        // under a 500 status. Prefer the node's error object over the status.
        if let Ok(envelope) = serde_json::from_str::<RpcResponse>(&body) {
            if let Some(error) = envelope.error {
                return Err(TransportError::Node {
                    code: error.code,
                    message: error.message,
                });
            }
            if status.is_success() {
                return match envelope.result {
                    Some(result) if !result.is_null() => Ok(result),
                    _ => Err(TransportError::EmptyResult(method.to_string())),
                };
            }
        } else if status.is_success() {
            return Err(TransportError::MalformedResponse {
                body: truncate(&body),
            });
        }

        Err(TransportError::Http {
            status: status.as_u16(),
            message: truncate(&body),
        })
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::Connect(error.to_string())
    } else {
        TransportError::Request(error.to_string())
    }
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_REPORTED_BODY_LEN {
        body.to_string()
    } else {
        let mut end = MAX_REPORTED_BODY_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body[..end].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_caps_reported_bodies() {
        let long = "x".repeat(MAX_REPORTED_BODY_LEN * 2);
        assert_eq!(truncate(&long).len(), MAX_REPORTED_BODY_LEN);
        assert_eq!(truncate("short"), "short");
    }
}
