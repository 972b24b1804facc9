// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// decode.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validates a raw successful result against the expected shape.
///
/// A failure here is a local shape bug, not a transient condition: the
/// remote call already succeeded, so it is never retried.
pub fn decode<T: DeserializeOwned>(method: &str, raw: Value) -> Result<T, DecodeError> {
    serde_json::from_value(raw).map_err(|error| DecodeError {
        method: method.to_string(),
        expected: std::any::type_name::<T>(),
        message: error.to_string(),
    })
}
