// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// send_options.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::Value;

/// Optional trailing parameters for `sendtoaddress`.
///
/// Each optional field is explicit; callers never rely on positional-arity
/// inference. On the wire the fields stay positional (the node's protocol),
/// so unset fields before the last set one are sent as null placeholders and
/// trailing unset fields are omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct SendToAddressOptions {
    pub comment: Option<String>,
    pub comment_to: Option<String>,
    pub subtract_fee_from_amount: Option<bool>,
}

impl SendToAddressOptions {
    pub(crate) fn extend_params(&self, params: &mut Vec<Value>) {
        let positional = [
            self.comment.clone().map(Value::String),
            self.comment_to.clone().map(Value::String),
            self.subtract_fee_from_amount.map(Value::Bool),
        ];
        let last_set = match positional.iter().rposition(Option::is_some) {
            Some(index) => index,
            None => return,
        };
        for slot in positional.into_iter().take(last_set + 1) {
            params.push(slot.unwrap_or(Value::Null));
        }
    }
}
