// Copyright (C) 2015-2025 The Btc Rpc Client Project.
//
// mod.rs file belongs to the btc-rpc-client project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Data models for JSON-RPC envelopes and typed command results.

mod block;
mod rpc_request;
mod rpc_response;
mod send_options;
mod transaction;
mod unspent;

pub use block::RpcBlock;
pub use rpc_request::RpcRequest;
pub use rpc_response::{RpcResponse, RpcResponseError};
pub use send_options::SendToAddressOptions;
pub use transaction::{RpcTransaction, RpcTransactionDetail, RpcTxInput};
pub use unspent::RpcUnspentOutput;
