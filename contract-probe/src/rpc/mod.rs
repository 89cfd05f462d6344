//! The module `rpc` contains the JSON-RPC 2.0 client used to talk to the node
//! under test.
//!
//! [`RpcRequest`] is a single call over HTTP POST. [`RpcClient`] exposes one
//! method per remote method and returns the `result` of the call unchanged.

pub use self::request::RpcRequest;
pub use self::rpc_client::RpcClient;
pub use self::types::{BlockTag, CallRequest, LogFilter, TransactionReceipt, TransactionRequest};

pub mod request;
pub mod rpc_client;
pub mod types;
