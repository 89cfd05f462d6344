//! This file contains the enum `Error` for all the errors returned by the
//! structures [`crate::rpc::RpcRequest`] and [`crate::rpc::RpcClient`].

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The `Transport` variant is returned when the node answers with an HTTP
    /// status other than `200 OK`. The raw body is kept as detail.
    #[error("RPC endpoint returned HTTP status {status}: {body}")]
    Transport { status: u16, body: String },

    /// The `Rpc` variant is returned when the JSON-RPC response carries a
    /// populated `error` field. It takes precedence over any `result`.
    #[error("RPC endpoint returned error: {0}")]
    Rpc(Value),

    /// The `MissingResult` variant is returned when the JSON-RPC response has
    /// neither a populated `error` nor a `result` field.
    #[error("RPC response doesn't contain a `result` field: {0}")]
    MissingResult(Value),

    /// `Http` variant is used for errors reported by the crate [`reqwest`]
    /// while sending the request or reading the response.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// `Serde` variant is used for errors encoding the request or decoding the
    /// response body.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// `Url` variant is used when `host` and `port` don't make a valid
    /// endpoint.
    #[error(transparent)]
    Url(#[from] url::ParseError),

    /// `Runtime` variant is returned when the `tokio` runtime driving the
    /// request can't be started.
    #[error("Failed to start the async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
