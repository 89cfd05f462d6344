//! This module contains [`RpcRequest`], a single JSON-RPC 2.0 call to the node.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;
use url::Url;

use crate::error::RpcClientError;

/// The `id` of every request. Requests are never batched, so responses don't
/// need to be told apart.
pub const REQUEST_ID: u64 = 1;

/// The JSON-RPC 2.0 envelope sent as body of the HTTP POST.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    /// Always `"2.0"`.
    jsonrpc: &'static str,
    /// Name of the remote method.
    method: &'a str,
    /// Positional parameters of the remote method.
    params: &'a Value,
    /// Always [`REQUEST_ID`].
    id: u64,
}

/// A single JSON-RPC request. The fields are not public to ensure no
/// tampering after the struct is initialised.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    /// Host name or address of the node.
    host: String,

    /// Port of the node HTTP endpoint.
    port: u16,

    /// Name of the remote method.
    method: String,

    /// Positional parameters of the remote method.
    params: Value,
}

impl RpcRequest {
    /// Constructs a new [`RpcRequest`].
    ///
    /// # Arguments
    ///
    /// - `host`: Host name or address of the node.
    /// - `port`: Port of the node HTTP endpoint.
    /// - `method`: Name of the remote method.
    /// - `params`: Positional parameters, usually a JSON array.
    #[must_use]
    pub fn new(host: &str, port: u16, method: &str, params: Value) -> Self {
        RpcRequest {
            host: host.to_string(),
            port,
            method: method.to_string(),
            params,
        }
    }

    /// Get `method` field of [`RpcRequest`].
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Get `params` field of [`RpcRequest`].
    #[must_use]
    pub fn params(&self) -> &Value {
        &self.params
    }

    /// Returns the JSON-RPC envelope of the request.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the envelope can't be serialised.
    pub fn get_data(&self) -> Result<Value, RpcClientError> {
        Ok(serde_json::to_value(self.envelope())?)
    }

    /// Returns the endpoint of the node, `http://{host}:{port}`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `host` is not a valid host.
    pub fn url(&self) -> Result<Url, RpcClientError> {
        Ok(Url::parse(&format!("http://{}:{}", self.host, self.port))?)
    }

    /// Returns a `curl` command line reproducing the request.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the envelope can't be serialised.
    pub fn as_curl(&self) -> Result<String, RpcClientError> {
        let body = serde_json::to_string(&self.envelope())?;
        Ok(format!(
            "curl -X POST --data '{body}' --header 'Content-Type: application/json' http://{}:{}",
            self.host, self.port
        ))
    }

    /// Sends the request to the node and returns the `result` field of the
    /// response unchanged. The call blocks on a current-thread `tokio`
    /// runtime created for this request only.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if:
    ///
    /// - The runtime can't be started ([`RpcClientError::Runtime`]).
    /// - The node can't be reached.
    /// - The HTTP status is not `200 OK` ([`RpcClientError::Transport`]).
    /// - The response contains a populated `error` field
    ///   ([`RpcClientError::Rpc`]).
    /// - The response is not a JSON object with a `result` field.
    pub fn execute(&self) -> Result<Value, RpcClientError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(RpcClientError::Runtime)?;
        runtime.block_on(self.send())
    }

    /// Posts the envelope and decodes the response.
    async fn send(&self) -> Result<Value, RpcClientError> {
        let body = serde_json::to_string(&self.envelope())?;
        trace!(method = %self.method, %body, "Sending RPC request");

        let response = reqwest::Client::new()
            .post(self.url()?)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            return Err(RpcClientError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_response(&text)
    }

    /// Builds the envelope borrowing from `self`.
    fn envelope(&self) -> Envelope<'_> {
        Envelope {
            jsonrpc: "2.0",
            method: &self.method,
            params: &self.params,
            id: REQUEST_ID,
        }
    }
}

/// Extracts the `result` from the body of a JSON-RPC response.
///
/// A populated `error` takes precedence over `result`.
///
/// # Arguments
///
/// - `body`: The raw body of the HTTP response.
///
/// # Errors
///
/// Returns [`Err`] if `body` is not a JSON object, if `error` is populated or
/// if `result` is missing.
pub(crate) fn decode_response(body: &str) -> Result<Value, RpcClientError> {
    let mut body: Map<String, Value> = serde_json::from_str(body)?;

    if let Some(error) = body.remove("error").filter(is_populated) {
        return Err(RpcClientError::Rpc(error));
    }

    body.remove("result")
        .ok_or_else(|| RpcClientError::MissingResult(Value::Object(body)))
}

/// Returns `false` for the JSON values that mean "no error": `null`, `false`,
/// `0` and empty strings, arrays and objects.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
