//! This module uses the Ethereum JSON-RPC protocol to query the node under
//! test.

use serde_json::{json, Value};
use tracing::debug;

use crate::encoding::to_hex_quantity;
use crate::error::RpcClientError;
use crate::rpc::request::RpcRequest;
use crate::rpc::types::{BlockTag, CallRequest, LogFilter, TransactionRequest};

/// This structure partially implements an Ethereum RPC client.
///
/// The RPC calls included are those needed to deploy and exercise the test
/// contracts. Every call opens a new connection: nothing is cached or pooled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcClient {
    /// Host name or address of the node.
    host: String,

    /// Port of the node HTTP endpoint.
    port: u16,

    /// If `true`, each request is echoed as a `curl` command and each result
    /// is pretty-printed to stdout.
    verbose: bool,
}

impl RpcClient {
    /// Constructs a new `RpcClient`.
    ///
    /// # Arguments
    ///
    /// - `host`: Host name or address of the node.
    /// - `port`: Port of the node HTTP endpoint.
    /// - `verbose`: Echo requests and results to stdout.
    #[must_use]
    pub fn new(host: &str, port: u16, verbose: bool) -> Self {
        RpcClient {
            host: host.to_string(),
            port,
            verbose,
        }
    }

    /// Get `host` field of [`RpcClient`].
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get `port` field of [`RpcClient`].
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Sends one request and returns its `result`.
    fn call(&self, method: &str, params: Value) -> Result<Value, RpcClientError> {
        let request = RpcRequest::new(&self.host, self.port, method, params);
        debug!(method, "RPC call");
        if self.verbose {
            println!("{}", echo_request(&request)?);
        }
        let result = request.execute()?;
        if self.verbose {
            println!("{}", echo_result(&result)?);
        }
        Ok(result)
    }

    /// This function queries the list of accounts managed by the node.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails.
    pub fn eth_accounts(&self) -> Result<Value, RpcClientError> {
        self.call("eth_accounts", json!([]))
    }

    /// This function submits a transaction signed by the node with the
    /// account `from`, unlocked with an empty passphrase. It returns the
    /// transaction hash.
    ///
    /// # Arguments
    ///
    /// - `from`: The sender account.
    /// - `to`: The destination. If `None`, `data` is deployed as a contract.
    /// - `gas`: The gas limit.
    /// - `gas_price`: The gas price.
    /// - `data`: The calldata or the contract bytecode.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails.
    pub fn personal_send_transaction(
        &self,
        from: &str,
        to: Option<&str>,
        gas: u64,
        gas_price: u64,
        data: &str,
    ) -> Result<Value, RpcClientError> {
        let request = TransactionRequest {
            from: from.to_string(),
            to: to.map(ToString::to_string),
            gas: to_hex_quantity(gas),
            gas_price: to_hex_quantity(gas_price),
            data: data.to_string(),
        };
        self.call("personal_sendTransaction", json!([request, ""]))
    }

    /// This function executes a read-only call against a contract.
    ///
    /// # Arguments
    ///
    /// - `to`: The address of the contract.
    /// - `data`: The calldata.
    /// - `at`: The block at which the call is evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails.
    pub fn eth_call(&self, to: &str, data: &str, at: BlockTag) -> Result<Value, RpcClientError> {
        let request = CallRequest {
            to: to.to_string(),
            data: data.to_string(),
        };
        self.call("eth_call", json!([request, at]))
    }

    /// This function queries the receipt of a transaction. The result is
    /// `null` if the transaction is unknown or not mined yet.
    ///
    /// # Arguments
    ///
    /// - `tx_hash`: The hash of the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails.
    pub fn eth_get_transaction_receipt(&self, tx_hash: &str) -> Result<Value, RpcClientError> {
        self.call("eth_getTransactionReceipt", json!([tx_hash]))
    }

    /// This function queries the logs matching `filter`.
    ///
    /// # Arguments
    ///
    /// - `filter`: The address, block range and topics to match.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails.
    pub fn eth_get_logs(&self, filter: &LogFilter) -> Result<Value, RpcClientError> {
        self.call("eth_getLogs", json!([filter]))
    }

    /// This function queries the execution trace of a transaction.
    ///
    /// # Arguments
    ///
    /// - `tx_hash`: The hash of the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails or the node doesn't support the
    /// `trace` namespace.
    pub fn trace_transaction(&self, tx_hash: &str) -> Result<Value, RpcClientError> {
        self.call("trace_transaction", json!([tx_hash]))
    }
}

/// Formats the line printed before a request in verbose mode.
fn echo_request(request: &RpcRequest) -> Result<String, RpcClientError> {
    Ok(format!(">> {}", request.as_curl()?))
}

/// Formats the result printed after a request in verbose mode, pretty-printed
/// with a 2-space indent.
fn echo_result(result: &Value) -> Result<String, RpcClientError> {
    Ok(format!("<< {}", serde_json::to_string_pretty(result)?))
}
