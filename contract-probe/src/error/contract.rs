//! This file contains the enum `Error` for all the errors returned by the
//! module [`crate::contract`].

use std::path::PathBuf;
use std::process::ExitStatus;

use serde_json::Value;
use thiserror::Error;

use crate::error::RpcClientError;
use crate::rpc::TransactionReceipt;

#[derive(Debug, Error)]
pub enum Error {
    /// `Compilation` variant is returned when the compiler exits with a
    /// non-zero status. `stderr` is the diagnostic text of the compiler.
    #[error("Compilation of {file:?} failed ({status}): {stderr}")]
    Compilation {
        file: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    /// `EmptyCompilerOutput` variant is returned when the compiler succeeds
    /// without printing any bytecode.
    #[error("Compiler produced no bytecode for {file:?}")]
    EmptyCompilerOutput { file: PathBuf },

    /// `Deployment` variant is returned when the receipt of a contract
    /// creation doesn't report success.
    #[error("Deployment failed with status {:?}", .receipt.status)]
    Deployment { receipt: Box<TransactionReceipt> },

    /// `Execution` variant is returned when the receipt of a transaction sent
    /// to a contract doesn't report success.
    #[error("Sending transaction to contract failed with status {:?}", .receipt.status)]
    Execution { receipt: Box<TransactionReceipt> },

    /// `ReceiptNotFound` variant is returned when the node has no receipt for
    /// the transaction just submitted.
    #[error("Receipt for transaction {tx_hash} not found")]
    ReceiptNotFound { tx_hash: String },

    /// `MissingContractAddress` variant is returned when a successful
    /// deployment receipt doesn't contain the address of the new contract.
    #[error("Receipt of transaction {tx_hash} doesn't contain a contract address")]
    MissingContractAddress { tx_hash: String },

    /// `UnexpectedResult` variant is used when the result of an RPC call
    /// doesn't have the shape required by the helper.
    #[error("Unexpected result from {method}: {value}")]
    UnexpectedResult { method: &'static str, value: Value },

    /// `NoAccounts` variant is returned when the node doesn't manage any
    /// account to send transactions from.
    #[error("The node doesn't have any account")]
    NoAccounts,

    /// `Io` variant is used when the compiler process can't be spawned.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// `Serde` variant is used for errors decoding a receipt.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// `RpcClient` variant is used to propagate errors from the RPC client.
    #[error(transparent)]
    RpcClient(#[from] RpcClientError),
}
