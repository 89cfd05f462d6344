//! The module `contract` contains the helpers to compile, deploy and interact
//! with a contract through [`RpcClient`].
//!
//! All the transactions are signed by the node: the sender must be one of the
//! accounts returned by `eth_accounts`.

use serde_json::Value;

use crate::error::ContractError;
use crate::rpc::{BlockTag, RpcClient, TransactionReceipt};

pub use self::compiler::{Compiler, DEFAULT_COMPILER};

pub mod compiler;

/// Gas limit of contract deployments when none is configured.
pub const DEFAULT_DEPLOY_GAS: u64 = 1_000_000;

/// Gas limit of transactions sent to a contract when none is configured.
pub const DEFAULT_SEND_GAS: u64 = 4_000_000;

/// Gas price of all transactions when none is configured.
pub const DEFAULT_GAS_PRICE: u64 = 10_000;

/// Gas budget of the transactions submitted by the helpers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GasSettings {
    /// Gas limit of contract deployments.
    pub deploy_gas: u64,

    /// Gas limit of transactions sent to an existing contract.
    pub send_gas: u64,

    /// Gas price of all transactions.
    pub gas_price: u64,
}

impl Default for GasSettings {
    fn default() -> Self {
        GasSettings {
            deploy_gas: DEFAULT_DEPLOY_GAS,
            send_gas: DEFAULT_SEND_GAS,
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

/// Returns the first account managed by the node.
///
/// # Errors
///
/// Returns [`Err`] if the request fails or the node has no account.
pub fn first_account(client: &RpcClient) -> Result<String, ContractError> {
    let accounts = client.eth_accounts()?;
    let Some(first) = accounts.as_array().and_then(|a| a.first()) else {
        return match accounts {
            Value::Array(_) => Err(ContractError::NoAccounts),
            value => Err(ContractError::UnexpectedResult {
                method: "eth_accounts",
                value,
            }),
        };
    };
    as_string("eth_accounts", first.clone())
}

/// Deploys `code` and returns the address of the new contract.
///
/// # Arguments
///
/// - `client`: The connection with the node.
/// - `sender`: The account deploying the contract.
/// - `code`: The `0x`-prefixed bytecode of the contract.
/// - `gas`: The gas budget; `gas.deploy_gas` is used as limit.
///
/// # Errors
///
/// Returns [`Err`] if:
///
/// - Any request fails.
/// - The receipt status is not `0x1` ([`ContractError::Deployment`]).
/// - The receipt doesn't contain the contract address.
pub fn deploy_contract(
    client: &RpcClient,
    sender: &str,
    code: &str,
    gas: &GasSettings,
) -> Result<String, ContractError> {
    let tx_hash =
        client.personal_send_transaction(sender, None, gas.deploy_gas, gas.gas_price, code)?;
    let tx_hash = as_string("personal_sendTransaction", tx_hash)?;
    let receipt = get_receipt(client, &tx_hash)?;

    if !receipt.is_success() {
        return Err(ContractError::Deployment {
            receipt: Box::new(receipt),
        });
    }

    let contract_address = receipt
        .contract_address
        .ok_or(ContractError::MissingContractAddress { tx_hash })?;
    tracing::info!(%contract_address, "Contract deployed");
    Ok(contract_address)
}

/// Sends a transaction to an existing contract and returns its receipt.
///
/// # Arguments
///
/// - `client`: The connection with the node.
/// - `sender`: The account sending the transaction.
/// - `contract_address`: The destination contract.
/// - `data`: The calldata.
/// - `gas`: The gas budget; `gas.send_gas` is used as limit.
///
/// # Errors
///
/// Returns [`Err`] if any request fails or the receipt status is not `0x1`
/// ([`ContractError::Execution`]).
pub fn contract_send_tx(
    client: &RpcClient,
    sender: &str,
    contract_address: &str,
    data: &str,
    gas: &GasSettings,
) -> Result<TransactionReceipt, ContractError> {
    let tx_hash = client.personal_send_transaction(
        sender,
        Some(contract_address),
        gas.send_gas,
        gas.gas_price,
        data,
    )?;
    let tx_hash = as_string("personal_sendTransaction", tx_hash)?;
    let receipt = get_receipt(client, &tx_hash)?;

    if !receipt.is_success() {
        return Err(ContractError::Execution {
            receipt: Box::new(receipt),
        });
    }

    tracing::debug!(%tx_hash, %contract_address, "Transaction executed");
    Ok(receipt)
}

/// Executes a read-only call at the latest block and returns the raw result.
///
/// # Errors
///
/// Returns [`Err`] if the request fails or the result is not a string.
pub fn contract_call(
    client: &RpcClient,
    contract_address: &str,
    data: &str,
) -> Result<String, ContractError> {
    let result = client.eth_call(contract_address, data, BlockTag::Latest)?;
    as_string("eth_call", result)
}

/// Fetches and decodes the receipt of `tx_hash`.
///
/// # Errors
///
/// Returns [`Err`] if the request fails, the node has no receipt for
/// `tx_hash` or the receipt can't be decoded.
pub fn get_receipt(client: &RpcClient, tx_hash: &str) -> Result<TransactionReceipt, ContractError> {
    let receipt = client.eth_get_transaction_receipt(tx_hash)?;
    if receipt.is_null() {
        return Err(ContractError::ReceiptNotFound {
            tx_hash: tx_hash.to_string(),
        });
    }
    Ok(serde_json::from_value(receipt)?)
}

/// Returns the string held by `value`.
fn as_string(method: &'static str, value: Value) -> Result<String, ContractError> {
    match value {
        Value::String(s) => Ok(s),
        value => Err(ContractError::UnexpectedResult { method, value }),
    }
}
