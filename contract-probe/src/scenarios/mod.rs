//! The scenarios run against the node. Each one compiles and deploys the test
//! contracts, sends crafted calldata and checks the resulting token balance.
//!
//! The contracts are read from [`TestContext::contracts_dir`]:
//!
//! - `TestToken.sol`: an ERC-20 style token with `transfer(address,uint256)`
//!   and `balanceOf(address)`.
//! - `ProxyContract.sol`: a contract that stores a call with
//!   `submitTransaction(address,uint256,bytes)` and relays it with
//!   `executeTransaction()`.

use std::path::PathBuf;

use crate::config::HarnessConfig;
use crate::contract::{
    contract_call, contract_send_tx, deploy_contract, first_account, Compiler, GasSettings,
};
use crate::encoding::{encode_word, prepend_0x, zeropad, WORD_HEX_LEN};
use crate::error::{Error, ScenarioError};
use crate::rpc::{RpcClient, TransactionReceipt};
use crate::runner::Test;

mod extra_log_data;
mod extra_parameter;

/// Selector of `transfer(address,uint256)`.
pub const TRANSFER_SELECTOR: &str = "0xa9059cbb";

/// Selector of `balanceOf(address)`.
pub const BALANCE_OF_SELECTOR: &str = "0x70a08231";

/// Account receiving the tokens in the scenarios. Nobody owns its key.
pub const DESTINATION: &str = "0xaabbccddeeff112233445566778899aabbccddee";

/// Source file of the token contract.
pub const TOKEN_SOURCE: &str = "TestToken.sol";

/// Source file of the proxy contract.
pub const PROXY_SOURCE: &str = "ProxyContract.sol";

/// Everything a scenario needs to talk to the node and build contracts.
#[derive(Debug, Clone)]
pub struct TestContext {
    /// The connection with the node.
    pub client: RpcClient,

    /// The Solidity compiler.
    pub compiler: Compiler,

    /// Directory containing the Solidity sources.
    pub contracts_dir: PathBuf,

    /// Gas budget of deployments and transactions.
    pub gas: GasSettings,
}

impl TestContext {
    /// Constructs a new [`TestContext`] from the session configuration.
    #[must_use]
    pub fn new(config: &HarnessConfig) -> Self {
        TestContext {
            client: RpcClient::new(&config.host, config.port, config.verbose),
            compiler: Compiler::new(config.compiler.clone()),
            contracts_dir: config.contracts_dir.clone(),
            gas: config.gas,
        }
    }

    /// Compiles `source`, relative to `contracts_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if compilation fails.
    pub fn compile(&self, source: &str) -> Result<String, Error> {
        Ok(self.compiler.compile(&self.contracts_dir.join(source))?)
    }

    /// Returns the first account of the node.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the request fails or the node has no account.
    pub fn sender(&self) -> Result<String, Error> {
        Ok(first_account(&self.client)?)
    }

    /// Deploys `code` from `sender` and returns the contract address.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the deployment fails.
    pub fn deploy(&self, sender: &str, code: &str) -> Result<String, Error> {
        Ok(deploy_contract(&self.client, sender, code, &self.gas)?)
    }

    /// Sends `data` to `contract_address` and returns the receipt.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the transaction fails.
    pub fn send_tx(
        &self,
        sender: &str,
        contract_address: &str,
        data: &str,
    ) -> Result<TransactionReceipt, Error> {
        Ok(contract_send_tx(
            &self.client,
            sender,
            contract_address,
            data,
            &self.gas,
        )?)
    }

    /// Reads the token balance of `owner` at the latest block.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the call fails.
    pub fn balance_of(&self, token_address: &str, owner: &str) -> Result<String, Error> {
        let data = format!("{BALANCE_OF_SELECTOR}{}", encode_word(owner));
        Ok(contract_call(&self.client, token_address, &data)?)
    }
}

/// Checks that `balance` is the 32-byte word holding `expected`.
///
/// # Arguments
///
/// - `balance`: The raw result of `balanceOf`.
/// - `expected`: The expected balance as unprefixed hex, e.g. `"ead"`.
///
/// # Errors
///
/// Returns [`ScenarioError::AssertionFailure`] if the values differ.
pub fn assert_balance(balance: &str, expected: &str) -> Result<(), ScenarioError> {
    let expected = prepend_0x(&zeropad(expected, WORD_HEX_LEN));
    if balance != expected {
        return Err(ScenarioError::AssertionFailure {
            expected,
            actual: balance.to_string(),
        });
    }
    Ok(())
}

/// Build the complete list of scenarios, in execution order.
#[must_use]
pub fn build_test_suite() -> Vec<Test<TestContext>> {
    vec![
        Test::new(
            "test_extra_parameter",
            "Transfer with one extra trailing word in calldata",
            extra_parameter::test_extra_parameter,
        ),
        Test::new(
            "test_extra_log_data",
            "Token transfer relayed through a proxy contract",
            extra_log_data::test_extra_log_data,
        ),
    ]
}
