//! Configuration of a test session: where the node is, how to compile the
//! contracts and how much gas to spend.

use std::path::PathBuf;

use crate::contract::{GasSettings, DEFAULT_COMPILER};

/// Directory searched for the Solidity sources when none is configured.
pub const DEFAULT_CONTRACTS_DIR: &str = "contracts";

/// Settings shared by all the tests of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Host name or address of the node.
    pub host: String,

    /// Port of the node HTTP endpoint.
    pub port: u16,

    /// Echo every RPC request and result to stdout.
    pub verbose: bool,

    /// Path or name of the Solidity compiler.
    pub compiler: PathBuf,

    /// Directory containing `TestToken.sol` and `ProxyContract.sol`.
    pub contracts_dir: PathBuf,

    /// Gas budget of deployments and transactions.
    pub gas: GasSettings,
}

impl HarnessConfig {
    /// Constructs a [`HarnessConfig`] for the node at `host:port` with all the
    /// other settings at their default.
    #[must_use]
    pub fn new(host: &str, port: u16) -> Self {
        HarnessConfig {
            host: host.to_string(),
            port,
            verbose: false,
            compiler: PathBuf::from(DEFAULT_COMPILER),
            contracts_dir: PathBuf::from(DEFAULT_CONTRACTS_DIR),
            gas: GasSettings::default(),
        }
    }
}
