//! This file contains the structure of command line arguments supported by the
//! tool.

use std::path::PathBuf;

use clap::Parser;
use contract_probe::config::DEFAULT_CONTRACTS_DIR;
use contract_probe::contract::{
    DEFAULT_COMPILER,
    DEFAULT_DEPLOY_GAS,
    DEFAULT_GAS_PRICE,
    DEFAULT_SEND_GAS,
};
use contract_probe::{GasSettings, HarnessConfig};

/// This is the struct of the command line arguments accepted by
/// `contract-probe`.
#[derive(Clone, Parser, Debug)]
#[command(name = "contract-probe")]
#[command(about = "Deploy test contracts to a JSON-RPC node and check on-chain state")]
pub struct Args {
    /// Host name or address of the node.
    pub host: String,

    /// Port of the node HTTP JSON-RPC endpoint.
    pub port: u16,

    /// Print every RPC request as a `curl` command and every result.
    #[arg(long)]
    pub verbose: bool,

    /// The Solidity compiler to invoke with `--bin`.
    #[arg(long, default_value = DEFAULT_COMPILER)]
    pub compiler: PathBuf,

    /// The directory containing `TestToken.sol` and `ProxyContract.sol`.
    #[arg(long, default_value = DEFAULT_CONTRACTS_DIR)]
    pub contracts_dir: PathBuf,

    /// Gas limit of contract deployments.
    #[arg(long, default_value_t = DEFAULT_DEPLOY_GAS)]
    pub deploy_gas: u64,

    /// Gas limit of transactions sent to contracts.
    #[arg(long, default_value_t = DEFAULT_SEND_GAS)]
    pub send_gas: u64,

    /// Gas price of all transactions.
    #[arg(long, default_value_t = DEFAULT_GAS_PRICE)]
    pub gas_price: u64,

    /// Run only the tests whose name contains this string.
    #[arg(long)]
    pub filter: Option<String>,

    /// List the available tests without running them.
    #[arg(long)]
    pub list: bool,
}

impl From<Args> for HarnessConfig {
    fn from(args: Args) -> Self {
        HarnessConfig {
            host: args.host,
            port: args.port,
            verbose: args.verbose,
            compiler: args.compiler,
            contracts_dir: args.contracts_dir,
            gas: GasSettings {
                deploy_gas: args.deploy_gas,
                send_gas: args.send_gas,
                gas_price: args.gas_price,
            },
        }
    }
}
