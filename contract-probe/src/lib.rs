//! The library `contract-probe` deploys test contracts to an Ethereum JSON-RPC
//! node and checks the on-chain state left by crafted transactions.
//!
//! The node signs the transactions itself (`personal_sendTransaction`), so it
//! must manage at least one unlocked account. The contracts are compiled with
//! an external `solc`-compatible compiler.
//!
//! The simplest interaction with this library is to build a [`TestContext`]
//! from a [`HarnessConfig`] and pass it to [`run_tests`] together with
//! [`build_test_suite`].
//!
//! The key structs of the library are as follows:
//!
//! - [`RpcRequest`] struct which is a single JSON-RPC 2.0 call over HTTP.
//! - [`RpcClient`] struct which exposes one method per remote method.
//! - [`Compiler`] struct which runs the Solidity compiler.
//! - [`Test`] struct which is a named test function.
//!
//! Beyond [`run_tests`], these are the other key public functions of the
//! library:
//!
//! - [`contract::deploy_contract`], [`contract::contract_send_tx`] and
//!   [`contract::contract_call`] which deploy and interact with contracts.
//! - [`write_report`] which prints the diagnostics of the failed tests.

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::missing_docs_in_private_items
)]

pub use crate::config::HarnessConfig;
pub use crate::contract::{Compiler, GasSettings};
pub use crate::rpc::{RpcClient, RpcRequest};
pub use crate::runner::{list_tests, run_tests, write_report, Test, TestSummary};
pub use crate::scenarios::{build_test_suite, TestContext};

pub mod config;
pub mod contract;
pub mod encoding;
pub mod error;
pub mod rpc;
pub mod runner;
pub mod scenarios;
