//! This module contains all the errors returned by the `contract-probe`
//! library.
//!
//! The enums derive only `Debug` and `Error`: `reqwest::Error` and
//! `std::io::Error` can't be cloned or compared.
//!
//! Each layer of the library has its own error enum. The layers above wrap the
//! errors of the layers below as `transparent` variants, so that the original
//! error is never lost on its way up to the test runner.

// Allowing `module_name_repetitions` is needed to make `clippy` happy and keep the suffix `Error`
// for all the error categories.
#![allow(clippy::module_name_repetitions)]

use thiserror::Error;

// If any error is added in the future, make sure to keep all sub-error enums as
// `pub` for ease of access.
pub use self::contract::Error as ContractError;
pub use self::rpc_client::Error as RpcClientError;
pub use self::scenario::Error as ScenarioError;

mod contract;
mod rpc_client;
mod scenario;

#[derive(Debug, Error)]
pub enum Error {
    /// `Error::RpcClient` error is caused by issues querying the RPC endpoint.
    #[error(transparent)]
    RpcClient(#[from] RpcClientError),

    /// `Error::Contract` error is caused by issues compiling, deploying or
    /// transacting with a contract.
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// `Error::Scenario` error is caused by a test scenario whose on-chain
    /// state doesn't match the expected one.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}
