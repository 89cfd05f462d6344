//! This module contains the result of running a test: [`TestOutcome`] for a
//! single test and [`TestSummary`] for the whole run.

use std::error::Error as StdError;
use std::fmt;

use crate::error::{ContractError, Error, RpcClientError, ScenarioError};

/// The category of a test failure, matched from the error kind that stopped
/// the test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The node answered with an HTTP status other than `200 OK`.
    Transport,
    /// The node answered with a JSON-RPC error.
    Rpc,
    /// The compiler failed or printed no bytecode.
    Compilation,
    /// A contract creation was reverted.
    Deployment,
    /// A transaction sent to a contract was reverted.
    Execution,
    /// The on-chain state doesn't match the expected one.
    Assertion,
    /// Any other error.
    Other,
}

impl FailureKind {
    /// Returns the category of `error`.
    #[must_use]
    pub fn of(error: &Error) -> Self {
        match error {
            Error::RpcClient(e) | Error::Contract(ContractError::RpcClient(e)) => match e {
                RpcClientError::Transport { .. } => FailureKind::Transport,
                RpcClientError::Rpc(_) => FailureKind::Rpc,
                _ => FailureKind::Other,
            },
            Error::Contract(
                ContractError::Compilation { .. } | ContractError::EmptyCompilerOutput { .. },
            ) => FailureKind::Compilation,
            Error::Contract(ContractError::Deployment { .. }) => FailureKind::Deployment,
            Error::Contract(ContractError::Execution { .. }) => FailureKind::Execution,
            Error::Scenario(ScenarioError::AssertionFailure { .. }) => FailureKind::Assertion,
            Error::Contract(_) => FailureKind::Other,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "TransportError",
            FailureKind::Rpc => "RpcError",
            FailureKind::Compilation => "CompilationError",
            FailureKind::Deployment => "DeploymentError",
            FailureKind::Execution => "ExecutionError",
            FailureKind::Assertion => "AssertionFailure",
            FailureKind::Other => "Error",
        };
        write!(f, "{name}")
    }
}

/// The error captured when a test fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Category of the error.
    pub kind: FailureKind,

    /// Message of the error.
    pub message: String,

    /// Messages of the underlying causes, outermost first.
    pub causes: Vec<String>,

    /// Debug representation of the error, with all its fields.
    pub detail: String,
}

impl From<&Error> for Failure {
    fn from(error: &Error) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Failure {
            kind: FailureKind::of(error),
            message: error.to_string(),
            causes,
            detail: format!("{error:#?}"),
        }
    }
}

/// The outcome of a single test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestOutcome {
    /// Name of the test.
    pub name: String,

    /// `None` if the test passed.
    pub failure: Option<Failure>,
}

impl TestOutcome {
    /// Returns `true` if the test passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// The outcomes of all the tests run, in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSummary {
    /// One entry for each test run.
    pub outcomes: Vec<TestOutcome>,
}

impl TestSummary {
    /// Returns the number of tests passed.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Returns the outcomes of the failed tests, in the order they failed.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.failure.as_ref().map(|f| (o.name.as_str(), f)))
    }

    /// Returns `true` if no test failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(TestOutcome::passed)
    }
}
