//! The goal of these tests is to check the contract helpers: compilation with
//! an external compiler and the receipt status checks of deployments and
//! transactions.

#![cfg(test)]

mod common;

use contract_probe::contract::{
    contract_call, contract_send_tx, deploy_contract, first_account, Compiler, GasSettings,
};
use contract_probe::error::{ContractError, RpcClientError};
use contract_probe::RpcClient;
use httpmock::prelude::*;
use serde_json::json;

use crate::common::{fake_source, mock_method};

const TX_HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
const CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";

fn client(server: &MockServer) -> RpcClient {
    RpcClient::new(&server.host(), server.port(), false)
}

#[cfg(unix)]
#[test]
fn test_compile_takes_last_line() {
    let dir = tempfile::tempdir().unwrap();
    let source = fake_source(
        dir.path(),
        "TestToken.sol",
        "\\n======= TestToken.sol:TestToken =======\\nBinary:\\n6080604052\\n\\n",
        "",
        0,
    );

    let bytecode = Compiler::new("sh").compile(&source).unwrap();
    assert_eq!(bytecode, "0x6080604052");
}

#[cfg(unix)]
#[test]
fn test_compile_failure_keeps_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let source = fake_source(
        dir.path(),
        "Broken.sol",
        "",
        "Error: Expected pragma, import directive or contract definition.",
        1,
    );

    let error = Compiler::new("sh").compile(&source).unwrap_err();
    match error {
        ContractError::Compilation {
            file,
            status,
            stderr,
        } => {
            assert_eq!(file, source);
            assert_eq!(status.code(), Some(1));
            assert!(stderr.contains("Expected pragma"));
        }
        other => panic!("Expected compilation error, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_compile_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = fake_source(dir.path(), "Empty.sol", "\\n\\n", "", 0);

    let error = Compiler::new("sh").compile(&source).unwrap_err();
    assert!(matches!(error, ContractError::EmptyCompilerOutput { .. }));
}

#[test]
fn test_first_account() {
    let server = MockServer::start();
    mock_method(&server, "eth_accounts", json!(["0x01", "0x02"]));
    assert_eq!(first_account(&client(&server)).unwrap(), "0x01");
}

#[test]
fn test_first_account_no_accounts() {
    let server = MockServer::start();
    mock_method(&server, "eth_accounts", json!([]));
    let error = first_account(&client(&server)).unwrap_err();
    assert!(matches!(error, ContractError::NoAccounts));
}

#[test]
fn test_deploy_contract() {
    let server = MockServer::start();
    let send = mock_method(&server, "personal_sendTransaction", json!(TX_HASH));
    let receipt = mock_method(
        &server,
        "eth_getTransactionReceipt",
        json!({"transactionHash": TX_HASH, "status": "0x1", "contractAddress": CONTRACT}),
    );

    let address =
        deploy_contract(&client(&server), "0x01", "0x6080", &GasSettings::default()).unwrap();

    send.assert();
    receipt.assert();
    assert_eq!(address, CONTRACT);
}

#[test]
fn test_deploy_uses_deploy_gas() {
    let server = MockServer::start();
    let send = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("\"method\":\"personal_sendTransaction\"")
            .body_contains("\"to\":null")
            .body_contains("\"gas\":\"0x3e8\"")
            .body_contains("\"gasPrice\":\"0x1\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": TX_HASH}));
    });
    mock_method(
        &server,
        "eth_getTransactionReceipt",
        json!({"status": "0x1", "contractAddress": CONTRACT}),
    );

    let gas = GasSettings {
        deploy_gas: 1000,
        send_gas: 2000,
        gas_price: 1,
    };
    deploy_contract(&client(&server), "0x01", "0x6080", &gas).unwrap();
    send.assert();
}

#[test]
fn test_deploy_contract_failed_status() {
    let server = MockServer::start();
    mock_method(&server, "personal_sendTransaction", json!(TX_HASH));
    mock_method(
        &server,
        "eth_getTransactionReceipt",
        json!({"transactionHash": TX_HASH, "status": "0x0", "contractAddress": CONTRACT}),
    );

    let error = deploy_contract(&client(&server), "0x01", "0x6080", &GasSettings::default())
        .unwrap_err();
    match error {
        ContractError::Deployment { receipt } => {
            assert_eq!(receipt.status.as_deref(), Some("0x0"));
        }
        other => panic!("Expected deployment error, got {other:?}"),
    }
}

#[test]
fn test_deploy_contract_missing_receipt() {
    let server = MockServer::start();
    mock_method(&server, "personal_sendTransaction", json!(TX_HASH));
    mock_method(&server, "eth_getTransactionReceipt", json!(null));

    let error = deploy_contract(&client(&server), "0x01", "0x6080", &GasSettings::default())
        .unwrap_err();
    assert!(
        matches!(error, ContractError::ReceiptNotFound { ref tx_hash } if tx_hash == TX_HASH),
        "{error:?}"
    );
}

#[test]
fn test_contract_send_tx() {
    let server = MockServer::start();
    let send = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("\"method\":\"personal_sendTransaction\"")
            .body_contains(format!("\"to\":\"{CONTRACT}\"").as_str())
            .body_contains("\"gas\":\"0x3d0900\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": TX_HASH}));
    });
    mock_method(
        &server,
        "eth_getTransactionReceipt",
        json!({"transactionHash": TX_HASH, "status": "0x1", "logs": [{"data": "0x"}]}),
    );

    let receipt = contract_send_tx(
        &client(&server),
        "0x01",
        CONTRACT,
        "0xa9059cbb",
        &GasSettings::default(),
    )
    .unwrap();

    send.assert();
    assert!(receipt.is_success());
    assert_eq!(receipt.logs.len(), 1);
}

#[test]
fn test_contract_send_tx_failed_status() {
    let server = MockServer::start();
    mock_method(&server, "personal_sendTransaction", json!(TX_HASH));
    mock_method(&server, "eth_getTransactionReceipt", json!({"status": "0x0"}));

    let error = contract_send_tx(
        &client(&server),
        "0x01",
        CONTRACT,
        "0xa9059cbb",
        &GasSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(error, ContractError::Execution { .. }), "{error:?}");
}

#[test]
fn test_contract_call() {
    let server = MockServer::start();
    let call = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("\"method\":\"eth_call\"")
            .body_contains("\"latest\"");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x0021"}));
    });

    let result = contract_call(&client(&server), CONTRACT, "0x70a08231").unwrap();

    call.assert();
    assert_eq!(result, "0x0021");
}

#[test]
fn test_rpc_error_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "account is locked"}
        }));
    });

    let error = deploy_contract(&client(&server), "0x01", "0x6080", &GasSettings::default())
        .unwrap_err();
    assert!(
        matches!(error, ContractError::RpcClient(RpcClientError::Rpc(_))),
        "{error:?}"
    );
}
