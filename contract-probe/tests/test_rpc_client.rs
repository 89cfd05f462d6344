//! The goal of these tests is to check the JSON-RPC client against a mock
//! node: the shape of the request sent and the handling of HTTP status,
//! `error` and `result` in the response.

#![cfg(test)]

use contract_probe::error::RpcClientError;
use contract_probe::rpc::{BlockTag, LogFilter, RpcClient, RpcRequest};
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> RpcClient {
    RpcClient::new(&server.host(), server.port(), false)
}

#[test]
fn test_request_envelope() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("content-type", "application/json")
            .json_body(json!({
                "jsonrpc": "2.0",
                "method": "eth_getTransactionReceipt",
                "params": ["0xabcd"],
                "id": 1
            }));
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": {"status": "0x1"}}));
    });

    let request = RpcRequest::new(
        &server.host(),
        server.port(),
        "eth_getTransactionReceipt",
        json!(["0xabcd"]),
    );
    let result = request.execute().unwrap();

    mock.assert();
    assert_eq!(result, json!({"status": "0x1"}));
}

#[test]
fn test_non_200_status_is_transport_error() {
    let server = MockServer::start();
    // A well formed result doesn't matter if the status is not 200.
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x1"}));
    });

    let error = client(&server).eth_accounts().unwrap_err();
    match error {
        RpcClientError::Transport { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("\"result\""));
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[test]
fn test_error_field_is_rpc_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": ["0x01"],
            "error": {"code": -32601, "message": "Method not found"}
        }));
    });

    let error = client(&server).eth_accounts().unwrap_err();
    assert!(
        matches!(error, RpcClientError::Rpc(ref e) if e["code"] == -32601),
        "{error:?}"
    );
}

#[test]
fn test_send_transaction_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "jsonrpc": "2.0",
            "method": "personal_sendTransaction",
            "params": [
                {
                    "from": "0x01",
                    "to": null,
                    "gas": "0xf4240",
                    "gasPrice": "0x2710",
                    "data": "0x6080"
                },
                ""
            ],
            "id": 1
        }));
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0xfeed"}));
    });

    let tx_hash = client(&server)
        .personal_send_transaction("0x01", None, 1_000_000, 10_000, "0x6080")
        .unwrap();

    mock.assert();
    assert_eq!(tx_hash, json!("0xfeed"));
}

#[test]
fn test_eth_call_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "jsonrpc": "2.0",
            "method": "eth_call",
            "params": [{"to": "0x02", "data": "0x70a08231"}, "latest"],
            "id": 1
        }));
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "0x00"}));
    });

    let result = client(&server)
        .eth_call("0x02", "0x70a08231", BlockTag::Latest)
        .unwrap();

    mock.assert();
    assert_eq!(result, json!("0x00"));
}

#[test]
fn test_get_logs_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "jsonrpc": "2.0",
            "method": "eth_getLogs",
            "params": [{
                "address": "0x02",
                "fromBlock": "0x0",
                "toBlock": "latest",
                "topics": ["0xddf2", null]
            }],
            "id": 1
        }));
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": []}));
    });

    let filter = LogFilter {
        address: "0x02".to_string(),
        from_block: BlockTag::Number(0),
        to_block: BlockTag::Latest,
        topics: vec![Some("0xddf2".to_string()), None],
    };
    let logs = client(&server).eth_get_logs(&filter).unwrap();

    mock.assert();
    assert_eq!(logs, json!([]));
}

#[test]
fn test_trace_transaction_params() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/").json_body(json!({
            "jsonrpc": "2.0",
            "method": "trace_transaction",
            "params": ["0xfeed"],
            "id": 1
        }));
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": [{"type": "call"}]}));
    });

    let trace = client(&server).trace_transaction("0xfeed").unwrap();

    mock.assert();
    assert_eq!(trace, json!([{"type": "call"}]));
}

#[test]
fn test_verbose_client_returns_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": ["0x01", "0x02"]}));
    });

    let client = RpcClient::new(&server.host(), server.port(), true);
    assert_eq!(client.eth_accounts().unwrap(), json!(["0x01", "0x02"]));
}

#[test]
fn test_unreachable_node() {
    // Port 9 (discard) is not expected to run an HTTP server.
    let client = RpcClient::new("127.0.0.1", 9, false);
    let error = client.eth_accounts().unwrap_err();
    assert!(matches!(error, RpcClientError::Http(_)), "{error:?}");
}
