//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};

/// Registers a mock answering `method` with `result`.
pub fn mock_method<'a>(server: &'a MockServer, method: &str, result: Value) -> Mock<'a> {
    let method = format!("\"method\":\"{method}\"");
    server.mock(|when, then| {
        when.method(POST).path("/").body_contains(method.as_str());
        then.status(200)
            .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": result}));
    })
}

/// Writes a source file that, run by `sh` as compiler, prints `stdout` and
/// `stderr` and exits with `code`. Both are `printf` formats, so `\n` is a
/// newline.
///
/// Using `sh` as compiler avoids executing a freshly written file, which
/// fails with `ETXTBSY` when tests run in parallel.
pub fn fake_source(dir: &Path, name: &str, stdout: &str, stderr: &str, code: i32) -> PathBuf {
    let path = dir.join(name);
    let script = format!("printf '{stdout}'\nprintf '{stderr}' >&2\nexit {code}\n");
    fs::write(&path, script).unwrap();
    path
}
