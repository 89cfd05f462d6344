//! This module runs the external Solidity compiler to get the bytecode of the
//! test contracts.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::encoding::prepend_0x;
use crate::error::ContractError;

/// The compiler invoked when none is configured.
pub const DEFAULT_COMPILER: &str = "solc";

/// Wrapper around a `solc`-compatible compiler executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    /// Path or name of the compiler executable.
    program: PathBuf,
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new(DEFAULT_COMPILER)
    }
}

impl Compiler {
    /// Constructs a new [`Compiler`].
    ///
    /// # Arguments
    ///
    /// - `program`: Path or name of the compiler executable. Names are looked
    ///   up in `PATH`.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Compiler {
            program: program.into(),
        }
    }

    /// Get `program` field of [`Compiler`].
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Compiles `source` with `--bin` and returns the `0x`-prefixed bytecode.
    ///
    /// The bytecode is the last non-blank line printed by the compiler.
    ///
    /// # Arguments
    ///
    /// - `source`: The Solidity file to compile.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if:
    ///
    /// - The compiler can't be started.
    /// - The compiler exits with a non-zero status. The error contains the
    ///   compiler diagnostics.
    /// - The compiler doesn't print anything.
    pub fn compile(&self, source: &Path) -> Result<String, ContractError> {
        tracing::debug!(compiler = ?self.program, ?source, "Compiling contract");
        let output = Command::new(&self.program)
            .arg(source)
            .arg("--bin")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::error!(?source, status = %output.status, "{stderr}");
            return Err(ContractError::Compilation {
                file: source.to_path_buf(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        extract_bytecode(&stdout).ok_or_else(|| ContractError::EmptyCompilerOutput {
            file: source.to_path_buf(),
        })
    }
}

/// Returns the last non-blank line of `stdout` with a `0x` prefix.
fn extract_bytecode(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| !line.is_empty())
        .map(prepend_0x)
}
