//! The resolver-binary boundary: subprocess adapter, argument construction,
//! and raw-output shapes.
//!
//! The resolver (`media-get`) is an opaque external tool. Its CLI flag
//! contract lives in [`args`], its JSON naming in [`dto`]; nothing outside
//! this module depends on either.

pub mod args;
pub(crate) mod dto;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{Error, Result};

/// Name of the resolver binary looked up on PATH when no path is configured.
pub const DEFAULT_RESOLVER_BIN: &str = "media-get";

/// Captured outcome of one resolver invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit code. Non-zero is a normal, reportable outcome.
    pub code: i32,
    /// Combined stdout and stderr text.
    pub message: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Subprocess adapter for the resolver binary.
///
/// A non-zero exit code is returned inside [`ToolOutput`], never as an
/// `Err`; only failures to spawn the process are errors. Implementations
/// must capture stdout and stderr combined as text.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, bin: &Path, args: &[String]) -> Result<ToolOutput>;
}

/// Runs the resolver binary as a real subprocess via `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, bin: &Path, args: &[String]) -> Result<ToolOutput> {
        let output = tokio::process::Command::new(bin)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(bin.to_string_lossy())
                } else {
                    Error::Io(e)
                }
            })?;

        let mut message = String::from_utf8_lossy(&output.stdout).into_owned();
        message.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolOutput {
            code: output.status.code().unwrap_or(-1),
            message,
        })
    }
}

/// Resolve the path to the resolver binary, preferring a configured path
/// over PATH lookup.
pub fn resolver_bin_path(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    which::which(DEFAULT_RESOLVER_BIN).map_err(|_| Error::tool_not_found(DEFAULT_RESOLVER_BIN))
}
