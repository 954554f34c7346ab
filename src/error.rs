//! Error types for tunegrab.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching media or metadata.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolver binary is not available.
    #[error("tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The resolver binary exited with a non-zero status.
    #[error("tool execution failed: {tool} (exit code {code}): {message}")]
    ToolFailed {
        tool: String,
        code: i32,
        message: String,
    },

    /// Failed to parse tool output.
    #[error("failed to parse {tool} output: {message}")]
    ParseError { tool: String, message: String },

    /// The producing step reported success but the expected file is absent.
    #[error("expected artifact missing: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The downloader could not stream the URL to disk.
    #[error("download failed for {url}: {message}")]
    DownloadFailed { url: String, message: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a tool not found error.
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a tool execution failed error.
    pub fn tool_failed(tool: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            code,
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse_error(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create an artifact missing error.
    pub fn artifact_missing(path: impl Into<PathBuf>) -> Self {
        Self::ArtifactMissing { path: path.into() }
    }

    /// Create a download failed error.
    pub fn download_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            message: message.into(),
        }
    }
}
