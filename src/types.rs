//! Normalized records produced by the fetch orchestrator.
//!
//! These are the stable internal shapes; the resolver's raw JSON naming is
//! confined to [`crate::resolver::dto`].

use serde::{Deserialize, Serialize};

/// Options for a resolver-mediated fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Display name used for the destination file (sanitized before use).
    pub song_name: Option<String>,
    /// Ask the resolver to embed media tags into the downloaded file.
    ///
    /// Currently suppressed at invocation time (see the orchestrator), but
    /// the requested value still participates in the cache key.
    pub add_media_tag: bool,
}

/// A metadata-only search query, in one of two mutually exclusive modes.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Free-text keyword search.
    Keyword(String),
    /// Structured song / artist / album search.
    Fields {
        song_name: String,
        artist: String,
        album: String,
    },
}

/// Metadata for a single track, normalized from resolver output.
///
/// Fields absent in the upstream JSON are left unset; unknown upstream
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub song_name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Duration in seconds.
    pub duration: Option<f64>,
    pub cover_url: Option<String>,
    pub public_time: Option<String>,
    pub is_trial: Option<bool>,
    pub resource_type: Option<String>,
    /// Available audio variants, passed through verbatim from the resolver.
    #[serde(default)]
    pub audios: Vec<serde_json::Value>,
    pub from_music_platform: Option<bool>,
    pub resource_forbidden: Option<bool>,
    /// Source platform identifier (e.g. "migu").
    pub source: Option<String>,
}

/// One entry of a multi-platform search result.
///
/// Order within a result set is the resolver's own relevance ranking and is
/// preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub song_name: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Duration in seconds.
    pub duration: Option<f64>,
    pub url: Option<String>,
    pub resource_forbidden: Option<bool>,
    /// Source platform identifier (e.g. "kuwo").
    pub source: Option<String>,
    pub from_music_platform: Option<bool>,
    /// Relevance score assigned by the resolver.
    pub score: Option<f64>,
}
