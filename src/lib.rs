//! # tunegrab
//!
//! Media-acquisition façade over the `media-get` command-line resolver.
//!
//! Given a source URL, a free-text keyword, or a structured
//! song/artist/album query, this crate locates, downloads, and extracts
//! metadata for audio tracks by delegating to the resolver binary and a
//! generic HTTP downloader. Artifacts land deterministically under a
//! scratch root keyed by a content hash of the request.
//!
//! ## Example
//!
//! ```no_run
//! use tunegrab::{config, MediaFetcher, SearchQuery};
//!
//! # async fn run() -> tunegrab::Result<()> {
//! let config = config::load_config_or_default(None)?;
//! let fetcher = MediaFetcher::from_config(&config)?;
//!
//! let hits = fetcher
//!     .search_all_platforms(&SearchQuery::Keyword("test".to_string()))
//!     .await?;
//! println!("{} hits", hits.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod downloader;
mod error;
pub mod fetcher;
pub mod resolver;
pub mod types;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::MediaFetcher;
pub use types::{FetchOptions, SearchHit, SearchQuery, TrackMetadata};
