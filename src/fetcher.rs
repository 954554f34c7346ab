//! The fetch orchestrator: four operation modes over the resolver binary
//! and the generic downloader.
//!
//! Each operation is a single blocking round-trip to one external adapter:
//! build arguments or a download call, invoke, confirm the on-disk result,
//! normalize the output. No retries, no timeouts, no re-sorting of results.
//! Concurrent calls for different cache keys need no coordination; calls
//! for the same key race unguarded (directory creation tolerates
//! pre-existence, file writes do not).

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{self, ScratchRoot};
use crate::config::Config;
use crate::downloader::{Downloader, HttpDownloader};
use crate::resolver::{args, dto, resolver_bin_path, CommandRunner, SystemRunner};
use crate::types::{FetchOptions, SearchHit, SearchQuery, TrackMetadata};
use crate::{Error, Result};

/// Media tagging is suppressed until the resolver's intermittent crash on
/// `--addMediaTag` is fixed upstream. Callers may still request tagging
/// (and the request stays part of the cache key), but the flag is not
/// forwarded to the tool while this is `false`.
const MEDIA_TAG_ENABLED: bool = false;

/// Orchestrates media acquisition through the resolver binary and the
/// downloader, placing artifacts deterministically under a scratch root.
pub struct MediaFetcher {
    root: ScratchRoot,
    bin: PathBuf,
    sources: Vec<String>,
    runner: Arc<dyn CommandRunner>,
    downloader: Arc<dyn Downloader>,
}

impl MediaFetcher {
    /// Create a fetcher using the real subprocess and HTTP adapters.
    pub fn new(root: ScratchRoot, bin: PathBuf, sources: Vec<String>) -> Self {
        Self::with_adapters(
            root,
            bin,
            sources,
            Arc::new(SystemRunner),
            Arc::new(HttpDownloader::new()),
        )
    }

    /// Create a fetcher with injected adapters. This is the test seam: pass
    /// doubles returning canned tool output instead of spawning processes.
    pub fn with_adapters(
        root: ScratchRoot,
        bin: PathBuf,
        sources: Vec<String>,
        runner: Arc<dyn CommandRunner>,
        downloader: Arc<dyn Downloader>,
    ) -> Self {
        Self {
            root,
            bin,
            sources,
            runner,
            downloader,
        }
    }

    /// Build a fetcher from configuration: resolve the scratch root
    /// (create-if-absent) and locate the resolver binary.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = match &config.scratch_dir {
            Some(dir) => ScratchRoot::new(dir.clone())?,
            None => ScratchRoot::in_system_tmp()?,
        };
        let bin = resolver_bin_path(config.resolver_bin.as_deref())?;
        Ok(Self::new(root, bin, config.sources.clone()))
    }

    /// The scratch root artifacts are placed under.
    pub fn scratch_root(&self) -> &ScratchRoot {
        &self.root
    }

    fn tool_name(&self) -> String {
        self.bin
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.bin.display().to_string())
    }

    /// Download a direct media URL to `<root>/<key>.mp3`.
    ///
    /// Fails if the downloader reports failure or the file is absent
    /// afterward. A single failed attempt is terminal.
    pub async fn download_via_source_url(&self, url: &str) -> Result<PathBuf> {
        tracing::info!("start download from {url}");

        let key = cache::derive_key([url]);
        let dest = self.root.flat_file(&key);

        self.downloader.download(url, &dest).await?;

        if !dest.exists() {
            tracing::error!(
                "download from {url} left no file at {}",
                dest.display()
            );
            return Err(Error::artifact_missing(dest));
        }

        tracing::info!("download success, path: {}", dest.display());
        Ok(dest)
    }

    /// Resolve and download a track via the resolver binary into a
    /// per-request subdirectory.
    ///
    /// The destination is `<root>/<key>/<name>.mp3`, where `<name>` is the
    /// sanitized song name or the cache key when the name sanitizes to
    /// empty. Only the exit code and file existence matter in this mode;
    /// tool output is not parsed.
    pub async fn fetch_with_url(&self, url: &str, opts: &FetchOptions) -> Result<PathBuf> {
        let name = cache::sanitize_song_name(opts.song_name.as_deref().unwrap_or(""));
        let key = cache::derive_key([
            url,
            name.as_str(),
            if opts.add_media_tag { "true" } else { "false" },
        ]);

        let dir = self.root.request_dir(&key);
        tokio::fs::create_dir_all(&dir).await?;

        let dest = cache::track_file(&dir, &key, &name);
        let add_tag = opts.add_media_tag && MEDIA_TAG_ENABLED;
        let argv = args::fetch(url, &dest, add_tag);

        tracing::info!(
            "start parse and download from {url}: {} {}",
            self.bin.display(),
            argv.join(" ")
        );

        let out = self.runner.run(&self.bin, &argv).await?;
        tracing::debug!(code = out.code, "resolver fetch finished");

        if !out.success() {
            tracing::error!("fetch failed for {url}: {}", out.message);
            return Err(Error::tool_failed(self.tool_name(), out.code, out.message));
        }
        if !dest.exists() {
            tracing::error!(
                "resolver exited 0 for {url} but {} is missing",
                dest.display()
            );
            return Err(Error::artifact_missing(dest));
        }

        Ok(dest)
    }

    /// Query track metadata for a URL without downloading.
    pub async fn metadata_for_url(&self, url: &str) -> Result<TrackMetadata> {
        tracing::info!("get metadata for {url}");

        let argv = args::metadata(url);
        let out = self.runner.run(&self.bin, &argv).await?;

        if !out.success() {
            tracing::error!(
                code = out.code,
                "metadata query failed for {url}: {}",
                out.message
            );
            return Err(Error::tool_failed(self.tool_name(), out.code, out.message));
        }

        let raw: dto::RawTrackMeta = serde_json::from_str(out.message.trim()).map_err(|e| {
            tracing::error!("unparseable metadata for {url}: {e}; raw output: {}", out.message);
            Error::parse_error(self.tool_name(), e.to_string())
        })?;

        Ok(raw.into())
    }

    /// Search all enabled platforms for songs.
    ///
    /// Returns hits in the resolver's own ranking order; an empty result is
    /// not a failure.
    pub async fn search_all_platforms(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        tracing::info!("search songs with {query:?}");

        let argv = args::search(query, &self.sources);
        tracing::debug!("{} {}", self.bin.display(), argv.join(" "));

        let out = self.runner.run(&self.bin, &argv).await?;

        if !out.success() {
            tracing::error!(
                code = out.code,
                "search failed for {query:?}: {}",
                out.message
            );
            return Err(Error::tool_failed(self.tool_name(), out.code, out.message));
        }

        let raw: Vec<dto::RawSearchItem> =
            serde_json::from_str(out.message.trim()).map_err(|e| {
                tracing::error!("unparseable search output: {e}; raw output: {}", out.message);
                Error::parse_error(self.tool_name(), e.to_string())
            })?;

        Ok(raw.into_iter().map(SearchHit::from).collect())
    }
}
