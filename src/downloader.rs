//! Generic file downloader: streams a URL to a destination path.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::{Error, Result};

/// Connection timeout for download requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Streams a URL to a destination path.
///
/// On failure no file is left at the destination, so callers can rely on an
/// absence check.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// HTTP downloader backed by reqwest, streaming chunks straight to disk.
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self { client }
    }

    async fn stream_to(&self, url: &str, dest: &Path) -> Result<()> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download_failed(url, e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::download_failed(url, e.to_string()))?;

        let mut file = tokio::fs::File::create(dest).await?;
        let mut stream = resp.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::download_failed(url, e.to_string()))?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        match self.stream_to(url, dest).await {
            Ok(()) => Ok(()),
            Err(e) => {
                // Leave no partial file behind.
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }
}
