use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tunegrab::SearchQuery;

#[derive(Parser)]
#[command(name = "tunegrab")]
#[command(author, version, about = "Fetch audio tracks and metadata via the media-get resolver")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a direct media URL into the scratch root
    Download {
        /// Source URL to download
        #[arg(required = true)]
        url: String,
    },

    /// Resolve and download a track through the resolver binary
    Fetch {
        /// Source page or media URL
        #[arg(required = true)]
        url: String,

        /// Display name for the destination file
        #[arg(short, long)]
        name: Option<String>,

        /// Ask the resolver to embed media tags (currently suppressed)
        #[arg(long)]
        add_media_tag: bool,
    },

    /// Query track metadata for a URL without downloading
    Meta {
        /// Source page or media URL
        #[arg(required = true)]
        url: String,
    },

    /// Search enabled platforms for songs
    Search(SearchArgs),
}

#[derive(Args)]
pub struct SearchArgs {
    /// Free-text keyword (mutually exclusive with the structured fields)
    #[arg(short, long, conflicts_with_all = ["song", "artist", "album"])]
    pub keyword: Option<String>,

    /// Song name for a structured search
    #[arg(long)]
    pub song: Option<String>,

    /// Artist for a structured search
    #[arg(long)]
    pub artist: Option<String>,

    /// Album for a structured search
    #[arg(long)]
    pub album: Option<String>,
}

impl SearchArgs {
    pub fn into_query(self) -> anyhow::Result<SearchQuery> {
        if let Some(keyword) = self.keyword {
            return Ok(SearchQuery::Keyword(keyword));
        }

        let song_name = self
            .song
            .ok_or_else(|| anyhow::anyhow!("either --keyword or --song is required"))?;

        Ok(SearchQuery::Fields {
            song_name,
            artist: self.artist.unwrap_or_default(),
            album: self.album.unwrap_or_default(),
        })
    }
}
