mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tunegrab::{config, FetchOptions, MediaFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "tunegrab=debug".to_string()
        } else {
            "tunegrab=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let fetcher = MediaFetcher::from_config(&config)?;

    match cli.command {
        Commands::Download { url } => {
            let path = fetcher.download_via_source_url(&url).await?;
            println!("{}", path.display());
        }
        Commands::Fetch {
            url,
            name,
            add_media_tag,
        } => {
            let opts = FetchOptions {
                song_name: name,
                add_media_tag,
            };
            let path = fetcher.fetch_with_url(&url, &opts).await?;
            println!("{}", path.display());
        }
        Commands::Meta { url } => {
            let meta = fetcher.metadata_for_url(&url).await?;
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        Commands::Search(args) => {
            let query = args.into_query()?;
            let hits = fetcher.search_all_platforms(&query).await?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
    }

    Ok(())
}
