//! amz-wishlist-exporter - Export public Amazon wishlists to CSV

use amz_wishlist_exporter::commands::{default_output_path, ExportCommand, InfoCommand};
use amz_wishlist_exporter::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-wishlist-exporter",
    version,
    about = "Export a public Amazon wishlist to CSV",
    long_about = "Fetches every page of a public Amazon wishlist and writes the items \
                  (name, price, url, image) to a CSV file."
)]
struct Cli {
    /// ID of the wishlist (the part after /registry/wishlist/ in its URL)
    wishlist_id: String,

    /// Storefront country code (US, DE, UK) [default: US]
    country_code: Option<String>,

    /// Output file [default: amazon_wishlist_<timestamp>.csv]
    output_path: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_WISHLIST_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Stop after this many pages
    #[arg(long)]
    max_pages: Option<u32>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print the wishlist title and owner instead of exporting
    #[arg(long)]
    info: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()))
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = Some(max_pages);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let country_code = cli.country_code.unwrap_or_else(|| config.country.clone());

    if cli.info {
        let output = InfoCommand::new(config).execute(&country_code, &cli.wishlist_id).await?;
        println!("{}", output);
        return Ok(());
    }

    let output_path = cli.output_path.unwrap_or_else(|| default_output_path(config.format));

    let outcome = ExportCommand::new(config)
        .execute(&country_code, &cli.wishlist_id, &output_path)
        .await?;

    println!("Exported {} items to {}", outcome.item_count, outcome.path.display());

    Ok(())
}
