//! versedial - Command-line verse lookup
//!
//! Resolves a query string against the alquran.cloud API (or a local
//! override table) and prints the verses to the terminal.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use versedial_reader::{
    query, AlQuranClient, MemoryCache, Settings, SourceMode, VerseResolver,
};

/// Command-line arguments for versedial
#[derive(Parser, Debug)]
#[command(name = "versedial")]
#[command(about = "Verse lookup over the alquran.cloud API")]
#[command(version)]
struct Args {
    /// Query string, e.g. "2:255", "112", "97:1-5", ":7" (comma-separated)
    query: String,

    /// Local override file (JSON); switches the source mode to local
    #[arg(short, long)]
    local: Option<PathBuf>,

    /// API base URL
    #[arg(long, env = "VERSEDIAL_API_URL", default_value = versedial_reader::client::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "versedial=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let settings = Settings::default_path()
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    let mode = if args.local.is_some() {
        SourceMode::Local
    } else {
        settings.source_mode
    };

    let client = AlQuranClient::with_base_url(&args.base_url);
    let cache = Arc::new(MemoryCache::new());
    let mut resolver = VerseResolver::new(client, mode, cache);

    if let Some(path) = &args.local {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read override file {}", path.display()))?;
        resolver
            .load_overrides(&raw)
            .with_context(|| format!("Invalid override file {}", path.display()))?;
        info!(path = %path.display(), "local overrides loaded");
    }

    let queries = query::parse(&args.query).context("Failed to parse query")?;
    let verses = query::run(&resolver, &queries).await;
    if verses.is_empty() {
        anyhow::bail!("No verses resolved for \"{}\"", args.query);
    }

    for verse in &verses {
        println!("{} ({})", verse.key, verse.surah_name);
        if !verse.arabic.is_empty() {
            println!("  {}", verse.arabic);
        }
        if !verse.transliteration.is_empty() {
            println!("  {}", verse.transliteration);
        }
        if !verse.text.primary.is_empty() {
            println!("  {}", verse.text.primary);
        }
        if !verse.text.secondary.is_empty() {
            println!("  {}", verse.text.secondary);
        }
        println!();
    }

    Ok(())
}
