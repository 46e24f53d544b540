use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitedex::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "sitedex",
    version,
    about = "Same-site web crawler with an in-memory text index and keyword search",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl a site and report how many pages were indexed
    Crawl {
        /// Seed URL to start crawling from
        url: String,

        /// Scope root; links are followed only if their resolved URL
        /// contains this string (defaults to the seed URL)
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// Crawl a site and list the pages containing a keyword
    Search {
        /// Seed URL to start crawling from
        url: String,

        /// Keyword to look up (case-insensitive substring match)
        keyword: String,

        /// Scope root; links are followed only if their resolved URL
        /// contains this string (defaults to the seed URL)
        #[arg(short, long)]
        scope: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging
    setup_tracing(&cli.log_format, cli.verbose)?;

    let config = Config::from_env()?;

    match cli.command {
        Commands::Crawl { url, scope } => {
            tracing::info!(url = %url, scope = ?scope, "Starting crawl command");
            commands::crawl(config, url, scope).await?;
        }

        Commands::Search {
            url,
            keyword,
            scope,
        } => {
            tracing::info!(
                url = %url,
                keyword = %keyword,
                scope = ?scope,
                "Starting search command"
            );
            commands::search(config, url, keyword, scope).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("sitedex=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("sitedex=info,warn")
    };

    // Logs go to stderr; stdout is reserved for search results
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
