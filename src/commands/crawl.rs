use anyhow::{Context, Result};

use sitedex::config::Config;
use sitedex::crawler::Crawler;

/// Crawl a site and print a traversal summary
pub async fn crawl(config: Config, url: String, scope: Option<String>) -> Result<()> {
    println!("Starting crawl");
    println!("==============");
    println!("Seed URL: {url}");

    let scope_root = scope.unwrap_or_else(|| url.clone());
    println!("Scope root: {scope_root}");

    let mut crawler = Crawler::new(&config.crawler).context("Failed to create crawler")?;
    crawler.crawl_scoped(&url, &scope_root).await;

    for failure in crawler.failures() {
        eprintln!("Error crawling {}: {}", failure.url, failure.reason);
    }

    let stats = crawler.stats();
    println!();
    println!("Crawl finished");
    println!("  Pages indexed: {}", stats.pages_indexed);
    println!("  Pages failed:  {}", stats.pages_failed);
    println!("  URLs seen:     {}", stats.urls_seen);

    Ok(())
}
