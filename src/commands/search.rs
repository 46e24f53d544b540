use anyhow::{Context, Result};
use std::io;

use sitedex::config::Config;
use sitedex::crawler::Crawler;
use sitedex::report::render_results;

/// Crawl a site and print the pages whose text contains the keyword
pub async fn search(
    config: Config,
    url: String,
    keyword: String,
    scope: Option<String>,
) -> Result<()> {
    let scope_root = scope.unwrap_or_else(|| url.clone());

    let mut crawler = Crawler::new(&config.crawler).context("Failed to create crawler")?;
    crawler.crawl_scoped(&url, &scope_root).await;

    for failure in crawler.failures() {
        eprintln!("Error crawling {}: {}", failure.url, failure.reason);
    }

    let results = crawler.index().search(&keyword);

    let stdout = io::stdout();
    render_results(&results, &mut stdout.lock()).context("Failed to write search results")?;

    Ok(())
}
