use futures::{stream, StreamExt};
use scraper::Html;
use tracing::{debug, info, warn};

pub mod cards;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod result_set;

mod utils;

pub use cards::{CardCrawler, Record};
pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::{CrawlerError, PageError};
pub use fetch::{Fetch, HttpFetcher};
pub use result_set::ResultSet;

pub trait Crawler {
    /// Records found on one upstream result page, ranked from 1.
    fn crawl(&self, doc: &Html) -> Vec<Record>;
}

/// Fetches `config.upstream_pages` result pages for `keywords` and collects
/// every record into one `ResultSet`.
///
/// Pages may be fetched concurrently but are always appended in upstream
/// order. A page that fails to download contributes nothing.
pub async fn run_search<F, C, S>(
    engine: &SearchEngine,
    fetcher: &F,
    crawler: &C,
    keywords: &[S],
    config: &SearchConfig,
) -> Result<ResultSet, CrawlerError>
where
    F: Fetch + ?Sized,
    C: Crawler,
    S: AsRef<str>,
{
    let urls = (0..config.upstream_pages)
        .map(|page| engine.build_url(keywords, page))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Search {} upstream pages on {}", urls.len(), engine.base());

    let pages = stream::iter(urls)
        .map(move |url| async move {
            let html = fetcher.fetch(&url).await;
            (url, html)
        })
        .buffered(config.concurrency.max(1));
    futures::pin_mut!(pages);

    let mut result_set = ResultSet::new(config.page_size);
    while let Some((url, html)) = pages.next().await {
        match html {
            Ok(html) => {
                let records = {
                    let doc = Html::parse_document(&html);
                    crawler.crawl(&doc)
                };
                debug!("{} records from {}", records.len(), url);
                result_set.extend(records);
            }
            Err(e) => warn!("Failed to fetch {}: {}", url, e),
        }
    }

    info!("Collected {} records", result_set.len());
    Ok(result_set)
}
