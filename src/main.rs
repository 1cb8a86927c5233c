use clap::Parser;
use itertools::Itertools;
use search_result_crawler::{
    run_search, CardCrawler, HttpFetcher, Record, SearchConfig, SearchEngine,
};
use std::time::Duration;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Search a web search engine and print the results it lists.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Keywords to search for
    #[arg(required = true)]
    keywords: Vec<String>,

    /// Search engine host or base url
    #[arg(long, default_value = search_result_crawler::config::DEFAULT_ENGINE)]
    engine: String,

    /// Number of upstream result pages to fetch
    #[arg(long, default_value_t = 5)]
    pages: usize,

    /// Records per result page
    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Upstream pages fetched at once
    #[arg(long, default_value_t = 1)]
    concurrency: usize,

    /// Minimum delay between two requests, in milliseconds
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,

    /// Print only this result page
    #[arg(long)]
    page: Option<usize>,

    /// Print records as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            engine: self.engine.clone(),
            upstream_pages: self.pages,
            page_size: self.page_size,
            concurrency: self.concurrency,
            request_delay: Duration::from_millis(self.delay_ms),
            ..SearchConfig::default()
        }
    }
}

fn print_records(records: &[Record], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        println!("{}", records.iter().map(ToString::to_string).join("\n"));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    let config = args.config();

    let engine = SearchEngine::new(&config.engine)?
        .with_results_per_page(config.results_per_upstream_page);
    let fetcher = HttpFetcher::new(&config)?;

    let mut result_set =
        run_search(&engine, &fetcher, &CardCrawler, args.keywords.as_slice(), &config).await?;

    match args.page {
        Some(n) => {
            let records = result_set.page(n)?;
            print_records(&records, args.json)?;
            info!(
                "Page {} of {} ({} records)",
                n,
                result_set.last_page_index(),
                result_set.len()
            );
        }
        None => print_records(result_set.records(), args.json)?,
    }

    Ok(())
}
