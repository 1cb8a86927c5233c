mod crawler;
pub mod fields;
pub mod markers;

pub use crawler::CardCrawler;

use crate::Crawler;

use itertools::Itertools;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub url: String,
    pub description: String,
    pub promoted: bool,
    /// 1-based position among the records of one upstream page.
    pub rank: usize,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rank            : {}", self.rank)?;
        writeln!(f, "Title           : {}", self.title.trim())?;
        if self.url.is_empty() {
            writeln!(f, "Url             : None")?;
        } else {
            writeln!(f, "Url             : {}", self.url)?;
        }
        writeln!(
            f,
            "Description     : {}",
            self.description.split_whitespace().join(" ")
        )?;
        writeln!(f, "Promoted        : {}", self.promoted)
    }
}

/// Parses one upstream result page and extracts its records.
pub fn extract_records(html: &str) -> Vec<Record> {
    let doc = Html::parse_document(html);
    CardCrawler.crawl(&doc)
}
