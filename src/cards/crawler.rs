use super::{fields, markers, Record};
use crate::Crawler;
use scraper::Html;
use tracing::{debug, trace};

/// Extracts results from any listing page by inferring its card layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardCrawler;

impl Crawler for CardCrawler {
    fn crawl(&self, doc: &Html) -> Vec<Record> {
        let markers = markers::find_markers(doc);
        if markers.is_empty() {
            return vec![];
        }

        let cards = markers::resolve_cards(&markers.elements);
        let mut records = Vec::with_capacity(cards.len());
        for card in cards {
            let title = fields::title(card, markers.tag);
            if title.is_empty() {
                trace!("Drop card <{}> without title", card.value().name());
                continue;
            }

            records.push(Record {
                title,
                url: fields::link(card),
                description: fields::description(card),
                promoted: fields::is_promoted(card),
                rank: records.len() + 1,
            });
        }

        debug!("Extracted {} records", records.len());
        records
    }
}
