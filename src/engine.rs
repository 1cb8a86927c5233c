use crate::CrawlerError;
use itertools::Itertools;
use lazy_regex::regex;

/// Base URL of a search engine and the query URLs built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    base: String,
    results_per_page: usize,
}

impl SearchEngine {
    /// Drops a trailing slash and defaults the scheme to `https`.
    pub fn new(engine: &str) -> Result<Self, CrawlerError> {
        let trimmed = engine.strip_suffix('/').unwrap_or(engine);
        if trimmed.is_empty() {
            return Err(CrawlerError::InvalidEngine(engine.to_string()));
        }

        let base = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        };
        Ok(Self {
            base,
            results_per_page: 10,
        })
    }

    pub fn with_results_per_page(mut self, results_per_page: usize) -> Self {
        self.results_per_page = results_per_page;
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Query URL for upstream result page `page`, counted from 0.
    pub fn build_url<S: AsRef<str>>(
        &self,
        keywords: &[S],
        page: usize,
    ) -> Result<String, CrawlerError> {
        if keywords.is_empty() {
            return Err(CrawlerError::NoKeywords);
        }

        let query = keywords.iter().map(AsRef::as_ref).join("+");
        let query = regex!(r"\s").replace_all(&query, "+");
        let url = if page == 0 {
            format!(
                "{}/search?q={}&num={}",
                self.base, query, self.results_per_page
            )
        } else {
            format!(
                "{}/search?q={}&num={}&start={}",
                self.base,
                query,
                self.results_per_page,
                page * self.results_per_page
            )
        };
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_engine_gets_https_scheme() {
        let engine = SearchEngine::new("google.com").expect("Valid engine");
        assert_eq!(engine.base(), "https://google.com");
    }

    #[test]
    fn test_engine_trailing_slash_removed() {
        let engine = SearchEngine::new("google.com/").expect("Valid engine");
        assert_eq!(engine.base(), "https://google.com");
    }

    #[test]
    fn test_engine_keeps_existing_scheme() {
        let engine = SearchEngine::new("http://google.com/").expect("Valid engine");
        assert_eq!(engine.base(), "http://google.com");
    }

    #[test]
    fn test_engine_cannot_be_empty() {
        assert!(matches!(
            SearchEngine::new(""),
            Err(CrawlerError::InvalidEngine(_))
        ));
        assert!(matches!(
            SearchEngine::new("/"),
            Err(CrawlerError::InvalidEngine(_))
        ));
    }

    #[test]
    fn test_first_page_url() {
        let engine = SearchEngine::new("google.com").expect("Valid engine");
        let url = engine
            .build_url(&["Query", "parameter"], 0)
            .expect("Valid url");
        assert_eq!(url, "https://google.com/search?q=Query+parameter&num=10");
    }

    #[test]
    fn test_later_page_url_has_start_offset() {
        let engine = SearchEngine::new("google.com").expect("Valid engine");
        let url = engine
            .build_url(&["web crawler", "rust"], 2)
            .expect("Valid url");
        assert_eq!(
            url,
            "https://google.com/search?q=web+crawler+rust&num=10&start=20"
        );

        let engine = engine.with_results_per_page(20);
        let url = engine.build_url(&["rust"], 3).expect("Valid url");
        assert_eq!(url, "https://google.com/search?q=rust&num=20&start=60");
    }

    #[test]
    fn test_no_keywords() {
        let engine = SearchEngine::new("google.com").expect("Valid engine");
        let keywords: [&str; 0] = [];
        assert!(matches!(
            engine.build_url(&keywords, 2),
            Err(CrawlerError::NoKeywords)
        ));
    }
}
