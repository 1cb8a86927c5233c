#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Page number {page} out of bound (last page is {last})")]
    OutOfRange { page: usize, last: usize },
    #[error("Result set is empty")]
    EmptySet,
}

#[derive(Debug, thiserror::Error)]
pub enum CrawlerError {
    #[error("No keywords provided")]
    NoKeywords,
    #[error("Invalid search engine: {0:?}")]
    InvalidEngine(String),
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Page(#[from] PageError),
}
