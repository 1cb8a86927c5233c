use crate::{cards::Record, error::PageError};

/// Ordered records of a finished search, read through fixed-size pages.
///
/// Only pages `1..=len / per_page` are addressable: a trailing partial page
/// is never returned. The current page index moves while a page is read,
/// but only as long as it is still below that last page index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<Record>,
    per_page: usize,
    current_page: usize,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PER_PAGE)
    }
}

impl ResultSet {
    pub const DEFAULT_PER_PAGE: usize = 10;

    pub fn new(per_page: usize) -> Self {
        Self {
            records: vec![],
            per_page: per_page.max(1),
            current_page: 1,
        }
    }

    pub fn from_records(records: Vec<Record>, per_page: usize) -> Self {
        let mut set = Self::new(per_page);
        set.records = records;
        set
    }

    pub(crate) fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn last_page_index(&self) -> usize {
        self.records.len() / self.per_page
    }

    pub fn page(&mut self, number: usize) -> Result<Vec<Record>, PageError> {
        if self.records.is_empty() {
            return Err(PageError::EmptySet);
        }
        let last = self.last_page_index();
        if number == 0 || number > last {
            return Err(PageError::OutOfRange { page: number, last });
        }

        let offset = (number - 1) * self.per_page;
        let end = (offset + self.per_page).min(self.records.len());
        // The cursor steps past every record of the page except the last one read.
        for key in offset..end - 1 {
            self.advance(key);
        }
        Ok(self.records[offset..end].to_vec())
    }

    fn advance(&mut self, key: usize) {
        if self.last_page_index() > self.current_page {
            self.current_page = key / self.per_page + 1;
        }
    }

    /// Empty once the cursor sits on the last page.
    pub fn next_page(&mut self) -> Result<Vec<Record>, PageError> {
        if self.last_page_index() != self.current_page {
            return self.page(self.current_page + 1);
        }
        Ok(vec![])
    }

    /// Reads the page after the cursor, not the one before it.
    /// Empty while the cursor is on page 1.
    pub fn prev_page(&mut self) -> Result<Vec<Record>, PageError> {
        if self.current_page > 1 {
            return self.page(self.current_page + 1);
        }
        Ok(vec![])
    }

    pub fn first_page(&mut self) -> Result<Vec<Record>, PageError> {
        self.page(1)
    }

    pub fn last_page(&mut self) -> Result<Vec<Record>, PageError> {
        self.page(self.last_page_index())
    }
}
