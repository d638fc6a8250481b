use serde::Serialize;

/// Per-collection filters built from query-string parameters.
///
/// Empty parameter values count as absent.
///
pub mod filters;

pub use filters::{AccountFilter, CardFilter, LoanFilter, TransactionFilter};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// A page or limit outside its declared bounds, a malformed date bound, or an
/// unparsable query string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid query parameter `{param}`: {message}")]
pub struct InvalidQuery {
    pub param: &'static str,
    pub message: String,
}

impl InvalidQuery {
    pub fn new(param: &'static str, message: impl Into<String>) -> Self {
        Self {
            param,
            message: message.into(),
        }
    }
}

/// A validated 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Applies defaults to missing values and rejects out-of-range ones.
    /// Values are never clamped.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Result<Self, InvalidQuery> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(p) if p >= 1 => p as u64,
            Some(_) => {
                return Err(InvalidQuery::new(
                    "page",
                    "ensure this value is greater than or equal to 1",
                ))
            }
        };
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(l) if l < 1 => {
                return Err(InvalidQuery::new(
                    "limit",
                    "ensure this value is greater than or equal to 1",
                ))
            }
            Some(l) if l as u64 > MAX_LIMIT => {
                return Err(InvalidQuery::new(
                    "limit",
                    format!("ensure this value is less than or equal to {MAX_LIMIT}"),
                ))
            }
            Some(l) => l as u64,
        };

        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of filtered records that precede this page.
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.limit);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// The uniform list response envelope.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// Count of records matching the filter, before windowing.
    pub total: usize,
    pub page: u64,
    pub limit: u64,
}

/// A predicate over records; every populated criterion must hold.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct All;

impl<T> Filter<T> for All {
    fn matches(&self, _: &T) -> bool {
        true
    }
}

/// Applies `filter` to `items` in order and keeps the requested window.
pub fn paginate<'a, T, I, F>(items: I, filter: &F, page: PageRequest) -> Paginated<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Filter<T> + ?Sized,
{
    let offset = page.offset();
    let limit = page.limit() as usize;

    let mut total = 0;
    let mut data = Vec::new();
    for item in items.into_iter().filter(|item| filter.matches(item)) {
        if total >= offset && data.len() < limit {
            data.push(item.clone());
        }
        total += 1;
    }

    Paginated {
        data,
        total,
        page: page.page(),
        limit: page.limit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Filter<u32> for Even {
        fn matches(&self, item: &u32) -> bool {
            item % 2 == 0
        }
    }

    fn page(page: i64, limit: i64) -> PageRequest {
        PageRequest::new(Some(page), Some(limit)).unwrap()
    }

    #[test]
    fn defaults_to_first_page_of_twenty() {
        let req = PageRequest::new(None, None).unwrap();
        assert_eq!(req, PageRequest::default());
        assert_eq!((req.page(), req.limit(), req.offset()), (1, 20, 0));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(PageRequest::new(Some(0), None).unwrap_err().param, "page");
        assert_eq!(PageRequest::new(Some(-3), None).unwrap_err().param, "page");
        assert_eq!(PageRequest::new(None, Some(101)).unwrap_err().param, "limit");
        assert_eq!(PageRequest::new(None, Some(0)).unwrap_err().param, "limit");
        assert!(PageRequest::new(Some(1), Some(100)).is_ok());
        assert!(PageRequest::new(Some(1), Some(1)).is_ok());
    }

    #[test]
    fn window_size_matches_formula() {
        let items: Vec<u32> = (0..47).collect();
        for limit in [1, 5, 20, 47, 100] {
            for p in 1..=12 {
                let result = paginate(&items, &All, page(p, limit));
                let expected = (limit as usize).min(47usize.saturating_sub((p as usize - 1) * limit as usize));
                assert_eq!(result.data.len(), expected, "page {p} limit {limit}");
                assert_eq!(result.total, 47);
            }
        }
    }

    #[test]
    fn window_follows_insertion_order() {
        let items: Vec<u32> = (0..10).collect();
        let result = paginate(&items, &All, page(2, 3));
        assert_eq!(result.data, vec![3, 4, 5]);
        assert_eq!((result.page, result.limit), (2, 3));
    }

    #[test]
    fn total_counts_filtered_records() {
        let items: Vec<u32> = (0..10).collect();
        let result = paginate(&items, &Even, page(1, 2));
        assert_eq!(result.data, vec![0, 2]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        let result = paginate(&items, &Even, page(4, 2));
        assert!(result.data.is_empty());
        assert_eq!(result.total, 5);

        let huge = paginate(&items, &All, page(i64::MAX, 100));
        assert!(huge.data.is_empty());
        assert_eq!(huge.total, 10);
    }
}
