//! Page slicing for listing endpoints

use serde::Deserialize;

/// Questions returned per page on every listing endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed; anything below 1 selects nothing)
    pub page: i64,
    /// Items per page
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: i64, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Offset of the first item on this page, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        let index = usize::try_from(self.page.checked_sub(1)?).ok()?;
        index.checked_mul(self.per_page)
    }

    /// Take this page's window out of an ordered list.
    ///
    /// Pages past the end yield an empty list rather than an error.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let Some(start) = self.offset() else {
            return Vec::new();
        };
        items.into_iter().skip(start).take(self.per_page).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// Query parameters for pagination
///
/// `page` is kept as raw text: a value that is not an integer falls back
/// to the first page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        let page = params
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(1);
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str) -> PaginationParams {
        PaginationParams {
            page: Some(page.to_string()),
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), Some(0));
        assert_eq!(Pagination::new(2, 10).offset(), Some(10));
        assert_eq!(Pagination::new(3, 25).offset(), Some(50));
        assert_eq!(Pagination::new(0, 10).offset(), None);
        assert_eq!(Pagination::new(-4, 10).offset(), None);
    }

    #[test]
    fn slices_first_and_partial_pages() {
        let items: Vec<u32> = (1..=23).collect();

        let first = Pagination::new(1, 10).slice(items.clone());
        assert_eq!(first, (1..=10).collect::<Vec<_>>());

        let last = Pagination::new(3, 10).slice(items);
        assert_eq!(last, vec![21, 22, 23]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(Pagination::new(2, 10).slice(items.clone()).is_empty());
        assert!(Pagination::new(256, 10).slice(items).is_empty());
    }

    #[test]
    fn page_below_one_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(Pagination::new(0, 10).slice(items.clone()).is_empty());
        assert!(Pagination::new(-1, 10).slice(items).is_empty());
    }

    #[test]
    fn params_default_to_first_page() {
        assert_eq!(Pagination::from(PaginationParams::default()).page, 1);
        assert_eq!(Pagination::from(params("abc")).page, 1);
        assert_eq!(Pagination::from(params("3")).page, 3);
        assert_eq!(
            Pagination::from(params("2")).per_page,
            QUESTIONS_PER_PAGE
        );
    }
}
