//! Paginated list envelope and overflow detection.
//!
//! Listing endpoints return a page of items together with the exact total
//! count and a flag telling whether a next page exists. The flag comes from
//! fetching one row more than the page size instead of running a second
//! existence query; the extra row is dropped before returning.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A page of results.
///
/// # JSON Example
///
/// ```json
/// {
///   "items": [ ... ],
///   "total_count": 57,
///   "has_more": true
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ListResult<T> {
    /// The requested page, at most `size` items
    pub items: Vec<T>,

    /// Exact number of records matching the query, independent of paging
    pub total_count: i64,

    /// Whether at least one more record exists past this page
    pub has_more: bool,
}

impl<T> ListResult<T> {
    /// Build a page from an overfetched row set.
    ///
    /// `rows` must have been fetched with `LIMIT items_per_page + 1`; if the
    /// extra row is present it is dropped and `has_more` is set.
    pub fn from_overfetch(mut rows: Vec<T>, items_per_page: usize, total_count: i64) -> Self {
        let has_more = rows.len() > items_per_page;
        rows.truncate(items_per_page);

        Self {
            items: rows,
            total_count,
            has_more,
        }
    }
}

/// Query-string parameters shared by all listing endpoints.
///
/// Both parameters are optional: `?page=2&size=10`, `?page=1`, or nothing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Zero-based page index (defaults to 0)
    #[serde(default)]
    pub page: i64,

    /// Page size (defaults to 20)
    #[serde(default = "default_page_size")]
    pub size: i64,
}

/// Default page size when not specified in the query string.
fn default_page_size() -> i64 {
    20
}

impl ListQuery {
    /// Validate pagination bounds at the handler boundary.
    ///
    /// A zero or negative size and a negative page are precondition
    /// violations; the overfetch logic never sees them.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page < 0 {
            return Err(AppError::InvalidRequest(
                "Page index must not be negative".to_string(),
            ));
        }

        if self.size <= 0 {
            return Err(AppError::InvalidRequest(
                "Page size must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overfetch_with_extra_row_sets_has_more_and_trims() {
        // 3 rows fetched for a page size of 2 (LIMIT 2 + 1)
        let result = ListResult::from_overfetch(vec![1, 2, 3], 2, 3);

        assert_eq!(result.items, vec![1, 2]);
        assert_eq!(result.total_count, 3);
        assert!(result.has_more);
    }

    #[test]
    fn overfetch_without_extra_row_keeps_all_items() {
        let result = ListResult::from_overfetch(vec![1], 2, 3);

        assert_eq!(result.items, vec![1]);
        assert!(!result.has_more);
    }

    #[test]
    fn exactly_full_page_is_not_more() {
        // 2 rows for page size 2: full page, but nothing beyond it
        let result = ListResult::from_overfetch(vec![1, 2], 2, 2);

        assert_eq!(result.items.len(), 2);
        assert!(!result.has_more);
    }

    #[test]
    fn page_beyond_the_end_is_empty() {
        let result = ListResult::<i32>::from_overfetch(vec![], 2, 3);

        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 3);
        assert!(!result.has_more);
    }

    #[test]
    fn zero_size_is_rejected_at_the_boundary() {
        let query = ListQuery { page: 0, size: 0 };
        assert!(query.validate().is_err());

        let query = ListQuery { page: -1, size: 20 };
        assert!(query.validate().is_err());

        let query = ListQuery { page: 0, size: 20 };
        assert!(query.validate().is_ok());
    }
}
