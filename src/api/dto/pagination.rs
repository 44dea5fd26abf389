//! Pagination query parameters shared by every list endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::repository::{DEFAULT_PAGE_SIZE, PageWindow};
use crate::error::AppError;

/// `skip`/`limit` query parameters.
///
/// Uses `serde_with` so the values parse from query strings as integers.
/// Designed to be `#[serde(flatten)]`-ed into per-resource query structs.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PageParams {
    /// Validates the parameters into a [`PageWindow`].
    ///
    /// Defaults: `skip = 0`, `limit = DEFAULT_PAGE_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `skip` is negative or `limit`
    /// is out of range.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        PageWindow::new(self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::MAX_PAGE_SIZE;

    fn params(skip: Option<i64>, limit: Option<i64>) -> PageParams {
        PageParams { skip, limit }
    }

    #[test]
    fn test_defaults() {
        let window = params(None, None).window().unwrap();
        assert_eq!(window.skip(), 0);
        assert_eq!(window.limit(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_explicit_values() {
        let window = params(Some(20), Some(50)).window().unwrap();
        assert_eq!(window.skip(), 20);
        assert_eq!(window.limit(), 50);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(params(Some(-1), None).window().is_err());
        assert!(params(None, Some(0)).window().is_err());
        assert!(params(None, Some(MAX_PAGE_SIZE + 1)).window().is_err());
    }

    #[test]
    fn test_query_string_integers_parse() {
        let p: PageParams = serde_urlencoded::from_str("skip=30&limit=15").unwrap();
        assert_eq!(p.skip, Some(30));
        assert_eq!(p.limit, Some(15));
    }
}
