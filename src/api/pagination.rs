//! Pagination utilities for list endpoints

use std::future::Future;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed)
    pub page: Option<i64>,

    /// Items per page
    pub per_page: Option<i64>,
}

impl PaginationParams {
    pub const DEFAULT_PER_PAGE: i64 = 20;

    /// Maximum allowed items per page
    pub const MAX_PER_PAGE: i64 = 100;

    /// True when the client asked for a paged listing at all.
    pub fn is_paged(&self) -> bool {
        self.page.is_some() || self.per_page.is_some()
    }

    /// Requested page, 1-indexed. Out-of-range values are rejected by
    /// [`paginate`], not clamped.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    /// Returns the clamped per_page value
    pub fn per_page(&self) -> i64 {
        self.per_page
            .unwrap_or(Self::DEFAULT_PER_PAGE)
            .clamp(1, Self::MAX_PER_PAGE)
    }

    /// Calculate SQL OFFSET
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }

    /// Calculate SQL LIMIT
    pub fn limit(&self) -> i64 {
        self.per_page()
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total_items: i64) -> Self {
        let per_page = params.per_page();
        let page = params.page();
        let total_pages = (total_items + per_page - 1) / per_page;

        Self {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(data: Vec<T>, params: &PaginationParams, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(params, total_items),
        }
    }
}

impl<T: Serialize> IntoResponse for Paginated<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Runs the paged-listing flow shared by the list endpoints.
///
/// `list` fetches the requested window (LIMIT/OFFSET), `count` supplies the
/// total row count. Both futures stay unpolled until needed: a page below 1
/// is rejected up front, a page with no items other than page 1 is rejected
/// after the window fetch, and when page 1 comes back short of a full window
/// its length already is the total, so `count` never runs.
pub async fn paginate<T, L, C>(
    params: &PaginationParams,
    list: L,
    count: C,
) -> Result<Paginated<T>, ApiError>
where
    T: Serialize,
    L: Future<Output = Result<Vec<T>, sqlx::Error>>,
    C: Future<Output = Result<i64, sqlx::Error>>,
{
    let page = params.page();
    if page < 1 {
        return Err(ApiError::not_found(format!("page {page} does not exist")));
    }

    let items = list.await?;
    if items.is_empty() && page != 1 {
        return Err(ApiError::not_found(format!("page {page} does not exist")));
    }

    let total = if page == 1 && (items.len() as i64) < params.per_page() {
        items.len() as i64
    } else {
        count.await?
    };

    Ok(Paginated::new(items, params, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<i64>, per_page: Option<i64>) -> PaginationParams {
        PaginationParams { page, per_page }
    }

    // Stand-ins for the window and count queries.
    async fn list_ok(items: Vec<i32>) -> Result<Vec<i32>, sqlx::Error> {
        Ok(items)
    }

    async fn list_unreachable() -> Result<Vec<i32>, sqlx::Error> {
        unreachable!("window fetch must not run")
    }

    async fn count_ok(total: i64) -> Result<i64, sqlx::Error> {
        Ok(total)
    }

    async fn count_unreachable() -> Result<i64, sqlx::Error> {
        unreachable!("count query must not run")
    }

    #[test]
    fn defaults_and_clamping() {
        let p = PaginationParams::default();
        assert!(!p.is_paged());
        assert_eq!(p.page(), 1);
        assert_eq!(p.per_page(), 20);
        assert_eq!(p.offset(), 0);

        let p = params(Some(3), Some(10));
        assert!(p.is_paged());
        assert_eq!(p.offset(), 20);
        assert_eq!(p.limit(), 10);

        assert_eq!(params(None, Some(1000)).per_page(), 100);
        assert_eq!(params(None, Some(0)).per_page(), 1);
    }

    #[test]
    fn meta_math() {
        let meta = PaginationMeta::new(&params(Some(2), Some(20)), 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_prev);
        assert!(meta.has_next);

        let meta = PaginationMeta::new(&params(Some(3), Some(20)), 45);
        assert!(!meta.has_next);

        let meta = PaginationMeta::new(&params(Some(1), Some(20)), 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[tokio::test]
    async fn short_first_page_skips_the_count_query() {
        let p = params(Some(1), Some(20));
        let page = paginate(&p, list_ok(vec![1, 2, 3]), count_unreachable())
            .await
            .unwrap();

        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.pagination.total_items, 3);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn full_first_page_runs_the_count_query() {
        let p = params(Some(1), Some(3));
        let page = paginate(&p, list_ok(vec![1, 2, 3]), count_ok(42))
            .await
            .unwrap();

        assert_eq!(page.pagination.total_items, 42);
        assert_eq!(page.pagination.total_pages, 14);
        assert!(page.pagination.has_next);
    }

    #[tokio::test]
    async fn page_below_one_is_not_found() {
        let p = params(Some(0), None);
        let err = paginate(&p, list_unreachable(), count_unreachable())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_later_page_is_not_found() {
        let p = params(Some(2), Some(20));
        let err = paginate(&p, list_ok(vec![]), count_ok(5))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_first_page_is_fine() {
        let p = params(Some(1), None);
        let page = paginate(&p, list_ok(vec![]), count_unreachable())
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_items, 0);
    }
}
