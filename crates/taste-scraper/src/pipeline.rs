//! One region search end to end: fetch every page, then rank.
//!
//! Each call builds its own [`SearchOutcome`]; callers keep it for as long as
//! they display or export it and drop it when the next search runs.

use std::ops::RangeInclusive;

use taste_core::ResultSet;

use crate::client::{failed_pages, DiningCodeClient, PageReport};
use crate::error::SearchError;
use crate::rank::rank_records;

/// Pages requested for every search.
pub const SEARCH_PAGES: RangeInclusive<u32> = 1..=5;

/// A validated region search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    region: String,
}

impl SearchRequest {
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyRegion`] if `region` is blank.
    pub fn new(region: &str) -> Result<Self, SearchError> {
        let region = region.trim();
        if region.is_empty() {
            return Err(SearchError::EmptyRegion);
        }
        Ok(Self {
            region: region.to_owned(),
        })
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub result_set: ResultSet,
    /// One entry per requested page, in page order.
    pub pages: Vec<PageReport>,
}

impl SearchOutcome {
    #[must_use]
    pub fn failed_pages(&self) -> Vec<u32> {
        failed_pages(&self.pages)
    }
}

/// Runs a full search for `request`.
///
/// Pages are fetched sequentially; failed pages are reported in
/// [`SearchOutcome::pages`] rather than aborting the search.
///
/// # Errors
///
/// Returns [`SearchError::NoResults`] when no page yielded a single record.
pub async fn run_search(
    client: &DiningCodeClient,
    request: &SearchRequest,
) -> Result<SearchOutcome, SearchError> {
    let region = request.region();
    let report = client.fetch_pages(region, SEARCH_PAGES).await;

    if report.records.is_empty() {
        tracing::warn!(
            region,
            failed_pages = ?report.failed_pages(),
            "search returned no restaurants"
        );
        return Err(SearchError::NoResults {
            region: region.to_owned(),
            pages: report.pages,
        });
    }

    let rows = rank_records(&report.records);
    tracing::info!(region, count = rows.len(), "ranked search results");

    Ok(SearchOutcome {
        result_set: ResultSet::new(region, rows),
        pages: report.pages,
    })
}
