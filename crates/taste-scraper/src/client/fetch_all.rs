//! Multi-page search loop for `DiningCodeClient`.

use std::ops::RangeInclusive;

use taste_core::RawRecord;

use crate::error::ScraperError;

use super::DiningCodeClient;

/// What happened to a single page request.
#[derive(Debug)]
pub enum PageOutcome {
    /// The page contributed this many records.
    Records(usize),
    /// The page answered 200 with no items.
    Empty,
    /// The page failed and contributed nothing.
    Failed(ScraperError),
}

#[derive(Debug)]
pub struct PageReport {
    pub page: u32,
    pub outcome: PageOutcome,
}

/// Records gathered across several pages plus a per-page account.
#[derive(Debug, Default)]
pub struct PageFetchReport {
    /// Concatenated in page order.
    pub records: Vec<RawRecord>,
    pub pages: Vec<PageReport>,
}

/// Page numbers in `pages` whose request failed outright.
#[must_use]
pub fn failed_pages(pages: &[PageReport]) -> Vec<u32> {
    pages
        .iter()
        .filter(|p| matches!(p.outcome, PageOutcome::Failed(_)))
        .map(|p| p.page)
        .collect()
}

impl PageFetchReport {
    #[must_use]
    pub fn failed_pages(&self) -> Vec<u32> {
        failed_pages(&self.pages)
    }

    #[must_use]
    pub fn empty_pages(&self) -> Vec<u32> {
        self.pages
            .iter()
            .filter(|p| matches!(p.outcome, PageOutcome::Empty))
            .map(|p| p.page)
            .collect()
    }
}

impl DiningCodeClient {
    /// Fetches every page in `pages` for `region`, one after another.
    ///
    /// A failed page never aborts the loop: its error is logged and recorded
    /// in the report, and it contributes zero records. Transport failures are
    /// treated the same as non-200 responses.
    pub async fn fetch_pages(&self, region: &str, pages: RangeInclusive<u32>) -> PageFetchReport {
        let mut report = PageFetchReport::default();

        for page in pages {
            let outcome = match self.fetch_page(region, page).await {
                Ok(records) if records.is_empty() => {
                    tracing::warn!(region, page, "no data found on page");
                    PageOutcome::Empty
                }
                Ok(records) => {
                    tracing::debug!(region, page, count = records.len(), "fetched page");
                    let count = records.len();
                    report.records.extend(records);
                    PageOutcome::Records(count)
                }
                Err(e) => {
                    tracing::warn!(region, page, error = %e, "failed to fetch page");
                    PageOutcome::Failed(e)
                }
            };
            report.pages.push(PageReport { page, outcome });
        }

        report
    }
}
