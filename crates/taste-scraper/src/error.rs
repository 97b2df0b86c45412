use thiserror::Error;

use crate::client::{failed_pages, PageReport};

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} for page {page}")]
    UnexpectedStatus { page: u32, status: u16 },

    #[error("invalid search URL \"{url}\": {reason}")]
    InvalidSearchUrl { url: String, reason: String },
}

/// Failures surfaced to whoever triggered a search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("region must not be empty")]
    EmptyRegion,

    #[error("no restaurants found for region \"{region}\"")]
    NoResults {
        region: String,
        /// One entry per requested page, each either empty or failed.
        pages: Vec<PageReport>,
    },
}

impl SearchError {
    /// Per-page reports behind a [`SearchError::NoResults`]; empty otherwise.
    #[must_use]
    pub fn pages(&self) -> &[PageReport] {
        match self {
            Self::NoResults { pages, .. } => pages,
            Self::EmptyRegion => Default::default(),
        }
    }

    /// Pages that failed outright rather than coming back empty.
    #[must_use]
    pub fn failed_pages(&self) -> Vec<u32> {
        failed_pages(self.pages())
    }
}
