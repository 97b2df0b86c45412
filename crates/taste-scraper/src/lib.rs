pub mod client;
pub mod error;
pub mod pipeline;
pub mod rank;
pub mod response;

pub use client::{DiningCodeClient, PageFetchReport, PageOutcome, PageReport};
pub use error::{ScraperError, SearchError};
pub use pipeline::{run_search, SearchOutcome, SearchRequest, SEARCH_PAGES};
pub use rank::rank_records;
