//! HTTP client for DiningCode's region search endpoint.

mod fetch_all;
mod form;

use std::time::Duration;

use reqwest::Client;
use taste_core::{AppConfig, RawRecord};

use crate::error::ScraperError;
use crate::response::extract_poi_list;

pub use fetch_all::{failed_pages, PageFetchReport, PageOutcome, PageReport};
pub use form::PAGE_SIZE;

const SITE_ORIGIN: &str = "https://www.diningcode.com";
const SITE_REFERER: &str = "https://www.diningcode.com/";
const SEC_CH_UA: &str = r#""Brave";v="131", "Chromium";v="131", "Not_A Brand";v="24""#;

/// HTTP client for the region search endpoint.
///
/// Every request is shaped like the search form the public site submits from
/// a browser; the endpoint rejects requests without the origin headers.
/// Non-200 responses come back as [`ScraperError::UnexpectedStatus`]. Nothing
/// is retried.
pub struct DiningCodeClient {
    client: Client,
    search_url: reqwest::Url,
}

impl DiningCodeClient {
    /// Creates a client posting to `search_url` with the given request timeout
    /// and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSearchUrl`] if `search_url` does not
    /// parse, or [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        search_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let search_url =
            reqwest::Url::parse(search_url).map_err(|e| ScraperError::InvalidSearchUrl {
                url: search_url.to_owned(),
                reason: e.to_string(),
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, search_url })
    }

    /// Builds a client from the endpoint, timeout, and user agent in `config`.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            &config.search_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        self.search_url.as_str()
    }

    /// Fetches one page of search results for `region`.
    ///
    /// Exactly one POST is issued. On `200 OK` the items under
    /// `result_data.poi_section.list` are returned (empty if the path is
    /// absent).
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any status other than 200.
    /// - [`ScraperError::Http`] on network, TLS, or timeout failure.
    /// - [`ScraperError::Deserialize`] if a 200 body is not JSON.
    pub async fn fetch_page(&self, region: &str, page: u32) -> Result<Vec<RawRecord>, ScraperError> {
        let response = self
            .client
            .post(self.search_url.clone())
            .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
            .header(reqwest::header::ACCEPT_LANGUAGE, "ko-KR,ko;q=0.5")
            .header(reqwest::header::ORIGIN, SITE_ORIGIN)
            .header(reqwest::header::REFERER, SITE_REFERER)
            .header("Sec-Fetch-Dest", "empty")
            .header("Sec-Fetch-Mode", "cors")
            .header("Sec-Fetch-Site", "same-site")
            .header("Sec-GPC", "1")
            .header("sec-ch-ua", SEC_CH_UA)
            .header("sec-ch-ua-mobile", "?0")
            .header("sec-ch-ua-platform", "\"Windows\"")
            .form(&form::search_form(region, page))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                page,
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("search page {page} for region {region}"),
                source: e,
            }
        })?;

        Ok(extract_poi_list(parsed))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
