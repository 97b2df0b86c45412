use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use taste_core::DisplayRecord;
use taste_scraper::{run_search, PageOutcome, PageReport, SearchOutcome, SearchRequest};

use crate::middleware::RequestId;

use super::{map_search_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    region: String,
    results: Vec<DisplayRecord>,
    pages: Vec<PageItem>,
}

/// Status of one requested page, as reported to API clients.
#[derive(Debug, Serialize)]
pub(super) struct PageItem {
    page: u32,
    status: &'static str,
    records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<&PageReport> for PageItem {
    fn from(report: &PageReport) -> Self {
        let (status, records, error) = match &report.outcome {
            PageOutcome::Records(n) => ("ok", *n, None),
            PageOutcome::Empty => ("empty", 0, None),
            PageOutcome::Failed(e) => ("failed", 0, Some(e.to_string())),
        };
        Self {
            page: report.page,
            status,
            records,
            error,
        }
    }
}

async fn search_region(
    state: &AppState,
    req_id: &RequestId,
    query: SearchQuery,
) -> Result<SearchOutcome, ApiError> {
    let request = SearchRequest::new(query.region.as_deref().unwrap_or_default())
        .map_err(|e| map_search_error(req_id.0.clone(), &e))?;

    run_search(&state.client, &request)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), &e))
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let outcome = search_region(&state, &req_id, query).await?;

    let data = SearchData {
        region: outcome.result_set.region().to_owned(),
        results: outcome.result_set.records().to_vec(),
        pages: outcome.pages.iter().map(PageItem::from).collect(),
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Runs the search and answers with the workbook as a file download.
///
/// The server keeps no results between requests, so every download runs its
/// own five-page search and reflects the upstream ranking at that moment.
pub(super) async fn export(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, ApiError> {
    let outcome = search_region(&state, &req_id, query).await?;
    let result_set = &outcome.result_set;

    let blob = taste_export::export_workbook(result_set).map_err(|e| {
        tracing::error!(error = %e, region = result_set.region(), "workbook export failed");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to build spreadsheet")
    })?;

    let file_name = taste_export::file_name(result_set.region());
    let disposition = format!(
        "attachment; filename=\"diningcode_data.xlsx\"; filename*=UTF-8''{}",
        utf8_percent_encode(&file_name, NON_ALPHANUMERIC)
    );

    Ok((
        [
            (header::CONTENT_TYPE, blob.content_type().to_owned()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        blob.into_bytes(),
    )
        .into_response())
}
