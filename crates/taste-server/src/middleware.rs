use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest caller-supplied ID that is echoed back; anything longer is replaced.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Request ID for one search interaction, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Reuses the caller's `x-request-id` when it is usable, otherwise mints a
/// `UUIDv4`. The ID is inserted as a [`RequestId`] extension and echoed on
/// the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_id(req.headers().get(&REQUEST_ID_HEADER))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

fn incoming_id(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
}
