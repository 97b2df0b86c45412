//! Extraction of result items from the search endpoint's JSON body.
//!
//! ## Observed shape
//!
//! ```text
//! {
//!   "result_code": 200,
//!   "result_data": {
//!     "poi_section": {
//!       "total_cnt": 1234,
//!       "list": [ { "nm": "...", "road_addr": "...", "score": 91, ... }, ... ]
//!     }
//!   }
//! }
//! ```
//!
//! Any level of that path may be missing (an out-of-range page comes back
//! without `poi_section`), so the body is walked as an untyped
//! [`serde_json::Value`] instead of being bound to a struct.

use serde_json::Value;
use taste_core::RawRecord;

/// Returns the items at `result_data.poi_section.list`.
///
/// A missing or non-array path yields an empty list; list entries that are
/// not JSON objects are dropped.
#[must_use]
pub fn extract_poi_list(body: Value) -> Vec<RawRecord> {
    let Value::Object(mut root) = body else {
        return Vec::new();
    };

    let list = root
        .remove("result_data")
        .and_then(|data| match data {
            Value::Object(mut data) => data.remove("poi_section"),
            _ => None,
        })
        .and_then(|section| match section {
            Value::Object(mut section) => section.remove("list"),
            _ => None,
        });

    match list {
        Some(Value::Array(items)) => items.into_iter().filter_map(RawRecord::from_value).collect(),
        _ => Vec::new(),
    }
}
