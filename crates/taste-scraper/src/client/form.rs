//! Form body of a region search request.

/// Results per page requested from the endpoint.
pub const PAGE_SIZE: u32 = 20;

/// Fixed bias coordinates sent with every search.
const SEARCH_LAT: &str = "37.487463640486666";
const SEARCH_LNG: &str = "127.12048655383519";

/// Builds the form fields for page `page` of a search for `region`.
///
/// Field order and the empty placeholders match what the public search page
/// submits; the endpoint ignores requests missing any of them.
pub(super) fn search_form(region: &str, page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("query", region.to_owned()),
        ("addr", String::new()),
        ("keyword", String::new()),
        ("order", "r_score".to_owned()),
        ("distance", String::new()),
        ("rn_search_flag", "on".to_owned()),
        ("search_type", "poi_search".to_owned()),
        ("lat", SEARCH_LAT.to_owned()),
        ("lng", SEARCH_LNG.to_owned()),
        ("rect", String::new()),
        ("s_type", String::new()),
        ("token", String::new()),
        ("mode", "poi".to_owned()),
        ("dc_flag", "1".to_owned()),
        ("page", page.to_string()),
        ("size", PAGE_SIZE.to_string()),
    ]
}
