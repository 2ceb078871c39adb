//! Map links for resolved places.

use numloc_core::Place;

/// Search endpoint used when a place has no explicit link.
pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps?q=";

/// `https://www.google.com/maps?q=<query>` with the query form-encoded
/// (spaces become `+`, everything outside `A-Za-z0-9*-._` is percent-encoded).
pub fn search_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{MAPS_SEARCH_BASE}{encoded}")
}

/// The place's configured link, or a search link built from its query.
pub fn place_url(place: &Place) -> String {
    match &place.url {
        Some(url) => url.clone(),
        None => search_url(&place.query),
    }
}
