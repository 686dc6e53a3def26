//! URL helpers shared by the place form and quick links.

/// Make a user-typed URL absolute.
///
/// Empty (or whitespace) stays empty. Values already starting with
/// `http://` or `https://` (any case) are returned trimmed; everything else
/// gets an `https://` prefix.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}

/// Google Maps search URL for `"<place>, <city>"`.
#[must_use]
pub fn google_maps_search_link(place_name: &str, city_name: &str) -> String {
    let query = format!("{place_name}, {city_name}");
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(&query)
    )
}
