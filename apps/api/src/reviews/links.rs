//! Google Maps review links.

use url::Url;

const WRITE_REVIEW_URL: &str = "https://search.google.com/local/writereview";

/// Builds the "write a review" URL for a Google Maps place id.
pub fn write_review_url(place_id: &str) -> Result<String, url::ParseError> {
    let url = Url::parse_with_params(WRITE_REVIEW_URL, &[("placeid", place_id.trim())])?;
    Ok(url.into())
}
