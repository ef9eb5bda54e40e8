//! Public URL construction for Valentine links.

use url::Url;

/// Errors raised while parsing the configured public base URL.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("Invalid base URL: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS base URLs are allowed")]
    UnsupportedProtocol,
}

/// Parses and checks a public base URL such as `https://valentine.example`.
///
/// The path is reset to `/` so links are always built at the origin root.
pub fn parse_base_url(input: &str) -> Result<Url, BaseUrlError> {
    let mut url = Url::parse(input).map_err(|e| BaseUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(BaseUrlError::UnsupportedProtocol),
    }

    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// Builds the shareable URL for a slug.
///
/// Without a base URL the result is the root-relative path `/{slug}`.
///
/// # Examples
///
/// ```
/// use valentine_links::utils::url_builder::{full_url, parse_base_url};
///
/// assert_eq!(full_url(None, "anna-2026"), "/anna-2026");
///
/// let base = parse_base_url("https://valentine.example").unwrap();
/// assert_eq!(full_url(Some(&base), "anna-2026"), "https://valentine.example/anna-2026");
/// ```
pub fn full_url(base: Option<&Url>, slug: &str) -> String {
    match base.and_then(|b| b.join(slug).ok()) {
        Some(url) => url.to_string(),
        None => format!("/{}", slug),
    }
}
