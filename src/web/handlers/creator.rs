//! Landing and link-creation pages.
//!
//! Both pages are static apart from a few constants; the creation form talks
//! to `/api/check-slug` and `/api/create-link` from the browser.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::application::services::link_service::MAX_RECIPIENT_NAME_LEN;
use crate::domain::entities::Theme;
use crate::state::AppState;
use crate::utils::slug::{MAX_SLUG_LEN, MIN_SLUG_LEN};
use crate::utils::url_builder::full_url;

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub title: &'static str,
}

/// A theme choice on the creation form.
pub struct ThemeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub checked: bool,
}

/// Template for the creation form.
///
/// `slug_pattern` mirrors the server-side slug rule so the browser can flag
/// bad input before any request is made.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub title: &'static str,
    pub url_prefix: String,
    pub slug_pattern: String,
    pub min_slug_len: usize,
    pub max_slug_len: usize,
    pub max_name_len: usize,
    pub themes: Vec<ThemeOption>,
}

impl CreateTemplate {
    fn new(url_prefix: String) -> Self {
        Self {
            title: "Create your Valentine link",
            url_prefix,
            slug_pattern: format!(
                "[a-z0-9][a-z0-9-]{{{},{}}}[a-z0-9]",
                MIN_SLUG_LEN - 2,
                MAX_SLUG_LEN - 2
            ),
            min_slug_len: MIN_SLUG_LEN,
            max_slug_len: MAX_SLUG_LEN,
            max_name_len: MAX_RECIPIENT_NAME_LEN,
            themes: Theme::ALL
                .iter()
                .map(|theme| ThemeOption {
                    value: theme.as_str(),
                    label: theme.label(),
                    description: theme.description(),
                    checked: *theme == Theme::Classic,
                })
                .collect(),
        }
    }
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> HomeTemplate {
    HomeTemplate {
        title: "Create a Valentine link they can't refuse",
    }
}

/// Renders the link creation form.
///
/// # Endpoint
///
/// `GET /create`
pub async fn create_page_handler(State(state): State<AppState>) -> CreateTemplate {
    CreateTemplate::new(full_url(state.base_url.as_ref(), ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::slug::validate_slug;
    use regex::Regex;

    #[test]
    fn test_slug_pattern_matches_server_rule() {
        let template = CreateTemplate::new("/".to_string());
        let pattern = Regex::new(&format!("^{}$", template.slug_pattern)).unwrap();

        let longest = "a".repeat(64);
        let too_long = "a".repeat(65);
        let candidates: [&str; 8] = [
            "abc", "anna-2026", &longest, "ab", &too_long, "-ab", "ab-", "Abc",
        ];

        for candidate in candidates {
            assert_eq!(
                pattern.is_match(candidate),
                validate_slug(candidate).is_ok(),
                "candidate {candidate}"
            );
        }
    }

    #[test]
    fn test_classic_is_preselected() {
        let template = CreateTemplate::new("/".to_string());

        let checked: Vec<_> = template.themes.iter().filter(|t| t.checked).collect();
        assert_eq!(checked.len(), 1);
        assert_eq!(checked[0].value, "classic");
        assert_eq!(template.themes.len(), 3);
    }
}
