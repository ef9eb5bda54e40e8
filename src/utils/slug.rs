//! Slug validation.
//!
//! A slug is a user-chosen, URL-safe identifier for a link. Validation is pure
//! and case-sensitive: input must already be lowercase, nothing is normalized.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 64;

/// Compiled slug pattern: lowercase alphanumerics with interior hyphens, 3-64 chars.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]{1,62}[a-z0-9]$").unwrap());

/// Reason a slug candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("Slug must be at least 3 characters")]
    TooShort,

    #[error("Slug must be at most 64 characters")]
    TooLong,

    #[error("Slug can only contain lowercase letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("Slug cannot start or end with a hyphen")]
    LeadingOrTrailingHyphen,
}

impl SlugError {
    /// Machine-readable reason, stable across releases.
    pub fn reason(&self) -> &'static str {
        match self {
            SlugError::TooShort => "too-short",
            SlugError::TooLong => "too-long",
            SlugError::InvalidCharacters => "invalid-characters",
            SlugError::LeadingOrTrailingHyphen => "leading-or-trailing-hyphen",
        }
    }
}

impl From<SlugError> for AppError {
    fn from(e: SlugError) -> Self {
        AppError::bad_request(
            e.to_string(),
            json!({ "field": "slug", "reason": e.reason() }),
        )
    }
}

/// Validates a slug candidate.
///
/// # Rules
///
/// - Length: 3-64 characters
/// - Allowed characters: lowercase ASCII letters, digits, hyphens
/// - Cannot start or end with a hyphen
///
/// When several rules are violated the first one in the list above is reported.
///
/// # Examples
///
/// ```
/// use valentine_links::utils::slug::{SlugError, validate_slug};
///
/// assert!(validate_slug("anna-2026").is_ok());
/// assert_eq!(validate_slug("ab"), Err(SlugError::TooShort));
/// assert_eq!(validate_slug("Anna"), Err(SlugError::InvalidCharacters));
/// assert_eq!(validate_slug("-anna"), Err(SlugError::LeadingOrTrailingHyphen));
/// ```
pub fn validate_slug(candidate: &str) -> Result<(), SlugError> {
    if SLUG_REGEX.is_match(candidate) {
        return Ok(());
    }

    let len = candidate.chars().count();

    if len < MIN_SLUG_LEN {
        return Err(SlugError::TooShort);
    }

    if len > MAX_SLUG_LEN {
        return Err(SlugError::TooLong);
    }

    if !candidate
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(SlugError::InvalidCharacters);
    }

    Err(SlugError::LeadingOrTrailingHyphen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_typical_slug() {
        assert!(validate_slug("anna-2026").is_ok());
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_slug("abc").is_ok());
        assert!(validate_slug("a-b").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        let slug = "a".repeat(64);
        assert!(validate_slug(&slug).is_ok());

        let slug = format!("a{}z", "-".repeat(62));
        assert!(validate_slug(&slug).is_ok());
    }

    #[test]
    fn test_validate_only_digits() {
        assert!(validate_slug("2026").is_ok());
    }

    #[test]
    fn test_validate_consecutive_hyphens() {
        assert!(validate_slug("my--love").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        assert_eq!(validate_slug("ab"), Err(SlugError::TooShort));
        assert_eq!(validate_slug("a"), Err(SlugError::TooShort));
        assert_eq!(validate_slug(""), Err(SlugError::TooShort));
    }

    #[test]
    fn test_validate_too_long() {
        let slug = "a".repeat(65);
        assert_eq!(validate_slug(&slug), Err(SlugError::TooLong));
    }

    #[test]
    fn test_validate_uppercase_letters() {
        assert_eq!(validate_slug("Anna"), Err(SlugError::InvalidCharacters));
    }

    #[test]
    fn test_validate_special_characters() {
        assert_eq!(validate_slug("my_love"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("my love"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("café-au-lait"), Err(SlugError::InvalidCharacters));
    }

    #[test]
    fn test_validate_leading_hyphen() {
        assert_eq!(
            validate_slug("-anna"),
            Err(SlugError::LeadingOrTrailingHyphen)
        );
    }

    #[test]
    fn test_validate_trailing_hyphen() {
        assert_eq!(
            validate_slug("anna-"),
            Err(SlugError::LeadingOrTrailingHyphen)
        );
    }

    #[test]
    fn test_validate_hyphen_edges_rejected_at_any_length() {
        assert!(validate_slug("-a").is_err());
        assert!(validate_slug("---").is_err());
        assert!(validate_slug(&format!("-{}", "a".repeat(63))).is_err());
        assert!(validate_slug(&format!("{}-", "a".repeat(70))).is_err());
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(SlugError::TooShort.reason(), "too-short");
        assert_eq!(SlugError::InvalidCharacters.reason(), "invalid-characters");
        assert_eq!(
            SlugError::LeadingOrTrailingHyphen.reason(),
            "leading-or-trailing-hyphen"
        );
    }

    #[test]
    fn test_into_app_error_carries_reason() {
        let err: AppError = SlugError::TooShort.into();

        match err {
            AppError::Validation { details, .. } => {
                assert_eq!(details["field"], "slug");
                assert_eq!(details["reason"], "too-short");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
