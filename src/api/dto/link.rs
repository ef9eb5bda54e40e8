//! DTOs for link creation, lookup and response endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Link, ResponseChoice, Theme};

/// Request to create a Valentine link.
///
/// Missing fields deserialize as empty strings so the registry reports them
/// in its own validation order instead of failing JSON extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateLinkRequest {
    pub slug: String,
    pub recipient_name: String,
    pub theme: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub success: bool,
    pub slug: String,
    pub full_url: String,
}

/// Query string of the availability check.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CheckSlugQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Slug parameter is required"))]
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct CheckSlugResponse {
    pub available: bool,
}

/// Public fields of a link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub slug: String,
    pub recipient_name: String,
    pub theme: Theme,
    pub responded_yes: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            slug: link.slug,
            recipient_name: link.recipient_name,
            theme: link.theme,
            responded_yes: link.responded_yes,
            created_at: link.created_at,
        }
    }
}

/// Request recording the recipient's answer.
///
/// `response` is kept as a string so an unsupported value yields a
/// validation error rather than an extraction failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RespondRequest {
    pub response: String,
}

impl RespondRequest {
    pub fn choice(&self) -> Option<ResponseChoice> {
        match self.response.as_str() {
            "yes" => Some(ResponseChoice::Yes),
            "no" => Some(ResponseChoice::No),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub success: bool,
    pub response: ResponseChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_camel_case() {
        let req: CreateLinkRequest = serde_json::from_str(
            r#"{"slug":"anna-2026","recipientName":"Anna","theme":"cute"}"#,
        )
        .unwrap();

        assert_eq!(req.slug, "anna-2026");
        assert_eq!(req.recipient_name, "Anna");
        assert_eq!(req.theme, "cute");
    }

    #[test]
    fn test_create_request_missing_fields_default() {
        let req: CreateLinkRequest = serde_json::from_str(r#"{"slug":"anna"}"#).unwrap();
        assert!(req.recipient_name.is_empty());
        assert!(req.theme.is_empty());
    }

    #[test]
    fn test_check_slug_query_requires_slug() {
        assert!(CheckSlugQuery::default().validate().is_err());
        assert!(
            CheckSlugQuery {
                slug: "anna".to_string()
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_respond_request_choice() {
        let yes = RespondRequest {
            response: "yes".to_string(),
        };
        let other = RespondRequest {
            response: "YES".to_string(),
        };

        assert_eq!(yes.choice(), Some(ResponseChoice::Yes));
        assert_eq!(other.choice(), None);
    }

    #[test]
    fn test_link_response_serialization() {
        let link = Link::new(
            7,
            "anna".to_string(),
            "Anna".to_string(),
            Theme::Elegant,
            true,
            Utc::now(),
        );
        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(json["recipientName"], "Anna");
        assert_eq!(json["theme"], "elegant");
        assert_eq!(json["respondedYes"], true);
        assert!(json.get("id").is_none());
        assert!(json["createdAt"].is_string());
    }
}
