//! Handlers for link creation, availability, lookup and response endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{
    CheckSlugQuery, CheckSlugResponse, CreateLinkRequest, CreateLinkResponse, LinkResponse,
    RespondRequest, RespondResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_builder::full_url;

/// Creates a Valentine link.
///
/// # Endpoint
///
/// `POST /api/create-link`
///
/// # Request Body
///
/// ```json
/// { "slug": "anna-2026", "recipientName": "Anna", "theme": "cute" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "success": true, "slug": "anna-2026", "fullUrl": "/anna-2026" }
/// ```
///
/// # Errors
///
/// - 400 `validation_error` with `details.field` / `details.reason`;
///   a body that is not JSON or has non-string fields reports `invalid-body`
/// - 409 `conflict` if the slug is taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload?;

    let link = state
        .link_service
        .create_link(&payload.slug, &payload.recipient_name, &payload.theme)
        .await?;

    let full_url = full_url(state.base_url.as_ref(), &link.slug);

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            success: true,
            slug: link.slug,
            full_url,
        }),
    ))
}

/// Reports whether a slug is still free.
///
/// # Endpoint
///
/// `GET /api/check-slug?slug={slug}`
///
/// # Response
///
/// ```json
/// { "available": true }
/// ```
///
/// # Errors
///
/// Returns 400 if the slug is missing or malformed.
pub async fn check_slug_handler(
    State(state): State<AppState>,
    Query(query): Query<CheckSlugQuery>,
) -> Result<Json<CheckSlugResponse>, AppError> {
    query.validate()?;

    let availability = state.link_service.check_availability(&query.slug).await?;

    Ok(Json(CheckSlugResponse {
        available: availability.is_available(),
    }))
}

/// Returns the public fields of a link.
///
/// # Endpoint
///
/// `GET /api/link/{slug}`
///
/// # Errors
///
/// Returns 404 if no link has this slug.
pub async fn get_link_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link_by_slug(&slug).await?;

    Ok(Json(link.into()))
}

/// Records the recipient's answer.
///
/// # Endpoint
///
/// `POST /api/link/{slug}/respond`
///
/// # Request Body
///
/// ```json
/// { "response": "yes" }
/// ```
///
/// "yes" marks the link as accepted; "no" is acknowledged without any
/// persisted effect. Both return `{ "success": true, "response": ... }`.
///
/// # Errors
///
/// - 400 if `response` is neither `"yes"` nor `"no"`, or the body is not JSON
/// - 404 if no link has this slug
pub async fn respond_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<RespondRequest>, JsonRejection>,
) -> Result<Json<RespondResponse>, AppError> {
    let Json(payload) = payload?;

    let choice = payload.choice().ok_or_else(|| {
        AppError::bad_request(
            "Response must be 'yes' or 'no'",
            json!({ "field": "response", "reason": "invalid-response" }),
        )
    })?;

    state.link_service.record_response(&slug, choice).await?;

    Ok(Json(RespondResponse {
        success: true,
        response: choice,
    }))
}
