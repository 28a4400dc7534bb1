//! Content management API handlers
//!
//! - POST /api/v1/content - Save a new item
//! - GET /api/v1/content - List the caller's items
//! - DELETE /api/v1/content - Delete one of the caller's items

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use brain_auth::AuthUser;
use brain_common::{Error, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::ContentState;
use crate::domain::entities::{Content, ContentType};

/// Request for saving content
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContentRequest {
    #[validate(length(min = 3, max = 300))]
    pub title: String,

    #[validate(length(min = 3, max = 400))]
    pub link: String,

    #[serde(rename = "type")]
    pub content_type: ContentType,
}

/// Request for deleting content
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteContentRequest {
    #[serde(default)]
    pub content_id: Option<String>,
}

impl DeleteContentRequest {
    /// Parse a possibly empty body; no body means no content ID.
    fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected delete request body");
            Error::Validation("Invalid request body".to_string())
        })
    }
}

/// Content response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub tags: Vec<Uuid>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Content> for ContentResponse {
    fn from(c: Content) -> Self {
        Self {
            id: c.id,
            title: c.title,
            link: c.link,
            content_type: c.content_type,
            tags: c.tags,
            user_id: c.user_id,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContentListResponse {
    pub content: Vec<ContentResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreatedContentResponse {
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Save content for the authenticated user
pub async fn create_content(
    AuthUser(ctx): AuthUser,
    State(state): State<ContentState>,
    ValidatedJson(req): ValidatedJson<CreateContentRequest>,
) -> Result<(StatusCode, Json<CreatedContentResponse>)> {
    let content = Content::new(ctx.user_id, req.title, req.link, req.content_type);
    let created = state.content.create(&content).await?;

    tracing::info!(user_id = %ctx.user_id, content_id = %created.id, "Content created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedContentResponse {
            message: "Content created successfully".to_string(),
            id: created.id,
        }),
    ))
}

/// List content owned by the authenticated user
pub async fn list_content(
    AuthUser(ctx): AuthUser,
    State(state): State<ContentState>,
) -> Result<Json<ContentListResponse>> {
    let content = state.content.list_by_owner(ctx.user_id).await?;

    Ok(Json(ContentListResponse {
        content: content.into_iter().map(Into::into).collect(),
    }))
}

/// Delete content by ID.
///
/// Succeeds whether or not a record matched, so another user's IDs cannot be probed.
pub async fn delete_content(
    AuthUser(ctx): AuthUser,
    State(state): State<ContentState>,
    body: Bytes,
) -> Result<Json<MessageResponse>> {
    let req = DeleteContentRequest::from_body(&body)?;

    let raw_id = req
        .content_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::Validation("Content ID is required".to_string()))?;

    let content_id = Uuid::parse_str(raw_id)
        .map_err(|_| Error::Validation("Invalid content ID".to_string()))?;

    let removed = state
        .content
        .delete_for_owner(content_id, ctx.user_id)
        .await?;

    tracing::info!(
        user_id = %ctx.user_id,
        content_id = %content_id,
        removed,
        "Content delete requested"
    );

    Ok(Json(MessageResponse {
        message: "Content deleted successfully".to_string(),
    }))
}
