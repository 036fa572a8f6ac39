//! Post handlers: listing, creation and workflow moves.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use postdesk_core::domain::{NewPost, Platform, PostId, WorkflowStage};
use postdesk_shared::ApiResponse;
use postdesk_shared::dto::{AdvanceStageRequest, CreatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());
    let post = state
        .posts
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let platforms = req
        .platforms
        .iter()
        .map(|name| name.parse::<Platform>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let new_post = NewPost {
        content: req.content,
        platforms,
        images: req.images,
        scheduled_date: req.scheduled_date,
    };

    let post = state.posts.create(new_post, Utc::now()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(post, "Post created")))
}

/// POST /api/posts/{id}/advance
///
/// The body is optional; without a `stage` the post moves to the next stage.
/// A body that is present but not a valid request is rejected untouched.
pub async fn advance_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = PostId::new(path.into_inner());

    let request = if body.iter().all(u8::is_ascii_whitespace) {
        AdvanceStageRequest::default()
    } else {
        serde_json::from_slice::<AdvanceStageRequest>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid advance request: {}", e)))?
    };

    let target = request
        .stage
        .map(|stage| stage.parse::<WorkflowStage>())
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let post = state
        .posts
        .advance(&id, target)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}
