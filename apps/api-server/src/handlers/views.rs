//! View handlers - the dashboard projections as JSON.

use actix_web::{HttpResponse, web};
use chrono::Local;

use postdesk_core::views::{View, render_view};
use postdesk_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/views/{view}
pub async fn render(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let view = path.parse::<View>().map_err(AppError::from)?;
    respond(&state, view).await
}

/// GET /api/views
pub async fn default_view(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    respond(&state, View::default()).await
}

async fn respond(state: &AppState, view: View) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let ideas = state.ideas.list().await?;

    // Calendar days follow the server's local time zone.
    let model = render_view(view, &posts, &ideas, &Local::now());
    tracing::debug!(view = %view, posts = posts.len(), "Rendered view");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(model)))
}
