//! Content idea handlers.

use actix_web::{HttpResponse, web};

use postdesk_shared::ApiResponse;
use postdesk_shared::dto::IdeaQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/ideas?suggested=true
pub async fn list_ideas(
    state: web::Data<AppState>,
    query: web::Query<IdeaQuery>,
) -> AppResult<HttpResponse> {
    let ideas = match query.suggested {
        Some(true) => state.ideas.suggested().await?,
        Some(false) => state
            .ideas
            .list()
            .await?
            .into_iter()
            .filter(|idea| !idea.suggested)
            .collect(),
        None => state.ideas.list().await?,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ideas)))
}
