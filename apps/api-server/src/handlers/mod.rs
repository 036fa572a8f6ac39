//! HTTP handlers and route configuration.

mod health;
mod ideas;
mod posts;
mod views;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}/advance", web::post().to(posts::advance_post)),
            )
            .route("/ideas", web::get().to(ideas::list_ideas))
            .route("/views", web::get().to(views::default_view))
            .route("/views/{view}", web::get().to(views::render)),
    );
}

/// Malformed JSON bodies become RFC 7807 bad requests.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| error::Error::from(AppError::BadRequest(err.to_string())))
}
