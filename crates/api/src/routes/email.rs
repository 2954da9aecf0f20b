//! Routes for the email template editor API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{images, layout, render, templates};
use crate::state::AppState;

/// Email template routes, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getEmailLayout", get(layout::get_email_layout))
        .route("/getAllTemplates", get(templates::get_all_templates))
        .route(
            "/getEmailTemplate/{id}",
            get(templates::get_template_by_id),
        )
        .route("/uploadEmailConfig", post(templates::upload_email_config))
        .route("/uploadImage", post(images::upload_image))
        .route("/renderTemplate", post(render::render_template))
        .route(
            "/renderAndDownloadTemplate",
            post(render::render_and_download_template),
        )
}
