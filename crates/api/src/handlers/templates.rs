//! Handlers for template configuration CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use maildeck_core::error::CoreError;
use maildeck_core::types::DbId;
use maildeck_db::models::email_template::{EmailTemplate, SaveEmailTemplate};
use maildeck_db::repositories::EmailTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/getAllTemplates
///
/// List every stored template. No pagination or filtering.
pub async fn get_all_templates(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmailTemplate>>> {
    let templates = EmailTemplateRepo::list_all(&state.pool).await?;
    Ok(Json(templates))
}

/// GET /api/getEmailTemplate/{id}
///
/// A syntactically invalid `{id}` is rejected by the path extractor with
/// 400 before the store is touched.
pub async fn get_template_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EmailTemplate>> {
    let template = EmailTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EmailTemplate",
            id,
        }))?;
    Ok(Json(template))
}

/// POST /api/uploadEmailConfig
///
/// Create a template (no `id` in the body, responds 201) or fully replace
/// an existing one (`id` present, responds 200). Updates overwrite every
/// field: anything the client omitted resets to its default.
pub async fn upload_email_config(
    State(state): State<AppState>,
    Json(input): Json<SaveEmailTemplate>,
) -> AppResult<impl IntoResponse> {
    let fields = input.normalize()?;

    match input.id {
        Some(id) => {
            let updated = EmailTemplateRepo::update(&state.pool, id, &fields)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "EmailTemplate",
                    id,
                }))?;

            tracing::info!(template_id = updated.id, title = %updated.title, "Email template updated");

            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Email template updated successfully",
                }),
            ))
        }
        None => {
            let created = EmailTemplateRepo::create(&state.pool, &fields).await?;

            tracing::info!(template_id = created.id, title = %created.title, "Email template created");

            Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: "Email template saved successfully",
                }),
            ))
        }
    }
}
