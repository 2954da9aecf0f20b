//! Handler for the raw skeleton endpoint.

use axum::extract::State;
use axum::response::Html;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/getEmailLayout
///
/// Return the raw HTML skeleton the editor works against. The file is read
/// on every request, never cached.
pub async fn get_email_layout(State(state): State<AppState>) -> AppResult<Html<String>> {
    let skeleton = tokio::fs::read_to_string(&state.config.layout_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read layout file: {e}")))?;
    Ok(Html(skeleton))
}
