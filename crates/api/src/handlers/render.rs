//! Handlers that render submitted template fields into HTML.
//!
//! Preview and download share the same rendering logic; the two responses
//! differ only in headers.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Response, StatusCode};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use maildeck_core::render::{render_document, RenderFields};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Filename suggested to the browser for downloaded renders.
const DOWNLOAD_FILENAME: &str = "email-template.html";

/// Request body for the render endpoints.
///
/// Rendering is total over its inputs: missing fields fall back to empty
/// values rather than failing, so a half-filled editor state can still be
/// previewed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTemplateRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub title_style: Value,
    #[serde(default)]
    pub content_style: Value,
    #[serde(default)]
    pub footer_style: Value,
}

/// POST /api/renderTemplate
///
/// Render the submitted fields and return the document inline for preview.
pub async fn render_template(
    State(state): State<AppState>,
    Json(input): Json<RenderTemplateRequest>,
) -> AppResult<Html<String>> {
    let html = render_from_request(&state, &input).await?;
    Ok(Html(html))
}

/// POST /api/renderAndDownloadTemplate
///
/// Render the submitted fields and return the document as an HTML
/// attachment with a fixed suggested filename.
pub async fn render_and_download_template(
    State(state): State<AppState>,
    Json(input): Json<RenderTemplateRequest>,
) -> AppResult<Response<Body>> {
    let html = render_from_request(&state, &input).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        )
        .body(Body::from(html))
        .map_err(|e| AppError::InternalError(e.to_string()))
}

/// Load the skeleton and substitute the submitted fields.
///
/// A skeleton read failure is terminal for the request and produces no
/// partial output.
async fn render_from_request(
    state: &AppState,
    input: &RenderTemplateRequest,
) -> AppResult<String> {
    let skeleton = tokio::fs::read_to_string(&state.config.layout_path)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to read layout file: {e}")))?;

    Ok(render_document(
        &skeleton,
        &RenderFields {
            title: &input.title,
            content: &input.content,
            footer: &input.footer,
            title_style: &input.title_style,
            content_style: &input.content_style,
            footer_style: &input.footer_style,
            logo: &input.logo,
            image_urls: &input.image_urls,
        },
    ))
}
