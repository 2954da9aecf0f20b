//! Handler for image uploads.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::ImageUploadResponse;
use crate::state::AppState;

/// POST /api/uploadImage
///
/// Accepts a multipart form with a required `image` field. The file is
/// stored under the public upload directory with a fresh uuid-based name
/// (client extension preserved) and served back at `/uploads/{filename}`.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ImageUploadResponse>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("image").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
        // ignore unknown fields
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;

    let stored_name = match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{}.{}", uuid::Uuid::new_v4(), ext),
        _ => uuid::Uuid::new_v4().to_string(),
    };

    tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let dest = state.config.upload_dir.join(&stored_name);
    tokio::fs::write(&dest, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(file = %stored_name, bytes = data.len(), "Image uploaded");

    Ok(Json(ImageUploadResponse {
        message: "Image uploaded successfully",
        image_url: format!("/uploads/{stored_name}"),
    }))
}
