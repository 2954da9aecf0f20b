//! Shared response payload types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// A plain confirmation body: `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Response for a successful image upload.
///
/// `image_url` is a relative URL under the `/uploads` static mount.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadResponse {
    pub message: &'static str,
    pub image_url: String,
}
