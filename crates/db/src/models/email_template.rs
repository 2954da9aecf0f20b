//! Email template model and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use maildeck_core::error::CoreError;
use maildeck_core::types::{DbId, Timestamp};

/// A row from the `email_templates` table.
///
/// Wire names are camelCase to match the editor client.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailTemplate {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub footer: String,
    pub image_urls: Vec<String>,
    pub logo: String,
    pub title_style: Value,
    pub content_style: Value,
    pub footer_style: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/uploadEmailConfig`.
///
/// Updates are full replaces, not patches: the same DTO covers create and
/// update, with `id` selecting between them. The optional fields use raw
/// JSON values so malformed shapes coerce to defaults instead of rejecting
/// the request (see [`SaveEmailTemplate::normalize`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmailTemplate {
    pub id: Option<DbId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Value>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub title_style: Option<Value>,
    #[serde(default)]
    pub content_style: Option<Value>,
    #[serde(default)]
    pub footer_style: Option<Value>,
}

/// Validated, normalized template fields ready to persist.
#[derive(Debug, Clone)]
pub struct TemplateFields {
    pub title: String,
    pub content: String,
    pub footer: String,
    pub image_urls: Vec<String>,
    pub logo: String,
    pub title_style: Value,
    pub content_style: Value,
    pub footer_style: Value,
}

impl SaveEmailTemplate {
    /// Validate required fields and coerce the optional ones to their
    /// stored shapes.
    ///
    /// - `title`, `content`, `footer` must be present and non-empty.
    /// - `imageUrls` is kept only when it is an array whose entries are all
    ///   strings; anything else resets the whole field to empty.
    /// - `logo` defaults to the empty string.
    /// - Each style field is kept only when it is a JSON object; anything
    ///   else coerces to `{}`.
    pub fn normalize(&self) -> Result<TemplateFields, CoreError> {
        let title = require_text("title", &self.title)?;
        let content = require_text("content", &self.content)?;
        let footer = require_text("footer", &self.footer)?;

        Ok(TemplateFields {
            title,
            content,
            footer,
            image_urls: string_array_or_empty(&self.image_urls),
            logo: self.logo.clone().unwrap_or_default(),
            title_style: object_or_empty(&self.title_style),
            content_style: object_or_empty(&self.content_style),
            footer_style: object_or_empty(&self.footer_style),
        })
    }
}

fn require_text(field: &str, value: &Option<String>) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text.clone()),
        _ => Err(CoreError::Validation(format!(
            "{field} is a required field and must be non-empty"
        ))),
    }
}

/// Keep the value only if it is an array of strings; otherwise reset to an
/// empty list.
fn string_array_or_empty(value: &Option<Value>) -> Vec<String> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    let mut urls = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(url) => urls.push(url.clone()),
            _ => return Vec::new(),
        }
    }
    urls
}

/// Keep the value only if it is a JSON object; otherwise coerce to `{}`.
fn object_or_empty(value: &Option<Value>) -> Value {
    match value {
        Some(obj @ Value::Object(_)) => obj.clone(),
        _ => Value::Object(serde_json::Map::new()),
    }
}
