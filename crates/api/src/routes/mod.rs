//! Route definitions.

pub mod email;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /getEmailLayout             raw HTML skeleton
/// GET  /getAllTemplates            list records
/// GET  /getEmailTemplate/{id}      fetch one record
/// POST /uploadEmailConfig          create or replace a record
/// POST /uploadImage                store an uploaded image
/// POST /renderTemplate             render submitted fields (preview)
/// POST /renderAndDownloadTemplate  render submitted fields (attachment)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(email::router())
}
