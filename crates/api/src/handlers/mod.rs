//! Request handlers.
//!
//! Handlers delegate to `maildeck_db` repositories and the `maildeck_core`
//! renderer, and map errors via [`crate::error::AppError`].

pub mod images;
pub mod layout;
pub mod render;
pub mod templates;
