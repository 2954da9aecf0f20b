//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod email_template_repo;

pub use email_template_repo::EmailTemplateRepo;
