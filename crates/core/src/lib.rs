//! Domain logic for the maildeck email template service.
//!
//! Pure types and functions only: the error taxonomy, shared type aliases,
//! the inline-style serializer, and the HTML template renderer. Everything
//! that touches the network, the database, or the filesystem lives in the
//! `maildeck-db` and `maildeck-api` crates.

pub mod error;
pub mod render;
pub mod style;
pub mod types;
