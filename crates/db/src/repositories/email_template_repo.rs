//! Repository for the `email_templates` table.

use sqlx::PgPool;

use maildeck_core::types::DbId;

use crate::models::email_template::{EmailTemplate, TemplateFields};

/// Column list for `email_templates` queries.
const COLUMNS: &str = "\
    id, title, content, footer, image_urls, logo, \
    title_style, content_style, footer_style, created_at, updated_at";

/// Provides data access for email template records.
pub struct EmailTemplateRepo;

impl EmailTemplateRepo {
    /// List every template, oldest first. No pagination.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<EmailTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM email_templates ORDER BY id");
        sqlx::query_as::<_, EmailTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a template by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EmailTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM email_templates WHERE id = $1");
        sqlx::query_as::<_, EmailTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new template with a fresh identifier.
    pub async fn create(
        pool: &PgPool,
        fields: &TemplateFields,
    ) -> Result<EmailTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO email_templates \
                 (title, content, footer, image_urls, logo, \
                  title_style, content_style, footer_style) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailTemplate>(&query)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.footer)
            .bind(&fields.image_urls)
            .bind(&fields.logo)
            .bind(&fields.title_style)
            .bind(&fields.content_style)
            .bind(&fields.footer_style)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every field of an existing template.
    ///
    /// This is a full replace, not a patch: omitted request fields arrive
    /// here already reset to their defaults by normalization. Returns
    /// `None` when no row matches `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &TemplateFields,
    ) -> Result<Option<EmailTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE email_templates SET \
                 title = $2, \
                 content = $3, \
                 footer = $4, \
                 image_urls = $5, \
                 logo = $6, \
                 title_style = $7, \
                 content_style = $8, \
                 footer_style = $9, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailTemplate>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.content)
            .bind(&fields.footer)
            .bind(&fields.image_urls)
            .bind(&fields.logo)
            .bind(&fields.title_style)
            .bind(&fields.content_style)
            .bind(&fields.footer_style)
            .fetch_optional(pool)
            .await
    }

    /// Count stored templates.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM email_templates")
            .fetch_one(pool)
            .await
    }
}
