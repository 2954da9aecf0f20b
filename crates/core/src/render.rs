//! HTML document rendering.
//!
//! The editor exports templates by substituting template fields into a
//! static HTML skeleton containing five named placeholders. Substitution is
//! literal text replacement and each placeholder is replaced exactly once —
//! the first occurrence. Repeated placeholders elsewhere in the skeleton
//! stay as literal text. Inserted text and URLs are not escaped; callers
//! own any sanitization.

use serde_json::Value;

use crate::style::inline_style;

/// Placeholder for the styled title heading.
pub const TITLE_PLACEHOLDER: &str = "{{title}}";

/// Placeholder for the styled content block.
pub const CONTENT_PLACEHOLDER: &str = "{{content}}";

/// Placeholder for the styled footer element.
pub const FOOTER_PLACEHOLDER: &str = "{{footer}}";

/// Placeholder for the optional logo image.
pub const LOGO_PLACEHOLDER: &str = "{{logo}}";

/// Placeholder for the ordered image list.
pub const IMAGES_PLACEHOLDER: &str = "{{images}}";

/// Maximum display width for the logo image, in pixels.
pub const LOGO_MAX_WIDTH_PX: u32 = 200;

/// Everything the renderer needs from a template, borrowed from either a
/// stored record or a render request body.
#[derive(Debug, Clone, Copy)]
pub struct RenderFields<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub footer: &'a str,
    pub title_style: &'a Value,
    pub content_style: &'a Value,
    pub footer_style: &'a Value,
    pub logo: &'a str,
    pub image_urls: &'a [String],
}

/// Produce the final HTML document from raw skeleton text and template
/// fields.
///
/// - `title` is wrapped in an `<h1>`, `content` in a `<div>`, and `footer`
///   in a `<footer>`, each with an inline `style` attribute from the
///   corresponding style mapping.
/// - An empty `logo` substitutes an empty string; otherwise a
///   width-constrained `<img>` is inserted.
/// - `image_urls` become one width-constrained `<img>` per URL, in input
///   order; an empty list substitutes an empty string.
pub fn render_document(skeleton: &str, fields: &RenderFields) -> String {
    let title = format!(
        r#"<h1 style="{}">{}</h1>"#,
        inline_style(fields.title_style),
        fields.title
    );
    let content = format!(
        r#"<div style="{}">{}</div>"#,
        inline_style(fields.content_style),
        fields.content
    );
    let footer = format!(
        r#"<footer style="{}">{}</footer>"#,
        inline_style(fields.footer_style),
        fields.footer
    );

    let logo = if fields.logo.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="Logo" style="max-width: {}px;" />"#,
            fields.logo, LOGO_MAX_WIDTH_PX
        )
    };

    let images = fields
        .image_urls
        .iter()
        .map(|url| {
            format!(r#"<img src="{url}" alt="Email Image" style="max-width: 100%; margin: 10px 0;" />"#)
        })
        .collect::<String>();

    skeleton
        .replacen(TITLE_PLACEHOLDER, &title, 1)
        .replacen(CONTENT_PLACEHOLDER, &content, 1)
        .replacen(FOOTER_PLACEHOLDER, &footer, 1)
        .replacen(LOGO_PLACEHOLDER, &logo, 1)
        .replacen(IMAGES_PLACEHOLDER, &images, 1)
}
