//! HTTP-level integration tests for layout, render, and image upload.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, body_text, get, post_json, post_multipart};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_email_layout_returns_raw_skeleton(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/getEmailLayout").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(response).await;
    assert_eq!(body, common::TEST_SKELETON);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_email_layout_with_missing_file_returns_500(pool: PgPool) {
    let mut config = common::test_config();
    config.layout_path = common::fixture_dir().join("does-not-exist.html");

    let app = common::build_test_app_with_config(pool, config);
    let response = get(app, "/api/getEmailLayout").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ---------------------------------------------------------------------------
// Render: download
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn download_sets_attachment_headers_and_substitutes_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/renderAndDownloadTemplate",
        json!({
            "title": "Hello",
            "content": "Body text",
            "footer": "Bye",
            "titleStyle": { "fontSize": "24px", "color": "navy" },
            "logo": "/uploads/logo.png",
            "imageUrls": ["a.png", "b.png"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap(),
        "attachment; filename=\"email-template.html\""
    );

    let html = body_text(response).await;
    assert!(html.contains(r#"<h1 style="font-size: 24px; color: navy;">Hello</h1>"#));
    assert!(html.contains(r#"<div style="">Body text</div>"#));
    assert!(html.contains(r#"<footer style="">Bye</footer>"#));
    assert!(html.contains(r#"<img src="/uploads/logo.png" alt="Logo" style="max-width: 200px;" />"#));

    let a = html.find(r#"src="a.png""#).expect("a.png rendered");
    let b = html.find(r#"src="b.png""#).expect("b.png rendered");
    assert!(a < b, "images must keep submitted order");
    assert!(!html.contains("{{"), "no placeholder may survive rendering");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn download_with_empty_images_renders_no_image_elements(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/renderAndDownloadTemplate",
        json!({
            "title": "Hello",
            "content": "Body",
            "footer": "Bye",
            "imageUrls": []
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("<img"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn download_with_missing_skeleton_returns_500(pool: PgPool) {
    let mut config = common::test_config();
    config.layout_path = common::fixture_dir().join("does-not-exist.html");

    let app = common::build_test_app_with_config(pool, config);
    let response = post_json(
        app,
        "/api/renderAndDownloadTemplate",
        json!({ "title": "x", "content": "y", "footer": "z" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Render: preview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn preview_returns_inline_html_without_attachment_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/renderTemplate",
        json!({
            "title": "Hello",
            "content": "Body",
            "footer": "Bye"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().get(header::CONTENT_DISPOSITION).is_none(),
        "preview must not suggest a download"
    );
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains(r#"<h1 style="">Hello</h1>"#));
}

// ---------------------------------------------------------------------------
// Image upload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_image_stores_file_and_returns_relative_url(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/uploadImage",
        "image",
        "picture.png",
        b"not-really-a-png",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Image uploaded successfully");

    let image_url = body["imageUrl"].as_str().expect("imageUrl must be a string");
    assert!(image_url.starts_with("/uploads/"));
    assert!(image_url.ends_with(".png"), "client extension is preserved");

    // The stored file must be served back through the static mount.
    let app = common::build_test_app(pool);
    let served = get(app, image_url).await;
    assert_eq!(served.status(), StatusCode::OK);
    assert_eq!(body_text(served).await, "not-really-a-png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_image_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/uploadImage",
        "attachment",
        "picture.png",
        b"data",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}
