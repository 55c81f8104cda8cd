//! Thumbnail upload and asset serving integration tests.
//!
//! Run with: `cargo test -p tubely-api --test thumbnail_upload_test`

mod helpers;

use axum::http::StatusCode;
use helpers::auth::bearer;
use helpers::fixtures::{file_form, minimal_png, sample_video};
use helpers::{setup_test_app, setup_test_app_with, TestAppOptions, TEST_ASSETS_URL};
use tubely_core::Video;
use uuid::Uuid;

fn upload_path(video_id: Uuid) -> String {
    format!("/api/thumbnail_upload/{}", video_id)
}

#[tokio::test]
async fn test_upload_png_thumbnail_and_serve_it() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = sample_video(owner);
    app.videos.add_video(video.clone());

    let png = minimal_png();
    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", bearer(owner))
        .multipart(file_form("thumbnail", png.clone(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Video = response.json();
    let url = body.thumbnail_url.expect("thumbnail_url set");
    let name = url
        .strip_prefix(&format!("{}/", TEST_ASSETS_URL))
        .expect("url under assets base")
        .to_string();
    assert!(name.ends_with(".png"));
    assert!(body.video_url.is_none());

    assert_eq!(std::fs::read(app.assets_dir.join(&name)).unwrap(), png);
    assert_eq!(
        app.videos.video(video.id).unwrap().thumbnail_url.as_deref(),
        Some(url.as_str())
    );

    let served = app.client().get(&format!("/assets/{}", name)).await;
    assert_eq!(served.status_code(), StatusCode::OK);
    assert_eq!(served.as_bytes().to_vec(), png);
}

#[tokio::test]
async fn test_jpeg_thumbnail_uses_jpg_extension() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = sample_video(owner);
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", bearer(owner))
        .multipart(file_form(
            "thumbnail",
            vec![0xFF, 0xD8, 0xFF, 0xE0],
            "thumb.jpeg",
            "image/jpeg",
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Video = response.json();
    assert!(body.thumbnail_url.unwrap().ends_with(".jpg"));
}

#[tokio::test]
async fn test_unsupported_image_type_rejected() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = sample_video(owner);
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", bearer(owner))
        .multipart(file_form("thumbnail", b"GIF89a".to_vec(), "thumb.gif", "image/gif"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.videos.video(video.id).unwrap(), video);
    assert_eq!(std::fs::read_dir(&app.assets_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn test_thumbnail_owner_mismatch_is_unauthorized() {
    let app = setup_test_app().await;
    let video = sample_video(Uuid::new_v4());
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", bearer(Uuid::new_v4()))
        .multipart(file_form("thumbnail", minimal_png(), "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.videos.video(video.id).unwrap(), video);
}

#[tokio::test]
async fn test_oversized_thumbnail_rejected() {
    let app = setup_test_app_with(TestAppOptions {
        max_thumbnail_size_bytes: 32,
        ..TestAppOptions::default()
    })
    .await;
    let owner = Uuid::new_v4();
    let video = sample_video(owner);
    app.videos.add_video(video.clone());

    let response = app
        .client()
        .post(&upload_path(video.id))
        .add_header("Authorization", bearer(owner))
        .multipart(file_form("thumbnail", vec![0u8; 4096], "thumb.png", "image/png"))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.videos.video(video.id).unwrap(), video);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}
