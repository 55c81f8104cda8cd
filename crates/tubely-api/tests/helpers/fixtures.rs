//! Test fixtures: records and multipart bodies.

use axum_test::multipart::{MultipartForm, Part};
use chrono::Utc;
use tubely_core::Video;
use uuid::Uuid;

/// A fresh record owned by `owner` with no media attached.
pub fn sample_video(owner: Uuid) -> Video {
    let now = Utc::now();
    Video {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        title: "Boots".to_string(),
        description: "Walking through the boot section".to_string(),
        thumbnail_url: None,
        video_url: None,
        user_id: owner,
    }
}

/// Bytes that start like an MP4 container; the mock tools never parse them.
pub fn fake_mp4(len: usize) -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypmp42");
    data.resize(len.max(data.len()), 0xAB);
    data
}

/// Minimal valid 1x1 PNG bytes.
pub fn minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// Multipart body with one file part.
pub fn file_form(field: &str, data: Vec<u8>, file_name: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        field.to_string(),
        Part::bytes(data).file_name(file_name.to_string()).mime_type(mime.to_string()),
    )
}
