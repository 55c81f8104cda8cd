//! Multipart helpers shared by the upload handlers

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tubely_core::constants::{THUMBNAIL_CONTENT_TYPES, VIDEO_CONTENT_TYPE};
use tubely_core::AppError;
use tubely_processing::ScopedTempFile;

/// An uploaded video written to local disk.
#[derive(Debug)]
pub struct StagedUpload {
    pub file: ScopedTempFile,
    /// Normalized media type the client declared for the part
    pub media_type: String,
    pub size_bytes: u64,
}

/// Map a multipart read error. Body limit violations surface here while streaming.
pub fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Request body exceeds the upload size limit".to_string())
    } else {
        AppError::InvalidInput(format!("Unable to parse form file: {}", err.body_text()))
    }
}

/// Strip MIME parameters and lowercase, e.g. `Video/MP4; codecs=avc1` -> `video/mp4`.
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

fn declared_media_type(field: &Field<'_>) -> String {
    normalize_mime_type(field.content_type().unwrap_or_default())
}

/// Extension for an accepted thumbnail media type.
pub fn thumbnail_extension(media_type: &str) -> Option<&'static str> {
    THUMBNAIL_CONTENT_TYPES
        .iter()
        .find(|(content_type, _)| *content_type == media_type)
        .map(|(_, ext)| *ext)
}

/// Stream the `field_name` part to a new temp file in `temp_dir`.
///
/// The content type is checked before anything touches disk. At most `max_bytes` are
/// accepted; the partially written file is removed if the limit is hit.
pub async fn stage_video_field(
    multipart: &mut Multipart,
    field_name: &str,
    temp_dir: &Path,
    max_bytes: usize,
) -> Result<StagedUpload, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let media_type = declared_media_type(&field);
        if media_type != VIDEO_CONTENT_TYPE {
            return Err(AppError::InvalidInput(
                "Invalid file type, only MP4 is allowed".to_string(),
            ));
        }

        let (file, guard) =
            ScopedTempFile::create_in(temp_dir, "tubely-upload-", ".mp4", "staged")?;
        let mut file = tokio::fs::File::from_std(file);
        let mut size_bytes: u64 = 0;

        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            size_bytes += chunk.len() as u64;
            if size_bytes > max_bytes as u64 {
                return Err(AppError::PayloadTooLarge(format!(
                    "File exceeds the {} byte limit",
                    max_bytes
                )));
            }
            file.write_all(&chunk).await?;
        }

        // Downstream tools reopen the file by path and read from offset 0
        file.flush().await?;
        file.sync_all().await?;

        return Ok(StagedUpload {
            file: guard,
            media_type,
            size_bytes,
        });
    }

    Err(AppError::InvalidInput(format!(
        "Unable to parse form file: missing field '{}'",
        field_name
    )))
}

/// Read the `field_name` part into memory as an image thumbnail.
///
/// Returns the bytes, the normalized media type and the file extension to store under.
pub async fn read_thumbnail_field(
    multipart: &mut Multipart,
    field_name: &str,
    max_bytes: usize,
) -> Result<(Vec<u8>, String, &'static str), AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue;
        }

        let media_type = declared_media_type(&field);
        let extension = thumbnail_extension(&media_type).ok_or_else(|| {
            AppError::InvalidInput("Invalid file type, only JPEG or PNG is allowed".to_string())
        })?;

        let mut data = Vec::new();
        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            if data.len() + chunk.len() > max_bytes {
                return Err(AppError::PayloadTooLarge(format!(
                    "File exceeds the {} byte limit",
                    max_bytes
                )));
            }
            data.extend_from_slice(&chunk);
        }

        return Ok((data, media_type, extension));
    }

    Err(AppError::InvalidInput(format!(
        "Unable to parse form file: missing field '{}'",
        field_name
    )))
}
