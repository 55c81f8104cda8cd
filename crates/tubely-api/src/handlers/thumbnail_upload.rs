use crate::auth::{AuthenticatedUser, VideoId};
use crate::error::HttpAppError;
use crate::services::upload::ThumbnailUploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tubely_core::Video;

/// `POST /api/thumbnail_upload/{video_id}`
///
/// Multipart body with a JPEG or PNG part named `thumbnail`.
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    VideoId(video_id): VideoId,
    user: AuthenticatedUser,
    multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Uploading thumbnail");

    let video = ThumbnailUploadService::new(&state)
        .upload(video_id, user.user_id, multipart)
        .await?;

    Ok(Json(video))
}
