use crate::auth::{AuthenticatedUser, VideoId};
use crate::error::HttpAppError;
use crate::services::upload::VideoUploadService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tubely_core::Video;

/// `POST /api/video_upload/{video_id}`
///
/// Multipart body with a single `video/mp4` part named `video`. Responds with the
/// updated video record.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    VideoId(video_id): VideoId,
    user: AuthenticatedUser,
    multipart: Multipart,
) -> Result<Json<Video>, HttpAppError> {
    tracing::info!(video_id = %video_id, user_id = %user.user_id, "Uploading video");

    let video = VideoUploadService::new(&state)
        .upload(video_id, user.user_id, multipart)
        .await?;

    Ok(Json(video))
}
