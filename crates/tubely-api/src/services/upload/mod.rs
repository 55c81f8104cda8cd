//! Upload services: the request-scoped pipelines behind the upload handlers.

mod thumbnail;
mod video;

pub use thumbnail::ThumbnailUploadService;
pub use video::VideoUploadService;

use tubely_core::{AppError, Video};
use tubely_db::VideoStore;
use uuid::Uuid;

/// Fetch a video and make sure `user_id` owns it.
async fn load_owned_video(
    videos: &dyn VideoStore,
    video_id: Uuid,
    user_id: Uuid,
) -> Result<Video, AppError> {
    let video = videos
        .get(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    if !video.is_owned_by(user_id) {
        tracing::debug!(video_id = %video_id, user_id = %user_id, "Upload rejected, caller is not the owner");
        return Err(AppError::Unauthorized(
            "You do not own this video".to_string(),
        ));
    }

    Ok(video)
}
