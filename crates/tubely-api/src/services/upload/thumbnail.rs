use crate::error::storage_error;
use crate::state::AppState;
use crate::utils::upload::read_thumbnail_field;
use axum::extract::Multipart;
use tubely_core::{AppError, Video};
use tubely_storage::thumbnail_name;
use uuid::Uuid;

const THUMBNAIL_FIELD: &str = "thumbnail";

/// Store an image thumbnail in the local assets directory and link it from the record.
pub struct ThumbnailUploadService<'a> {
    state: &'a AppState,
}

impl<'a> ThumbnailUploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    #[tracing::instrument(skip(self, multipart), fields(video_id = %video_id, user_id = %user_id))]
    pub async fn upload(
        &self,
        video_id: Uuid,
        user_id: Uuid,
        mut multipart: Multipart,
    ) -> Result<Video, AppError> {
        let mut video = super::load_owned_video(self.state.videos.as_ref(), video_id, user_id).await?;

        let (data, media_type, extension) = read_thumbnail_field(
            &mut multipart,
            THUMBNAIL_FIELD,
            self.state.config.max_thumbnail_size_bytes,
        )
        .await?;

        let name = thumbnail_name(extension);
        let size_bytes = data.len();

        let url = self
            .state
            .asset_storage
            .upload_with_key(&name, data, &media_type)
            .await
            .map_err(storage_error)?;

        video.set_thumbnail_url(url);
        let updated = self.state.videos.update(&video).await.map_err(|e| {
            tracing::error!(error = %e, file = %name, "Thumbnail metadata update failed");
            AppError::Storage(format!("Video metadata update failed: {}", e))
        })?;

        tracing::info!(file = %name, size_bytes, "Thumbnail upload completed");

        Ok(updated)
    }
}
