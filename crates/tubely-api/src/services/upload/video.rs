use crate::error::{processing_error, storage_error};
use crate::state::AppState;
use crate::utils::upload::stage_video_field;
use axum::extract::Multipart;
use std::time::Instant;
use tubely_core::{AppError, GeometryCategory, Video};
use tubely_processing::classify;
use tubely_storage::video_key;
use uuid::Uuid;

const VIDEO_FIELD: &str = "video";

/// Stage, remux, classify and store one uploaded video, then point its record at it.
///
/// Local files are owned by scoped guards declared in acquisition order, so every exit
/// path removes them newest first. Nothing is retried; an object already uploaded when
/// the record update fails is left in place and logged.
pub struct VideoUploadService<'a> {
    state: &'a AppState,
}

impl<'a> VideoUploadService<'a> {
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
        let start = Instant::now();
        let config = &self.state.config;

        let mut video = super::load_owned_video(self.state.videos.as_ref(), video_id, user_id).await?;

        let staged = stage_video_field(
            &mut multipart,
            VIDEO_FIELD,
            &config.upload_temp_dir,
            config.max_video_size_bytes,
        )
        .await?;

        tracing::debug!(
            size_bytes = staged.size_bytes,
            path = %staged.file.path().display(),
            "Upload staged"
        );

        let processed = self
            .state
            .transcoder
            .transcode(staged.file.path())
            .await
            .map_err(processing_error)?;

        let category = match classify(self.state.prober.as_ref(), staged.file.path()).await {
            Ok(category) => category,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to determine aspect ratio, using 'other'");
                GeometryCategory::Other
            }
        };

        let storage_key = video_key(category);

        let url = self
            .state
            .video_storage
            .upload_file(&storage_key, processed.path(), &staged.media_type)
            .await
            .map_err(storage_error)?;

        video.set_video_url(url);

        // Any update failure, a vanished row included, is a storage failure for the caller
        let updated = self.state.videos.update(&video).await.map_err(|e| {
            tracing::error!(
                error = %e,
                storage_key = %storage_key,
                "Video metadata update failed, uploaded object is orphaned"
            );
            AppError::Storage(format!("Video metadata update failed: {}", e))
        })?;

        tracing::info!(
            storage_key = %storage_key,
            category = %category,
            size_bytes = staged.size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Video upload completed"
        );

        Ok(updated)
    }
}
