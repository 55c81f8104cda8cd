//! Storage and media tool setup

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_processing::{FastStartTranscoder, FfmpegFastStart, FfprobeProber, VideoProber};
use tubely_storage::{create_asset_storage, create_storage, Storage};

/// Video and asset storage backends.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    let video_storage = create_storage(config)
        .await
        .context("Failed to initialize video storage")?;
    let asset_storage = create_asset_storage(config)
        .await
        .context("Failed to initialize asset storage")?;

    tracing::info!(
        video_backend = %video_storage.backend_type(),
        assets_root = %config.assets_root.display(),
        "Storage initialized"
    );

    Ok((video_storage, asset_storage))
}

/// ffmpeg and ffprobe wrappers, plus the directory uploads are staged in.
pub async fn setup_media_tools(
    config: &Config,
) -> Result<(Arc<dyn FastStartTranscoder>, Arc<dyn VideoProber>)> {
    tokio::fs::create_dir_all(&config.upload_temp_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create upload temp dir {}",
                config.upload_temp_dir.display()
            )
        })?;

    let transcoder = FfmpegFastStart::new(config.ffmpeg_path.clone()).context("Invalid FFMPEG_PATH")?;
    let prober = FfprobeProber::new(config.ffprobe_path.clone()).context("Invalid FFPROBE_PATH")?;

    Ok((Arc::new(transcoder), Arc::new(prober)))
}
