//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;

pub use routes::build_router;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(environment = %config.environment, "Configuration loaded and validated successfully");

    let pool = database::setup_database(&config).await?;
    let (video_storage, asset_storage) = storage::setup_storage(&config).await?;
    let (transcoder, prober) = storage::setup_media_tools(&config).await?;

    let state = Arc::new(AppState {
        config,
        videos: Arc::new(VideoRepository::new(pool)),
        video_storage,
        asset_storage,
        transcoder,
        prober,
    });

    let router = build_router(state.clone());

    Ok((state, router))
}
