//! Application state shared by every handler.

use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoStore;
use tubely_processing::{FastStartTranscoder, VideoProber};
use tubely_storage::Storage;

pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    /// Destination for processed videos (S3 in production)
    pub video_storage: Arc<dyn Storage>,
    /// Local assets directory thumbnails are written to
    pub asset_storage: Arc<dyn Storage>,
    pub transcoder: Arc<dyn FastStartTranscoder>,
    pub prober: Arc<dyn VideoProber>,
}
