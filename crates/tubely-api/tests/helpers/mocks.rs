//! In-memory stand-ins for the record store, the object store and the media tools.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tubely_core::{AppError, Video};
use tubely_db::VideoStore;
use tubely_processing::video::output_path_for;
use tubely_processing::{
    FastStartTranscoder, ProbeError, ProcessingError, ScopedTempFile, VideoProber,
};
use tubely_storage::{Storage, StorageBackend, StorageError, StorageResult};
use uuid::Uuid;

/// Mock video store backed by a HashMap
#[derive(Clone, Default)]
pub struct MockVideoStore {
    videos: Arc<Mutex<HashMap<Uuid, Video>>>,
    fail_updates: Arc<AtomicBool>,
    row_vanishes: Arc<AtomicBool>,
    updates: Arc<AtomicUsize>,
}

impl MockVideoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_video(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    pub fn video(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }

    pub fn fail_updates(&self) {
        self.fail_updates.store(true, Ordering::SeqCst);
    }

    /// The next update finds the row deleted, as if removed between read and write.
    pub fn delete_row_before_update(&self) {
        self.row_vanishes.store(true, Ordering::SeqCst);
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoStore for MockVideoStore {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.video(id))
    }

    async fn update(&self, video: &Video) -> Result<Video, AppError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::Internal("database unavailable".to_string()));
        }

        let mut videos = self.videos.lock().unwrap();
        if self.row_vanishes.load(Ordering::SeqCst) {
            videos.remove(&video.id);
        }
        if !videos.contains_key(&video.id) {
            return Err(AppError::NotFound(format!("Video {} not found", video.id)));
        }
        videos.insert(video.id, video.clone());
        Ok(video.clone())
    }
}

/// Transcoder that copies its input, or fails after a partial write.
#[derive(Clone, Default)]
pub struct MockTranscoder {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTranscoder {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FastStartTranscoder for MockTranscoder {
    async fn transcode(&self, input: &Path) -> Result<ScopedTempFile, ProcessingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let output = ScopedTempFile::reserve(output_path_for(input), "processed");

        if self.fail {
            tokio::fs::write(output.path(), b"partial moov").await?;
            return Err(ProcessingError::Failed {
                tool: "ffmpeg",
                status: "exit status: 1".to_string(),
                stderr: "moov atom not found".to_string(),
            });
        }

        tokio::fs::copy(input, output.path()).await?;
        Ok(output)
    }
}

/// Name prefix of staged uploads in the temp directory.
pub const STAGED_FILE_PREFIX: &str = "tubely-upload-";

/// Prober that reports fixed dimensions, or fails when given none.
#[derive(Clone, Copy)]
pub struct MockProber(pub Option<(u32, u32)>);

#[async_trait]
impl VideoProber for MockProber {
    async fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        assert!(path.exists(), "classification runs against an existing file");
        let file_name = path.file_name().unwrap().to_string_lossy();
        assert!(
            file_name.starts_with(STAGED_FILE_PREFIX) && file_name.ends_with(".mp4"),
            "classification must read the staged upload, got {}",
            path.display()
        );
        self.0.ok_or_else(|| ProbeError::NonZeroExit {
            status: "exit status: 1".to_string(),
            stderr: "Invalid data found when processing input".to_string(),
        })
    }
}

/// Object store whose uploads always fail.
pub struct FailingStorage;

#[async_trait]
impl Storage for FailingStorage {
    async fn upload_file(
        &self,
        _storage_key: &str,
        path: &Path,
        _content_type: &str,
    ) -> StorageResult<String> {
        assert!(path.exists(), "upload reads the processed file");
        Err(StorageError::UploadFailed(
            "503 Service Unavailable: SlowDown".to_string(),
        ))
    }

    async fn upload_with_key(
        &self,
        _storage_key: &str,
        _data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        Err(StorageError::UploadFailed(
            "503 Service Unavailable: SlowDown".to_string(),
        ))
    }

    fn public_url(&self, storage_key: &str) -> String {
        format!("https://unreachable.example/{}", storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
