//! Fast-start remux with ffmpeg.
//!
//! Streams are copied, never re-encoded; only the container layout changes so that
//! the `moov` atom precedes the media data.

use crate::error::ProcessingError;
use crate::temp::ScopedTempFile;
use crate::video::validate_tool_path;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

const OUTPUT_SUFFIX: &str = ".processing";

/// Rewrites a local MP4 into a new local file that can start playing before it is
/// fully downloaded.
#[async_trait]
pub trait FastStartTranscoder: Send + Sync {
    /// Remux `input`. The returned guard owns the output file.
    async fn transcode(&self, input: &Path) -> Result<ScopedTempFile, ProcessingError>;
}

/// Path the remuxed output of `input` is written to.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

pub struct FfmpegFastStart {
    ffmpeg_path: String,
}

impl FfmpegFastStart {
    pub fn new(ffmpeg_path: String) -> anyhow::Result<Self> {
        validate_tool_path(&ffmpeg_path)?;
        Ok(Self { ffmpeg_path })
    }
}

#[async_trait]
impl FastStartTranscoder for FfmpegFastStart {
    #[tracing::instrument(skip(self), fields(
        process.executable.name = "ffmpeg",
        process.executable.path = %self.ffmpeg_path,
        ffmpeg.operation = "faststart"
    ))]
    async fn transcode(&self, input: &Path) -> Result<ScopedTempFile, ProcessingError> {
        let start = std::time::Instant::now();

        // Owned before spawning so a partial write is removed on any failure below
        let output = ScopedTempFile::reserve(output_path_for(input), "processed");

        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(output.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ProcessingError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
            tracing::error!(
                status = %result.status,
                stderr = %stderr,
                "ffmpeg fast-start remux failed"
            );
            return Err(ProcessingError::Failed {
                tool: "ffmpeg",
                status: result.status.to_string(),
                stderr,
            });
        }

        if !tokio::fs::try_exists(output.path()).await? {
            return Err(ProcessingError::Failed {
                tool: "ffmpeg",
                status: result.status.to_string(),
                stderr: "no output file produced".to_string(),
            });
        }

        tracing::info!(
            output = %output.path().display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "ffmpeg fast-start remux completed"
        );

        Ok(output)
    }
}
