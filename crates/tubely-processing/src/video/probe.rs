//! Geometry probing with ffprobe.

use crate::error::ProbeError;
use crate::video::geometry::classify_dimensions;
use crate::video::validate_tool_path;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tubely_core::GeometryCategory;

/// Reports the pixel dimensions of a local video file.
#[async_trait]
pub trait VideoProber: Send + Sync {
    /// Width and height of the first stream, both non-zero.
    async fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError>;
}

/// Classify a local file by aspect ratio.
pub async fn classify(
    prober: &dyn VideoProber,
    path: &Path,
) -> Result<GeometryCategory, ProbeError> {
    let (width, height) = prober.probe_dimensions(path).await?;
    Ok(classify_dimensions(width, height))
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
struct ProbeStream {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

/// Extract the first stream's dimensions from `ffprobe -print_format json` output.
pub(crate) fn parse_dimensions(stdout: &[u8]) -> Result<(u32, u32), ProbeError> {
    let output: ProbeOutput = serde_json::from_slice(stdout)?;
    let stream = output.streams.first().ok_or(ProbeError::NoStreams)?;

    if stream.width == 0 || stream.height == 0 {
        return Err(ProbeError::InvalidDimensions {
            width: stream.width,
            height: stream.height,
        });
    }

    Ok((stream.width, stream.height))
}

pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String) -> anyhow::Result<Self> {
        validate_tool_path(&ffprobe_path)?;
        Ok(Self { ffprobe_path })
    }
}

#[async_trait]
impl VideoProber for FfprobeProber {
    #[tracing::instrument(skip(self), fields(
        process.executable.name = "ffprobe",
        process.executable.path = %self.ffprobe_path,
        ffmpeg.operation = "probe"
    ))]
    async fn probe_dimensions(&self, path: &Path) -> Result<(u32, u32), ProbeError> {
        let start = std::time::Instant::now();

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(ProbeError::Spawn)?;

        if !output.status.success() {
            return Err(ProbeError::NonZeroExit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let (width, height) = parse_dimensions(&output.stdout)?;

        tracing::debug!(
            width,
            height,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "ffprobe completed"
        );

        Ok((width, height))
    }
}
