//! Video processing: fast-start remux and geometry classification.

mod faststart;
mod geometry;
mod probe;

pub use faststart::{output_path_for, FastStartTranscoder, FfmpegFastStart};
pub use geometry::classify_dimensions;
pub use probe::{classify, FfprobeProber, VideoProber};

use anyhow::anyhow;

/// Reject tool paths that could be interpreted by a shell or escape their directory.
fn validate_tool_path(path: &str) -> anyhow::Result<()> {
    if path.is_empty() {
        return Err(anyhow!("Tool path must not be empty"));
    }

    if !path
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '\\' | ':'))
    {
        return Err(anyhow!("Tool path contains unsafe characters: {}", path));
    }

    if path.contains("..") {
        return Err(anyhow!("Tool path contains directory traversal: {}", path));
    }

    Ok(())
}
