use std::io;
use thiserror::Error;

/// Failure of an external media tool that the pipeline cannot recover from.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    Failed {
        tool: &'static str,
        status: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Reasons geometry could not be determined. Callers treat all of them as "other".
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to run ffprobe: {0}")]
    Spawn(#[source] io::Error),

    #[error("ffprobe exited with {status}: {stderr}")]
    NonZeroExit { status: String, stderr: String },

    #[error("malformed ffprobe output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    #[error("no streams found in ffprobe output")]
    NoStreams,

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}
