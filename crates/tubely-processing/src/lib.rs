//! Tubely Processing Library
//!
//! Local media work for the upload pipeline: request-scoped temp files, the ffmpeg
//! fast-start remux and ffprobe-based geometry classification. Subprocess-backed
//! capabilities sit behind traits so callers can substitute them in tests.

pub mod error;
pub mod temp;
pub mod video;

pub use error::{ProbeError, ProcessingError};
pub use temp::ScopedTempFile;
pub use video::{
    classify, classify_dimensions, FastStartTranscoder, FfmpegFastStart, FfprobeProber,
    VideoProber,
};
