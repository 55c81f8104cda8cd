//! Storage key generation.
//!
//! Keys are built from 32 bytes of OS-seeded CSPRNG output encoded as URL-safe base64
//! without padding, so they are safe in both S3 keys and URL paths.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use tubely_core::constants::{STORAGE_TOKEN_BYTES, VIDEO_EXTENSION};
use tubely_core::GeometryCategory;

/// Generate a random URL-safe token.
pub fn random_token() -> String {
    let mut bytes = [0u8; STORAGE_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Build the storage key for a processed video: `{category}/{token}.mp4`.
pub fn video_key(category: GeometryCategory) -> String {
    format!(
        "{}{}.{}",
        category.key_prefix(),
        random_token(),
        VIDEO_EXTENSION
    )
}

/// Build the file name for a thumbnail: `{token}.{extension}`.
pub fn thumbnail_name(extension: &str) -> String {
    format!("{}.{}", random_token(), extension)
}
