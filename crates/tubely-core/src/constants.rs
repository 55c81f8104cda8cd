//! Constants shared across crates.

/// The only content type accepted for video uploads.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// File extension appended to every stored video key.
pub const VIDEO_EXTENSION: &str = "mp4";

/// Content types accepted for thumbnails, paired with the extension written to disk.
pub const THUMBNAIL_CONTENT_TYPES: &[(&str, &str)] = &[("image/jpeg", "jpg"), ("image/png", "png")];

/// Number of random bytes used for storage names.
pub const STORAGE_TOKEN_BYTES: usize = 32;

/// Issuer claim expected on access tokens.
pub const JWT_ISSUER: &str = "tubely-access";
