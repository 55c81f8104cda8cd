//! Tubely Storage Library
//!
//! This crate provides the storage abstraction for uploaded media and its S3 and
//! local filesystem implementations.
//!
//! # Storage key format
//!
//! Video keys carry their geometry classification as a prefix:
//!
//! - `landscape/{token}.mp4`
//! - `portrait/{token}.mp4`
//! - `other/{token}.mp4`
//!
//! Thumbnails are stored flat as `{token}.{ext}`. Tokens are random and never derived
//! from user input. Key generation lives in the `keys` module so every backend and
//! caller agrees on the layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use factory::create_asset_storage;
pub use keys::{random_token, thumbnail_name, video_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use tubely_core::StorageBackend;
