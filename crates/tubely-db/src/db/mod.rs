//! Database repositories for data access layer
//!
//! Each repository is responsible for a single table. Callers depend on the store
//! traits so the HTTP layer can be exercised against in-memory implementations.

pub mod video;

pub use video::{VideoRepository, VideoRow, VideoStore};
