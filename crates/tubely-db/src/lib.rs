//! Tubely database layer
//!
//! Repositories for the metadata records the upload pipeline reads and updates.

pub mod db;

pub use db::{VideoRepository, VideoRow, VideoStore};
