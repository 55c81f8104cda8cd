//! Tubely API Library
//!
//! This crate provides the HTTP handlers, authentication and application setup for
//! the video upload service.

mod handlers;
mod middleware;
mod services;
mod telemetry;
mod utils;

pub mod auth;
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use setup::build_router;
pub use state::AppState;
