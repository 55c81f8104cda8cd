use crate::error::ErrorDetails;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Expose error details outside production.
///
/// Error responses leave `IntoResponse` redacted. When the configured environment is not
/// production, the detailed body they carry replaces the redacted one.
pub async fn error_details_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(ErrorDetails(detailed)) = response.extensions_mut().remove::<ErrorDetails>() else {
        return response;
    };

    if state.config.is_production() {
        return response;
    }

    match serde_json::to_vec(&detailed) {
        Ok(bytes) => {
            response.headers_mut().remove(CONTENT_LENGTH);
            *response.body_mut() = Body::from(bytes);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize detailed error body");
        }
    }

    response
}
