use chrono::Duration;
use tubely_api::auth::make_jwt;
use uuid::Uuid;

/// Signing secret used by every test app.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

/// `Authorization` header value for `user_id`.
pub fn bearer(user_id: Uuid) -> String {
    let token = make_jwt(user_id, TEST_JWT_SECRET, Duration::hours(1)).expect("sign test token");
    format!("Bearer {}", token)
}
