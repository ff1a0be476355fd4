use axum::{http::StatusCode, response::IntoResponse};

/// Static text returned to the uptime monitor.
pub static ALIVE_MESSAGE: &str = "Bot is alive!";

/// Liveness probe.
///
/// Answers without touching the database or Discord, so it only reports that the
/// process is up.
pub async fn alive() -> impl IntoResponse {
    (StatusCode::OK, ALIVE_MESSAGE)
}
