use axum::{routing::get, Router};

use crate::server::{controller::health::alive, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(alive))
}
