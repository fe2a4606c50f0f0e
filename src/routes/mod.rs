pub mod applications;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/application", post(applications::submit))
        .route("/api/applications", get(applications::list))
}
