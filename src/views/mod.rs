pub mod admin;
pub mod form;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Application form
        .route("/", get(form::form_page))
        .route("/sinchon", get(form::form_page))
        // Admin
        .route("/admin", get(admin::dashboard))
        .route("/api/test-telegram", get(telegram_test::send_test))
}
