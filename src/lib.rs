pub mod config;
pub mod error;
pub mod state;
pub mod models;
pub mod store;
pub mod notify;
pub mod submission;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::notify::telegram::TelegramNotifier;
use crate::state::{AppState, SharedState};
use crate::store::ApplicationStore;

/// Build the application with a fresh store and a Telegram notifier from `config`.
pub fn build_app(config: Config) -> Result<(Router, SharedState), String> {
    let notifier = TelegramNotifier::from_config(&config)?;

    if config.telegram_configured() {
        tracing::info!("Telegram notifications configured");
    } else {
        tracing::warn!("Telegram not configured, notifications will be skipped");
    }

    let state: SharedState = Arc::new(AppState {
        config,
        store: ApplicationStore::new(),
        notifier: Arc::new(notifier),
    });

    Ok((build_router(state.clone()), state))
}

pub fn build_router(state: SharedState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir)
        .not_found_service(views::form::file_not_found.into_service());
    let max_body_size = state.config.max_body_size;

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn(hide_dotfiles))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // Outermost: its response body type satisfies none of the inner layers' bounds.
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .with_state(state)
}

/// Dotfiles in the static directory (`.env` included) are never served.
async fn hide_dotfiles(req: Request, next: Next) -> Response {
    let hidden = req
        .uri()
        .path()
        .split('/')
        .any(|segment| segment.starts_with('.') || segment.to_ascii_lowercase().starts_with("%2e"));

    if hidden {
        return views::form::file_not_found().await.into_response();
    }
    next.run(req).await
}

async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "applications_count": state.store.count().await,
    }))
}
