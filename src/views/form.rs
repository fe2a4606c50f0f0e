use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::SharedState;

/// Serve the application form page verbatim from the static directory.
pub async fn form_page(State(state): State<SharedState>) -> Result<Response, AppError> {
    let path = state.config.static_dir.join(&state.config.form_page);

    match tokio::fs::read(&path).await {
        Ok(page) => Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], page).into_response()),
        Err(e) => {
            tracing::warn!("Form page {} unavailable: {e}", path.display());
            Err(file_not_found().await)
        }
    }
}

pub async fn file_not_found() -> AppError {
    AppError::NotFound("File not found".to_string())
}
