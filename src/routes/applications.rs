use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::Application;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let payload = parser::parse(&headers, body).await?;

    let result = pipeline::run(&state, payload).await?;

    Ok(Json(json!({
        "success": true,
        "message": "신청이 접수되었습니다.",
        "telegram_sent": result.telegram_sent,
    })))
}

pub async fn list(State(state): State<SharedState>) -> Json<Vec<Application>> {
    Json(state.store.all().await)
}
