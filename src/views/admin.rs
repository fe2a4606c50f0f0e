use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::models::Application;
use crate::state::SharedState;

/// How many applications the dashboard lists.
pub const RECENT_LIMIT: usize = 10;

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    total: usize,
    telegram_configured: bool,
    rows: Vec<ApplicationRow>,
}

struct ApplicationRow {
    name: String,
    contact: String,
    application_type: String,
    badge: &'static str,
    timestamp: String,
    message: Option<String>,
}

impl From<&Application> for ApplicationRow {
    fn from(app: &Application) -> Self {
        Self {
            name: app.name.clone(),
            contact: app.contact.clone(),
            application_type: app.application_type.clone(),
            badge: badge_class(&app.application_type),
            timestamp: app.timestamp.clone(),
            message: app.message.clone().filter(|m| !m.trim().is_empty()),
        }
    }
}

/// CSS badge class for an application type label, matched by substring.
pub fn badge_class(application_type: &str) -> &'static str {
    if application_type.contains("상담") {
        "consult"
    } else if application_type.contains("맛보기") {
        "trial"
    } else if application_type.contains("등록") {
        "register"
    } else {
        "default"
    }
}

/// Render the dashboard for `recent` (already newest first). Rows beyond
/// `RECENT_LIMIT` are not shown.
pub fn render_dashboard(
    recent: &[Application],
    total: usize,
    telegram_configured: bool,
) -> Result<String, askama::Error> {
    DashboardTemplate {
        total,
        telegram_configured,
        rows: recent.iter().take(RECENT_LIMIT).map(ApplicationRow::from).collect(),
    }
    .render()
}

pub async fn dashboard(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let total = state.store.count().await;
    let recent = state.store.recent(RECENT_LIMIT).await;

    let page = render_dashboard(&recent, total, state.notifier.is_configured())
        .map_err(|e| AppError::Internal(format!("Dashboard render failed: {e}")))?;
    Ok(Html(page))
}
