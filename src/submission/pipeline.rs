use crate::models::ApplicationPayload;
use crate::state::SharedState;

use super::validate;
use super::SubmissionError;

pub struct PipelineResult {
    pub telegram_sent: bool,
}

/// Validate, store, then notify. Notification outcome never affects acceptance.
pub async fn run(state: &SharedState, payload: ApplicationPayload) -> Result<PipelineResult, SubmissionError> {
    let application = validate::validate(payload)?;

    state.store.append(application.clone()).await;
    tracing::info!(
        "Application received: {} - {}",
        application.name,
        application.application_type
    );

    let telegram_sent = state.notifier.notify(&application).await;
    tracing::info!(
        "Telegram notification: {}",
        if telegram_sent { "sent" } else { "not sent" }
    );

    Ok(PipelineResult { telegram_sent })
}
