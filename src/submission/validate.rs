use chrono::Local;

use super::SubmissionError;
use crate::models::{Application, ApplicationPayload};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Check required fields and turn a payload into a storable application.
///
/// Required fields are checked in form order and the first missing one is reported.
/// A missing timestamp is filled with the current local time.
pub fn validate(payload: ApplicationPayload) -> Result<Application, SubmissionError> {
    let name = required(payload.name, "name")?;
    let contact = required(payload.contact, "contact")?;
    let application_type = required(payload.application_type, "applicationType")?;

    let message = payload.message.filter(|m| !m.trim().is_empty());
    let timestamp = payload
        .timestamp
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(now);

    Ok(Application {
        name,
        contact,
        application_type,
        message,
        timestamp,
    })
}

/// Current local time in the stored timestamp format.
pub fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SubmissionError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(SubmissionError::MissingField(field))
}
