use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An accepted application form entry. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub contact: String,
    pub application_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

/// Incoming submission fields before validation.
#[derive(Debug, Default, Clone)]
pub struct ApplicationPayload {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub application_type: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl ApplicationPayload {
    /// Pick the known fields out of a decoded body.
    ///
    /// The form page posts the contact number as `phone`; `contact` wins when
    /// both are present and non-blank. Numbers and booleans are kept as text,
    /// anything else counts as absent.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).and_then(scalar_text);
        let non_blank = |key: &str| text(key).filter(|v| !v.trim().is_empty());

        Self {
            name: text("name"),
            contact: non_blank("contact").or_else(|| non_blank("phone")),
            application_type: text("applicationType"),
            message: text("message"),
            timestamp: text("timestamp"),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
