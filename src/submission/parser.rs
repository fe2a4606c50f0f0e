use axum::http::HeaderMap;
use serde_json::{Map, Value};

use super::SubmissionError;
use crate::models::ApplicationPayload;

/// Decode a request body into a payload based on Content-Type.
///
/// A missing Content-Type is treated as JSON, which is what the form page sends.
pub async fn parse(headers: &HeaderMap, body: bytes::Bytes) -> Result<ApplicationPayload, SubmissionError> {
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json");

    let fields = if ct.contains("multipart/form-data") {
        parse_multipart(ct, body).await?
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(&body)?
    } else {
        parse_json(&body)?
    };

    Ok(ApplicationPayload::from_fields(&fields))
}

fn parse_json(body: &[u8]) -> Result<Map<String, Value>, SubmissionError> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(SubmissionError::Malformed("JSON body is not an object".to_string())),
        Err(e) => Err(SubmissionError::Malformed(format!("Invalid JSON: {e}"))),
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Map<String, Value>, SubmissionError> {
    let body_str = std::str::from_utf8(body)
        .map_err(|e| SubmissionError::Malformed(format!("Invalid UTF-8: {e}")))?;

    Ok(form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect())
}

/// Parse multipart form data using multer. File parts are not expected and are read as text.
async fn parse_multipart(content_type: &str, body: bytes::Bytes) -> Result<Map<String, Value>, SubmissionError> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|_| SubmissionError::Malformed("Missing multipart boundary".to_string()))?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut fields = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SubmissionError::Malformed(format!("Multipart error: {e}")))?
    {
        let Some(name) = field.name().map(|n| n.to_string()) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| SubmissionError::Malformed(format!("Field read error: {e}")))?;
        fields.insert(name, Value::String(value));
    }

    Ok(fields)
}
