use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{MessageResponse, Status};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    status: i64,
    #[serde(default)]
    request: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

pub fn encode_message_form(fields: &BTreeMap<String, String>) -> Vec<(String, String)> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

pub fn decode_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;
    Ok(MessageResponse {
        status: Status::from_code(parsed.status),
        request: parsed.request,
        errors: parsed.errors,
    })
}
