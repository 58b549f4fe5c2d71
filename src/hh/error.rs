use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

pub type HhResult<T> = std::result::Result<T, HhError>;

#[derive(Debug, thiserror::Error)]
pub enum HhError {
    /// Non-2xx answer from the API; `error` is whatever JSON the API sent back.
    #[error("HH API Error {status}")]
    Api { status: u16, error: HhApiError },

    #[error("HH transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HH response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HH request build error: {0}")]
    InvalidRequest(String),
}

impl HhError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HhError::Api { status, .. } => Some(*status),
            HhError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn api_error(&self) -> Option<&HhApiError> {
        match self {
            HhError::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Body of a failed HH API call (400, 403 and 404 share this shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HhApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub errors: Vec<HhApiErrorItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_argument: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_arguments: Option<Vec<HhBadArgument>>,
    #[serde(flatten)]
    pub extra: HashMap<String, JsonValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhApiErrorItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhBadArgument {
    pub name: String,
    pub description: String,
}

impl HhApiError {
    fn has(&self, kind: &str, value: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.kind == kind && e.value.as_deref() == Some(value))
    }

    pub fn token_expired(&self) -> bool {
        self.has("oauth", "token_expired") || self.oauth_error.as_deref() == Some("token-expired")
    }

    pub fn token_revoked(&self) -> bool {
        self.has("oauth", "token_revoked") || self.oauth_error.as_deref() == Some("token-revoked")
    }

    pub fn not_found(&self) -> bool {
        self.errors.iter().any(|e| e.kind == "not_found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_forbidden_payload() {
        let raw = r#"{
            "request_id": "abc",
            "description": "Forbidden",
            "errors": [{"type": "oauth", "value": "token_expired"}],
            "oauth_error": "token-expired"
        }"#;
        let err: HhApiError = serde_json::from_str(raw).unwrap();
        assert_eq!(err.request_id.as_deref(), Some("abc"));
        assert!(err.token_expired());
        assert!(!err.token_revoked());
        assert!(!err.not_found());
    }

    #[test]
    fn api_error_message_carries_status() {
        let err = HhError::Api {
            status: 404,
            error: HhApiError {
                errors: vec![HhApiErrorItem {
                    kind: "not_found".into(),
                    value: None,
                    reason: None,
                }],
                ..Default::default()
            },
        };
        assert_eq!(err.to_string(), "HH API Error 404");
        assert_eq!(err.status(), Some(404));
        assert!(err.api_error().unwrap().not_found());
    }
}
