//! Verification response decoding.
//!
//! The service answers with a small mapping such as `{"valid": true}`.
//! Some deployments emit a dict literal instead (`{'valid': True}`), which is
//! normalized to JSON before a second decode. Bodies that still do not decode
//! yield a negative verdict rather than an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Verdict of one verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the service accepted the NCF.
    pub valid: bool,
    /// When the verdict was received.
    pub checked_at: DateTime<Utc>,
}

impl VerificationResult {
    /// Build a result from a response body, stamped with the current time.
    pub fn from_body(body: &str) -> Self {
        Self {
            valid: parse_verdict(body),
            checked_at: Utc::now(),
        }
    }
}

/// `None` unless the body is a JSON object; a missing or non-boolean
/// `valid` entry reads as `false`.
fn decode(body: &str) -> Option<bool> {
    match serde_json::from_str::<Value>(body).ok()? {
        Value::Object(map) => Some(map.get("valid").and_then(Value::as_bool).unwrap_or(false)),
        _ => None,
    }
}

fn normalize_literal(body: &str) -> String {
    body.replace('\'', "\"")
        .replace("True", "true")
        .replace("False", "false")
        .replace("None", "null")
}

/// Extract the `valid` flag from a response body.
///
/// Returns `false` when the field is absent, not a boolean, or the body is
/// not a mapping at all.
pub fn parse_verdict(body: &str) -> bool {
    let body = body.trim();
    if let Some(valid) = decode(body) {
        return valid;
    }
    if let Some(valid) = decode(&normalize_literal(body)) {
        return valid;
    }
    tracing::warn!(
        body_len = body.len(),
        "unparseable NCF verification response, treating as invalid"
    );
    false
}
