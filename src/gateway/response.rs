//! Gateway response envelopes
//!
//! Three shapes: success with the normalized value, invalid with the
//! violation list verbatim, and alert with a classified failure the
//! presentation layer renders directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classify::{AlertSeverity, ClassifiedError, SuggestedAction};
use crate::schema::FieldViolation;

/// Success response carrying the normalized payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub status: String,
    pub data: Value,
}

impl SuccessResponse {
    /// Create a new success response.
    pub fn new(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data,
        }
    }
}

/// Validation-failure response carrying every violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidResponse {
    pub status: String,
    pub violations: Vec<FieldViolation>,
}

impl InvalidResponse {
    /// Create from a violation list.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self {
            status: "invalid".to_string(),
            violations,
        }
    }
}

/// What the presentation layer needs to populate one alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Alert title
    pub title: String,
    /// Body message
    pub message: String,
    /// Severity-driven styling hint
    pub severity: AlertSeverity,
    /// Whether a retry control makes sense
    pub retryable: bool,
    /// Optional single quick-action button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<SuggestedAction>,
}

impl AlertPayload {
    /// Build the alert payload for a classified failure.
    pub fn from_classified(classified: &ClassifiedError) -> Self {
        Self {
            title: classified.kind.title().to_string(),
            message: classified.message.clone(),
            severity: classified.severity,
            retryable: classified.retryable,
            action: classified.suggested_action.clone(),
        }
    }
}

/// Downstream-failure response carrying an alert payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertResponse {
    pub status: String,
    pub alert: AlertPayload,
}

impl AlertResponse {
    /// Create from a classified failure.
    pub fn new(classified: &ClassifiedError) -> Self {
        Self {
            status: "error".to_string(),
            alert: AlertPayload::from_classified(classified),
        }
    }
}

/// Unified response type.
#[derive(Debug, Clone)]
pub enum Response {
    Success(SuccessResponse),
    Invalid(InvalidResponse),
    Alert(AlertResponse),
}

impl Response {
    /// Create a success response.
    pub fn success(data: Value) -> Self {
        Response::Success(SuccessResponse::new(data))
    }

    /// Create a validation-failure response.
    pub fn invalid(violations: Vec<FieldViolation>) -> Self {
        Response::Invalid(InvalidResponse::new(violations))
    }

    /// Create a downstream-failure response.
    pub fn alert(classified: &ClassifiedError) -> Self {
        Response::Alert(AlertResponse::new(classified))
    }

    /// Convert to a JSON string.
    pub fn to_json(&self) -> String {
        match self {
            Response::Success(r) => {
                serde_json::to_string(r).expect("SuccessResponse serialization cannot fail")
            }
            Response::Invalid(r) => {
                serde_json::to_string(r).expect("InvalidResponse serialization cannot fail")
            }
            Response::Alert(r) => {
                serde_json::to_string(r).expect("AlertResponse serialization cannot fail")
            }
        }
    }

    /// Check if this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ErrorClassifier, RawErrorSignal};
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let resp = Response::success(json!({"email": "a@b.com"}));
        assert!(resp.is_success());
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("a@b.com"));
    }

    #[test]
    fn test_invalid_response_carries_violations_verbatim() {
        let outcome: Vec<FieldViolation> = serde_json::from_value(json!([
            {"field": "password", "message": "must be at least 6 characters"}
        ]))
        .unwrap();

        let resp = Response::invalid(outcome);
        let json = resp.to_json();
        assert!(json.contains("\"status\":\"invalid\""));
        assert!(json.contains("password"));
        assert!(json.contains("at least 6 characters"));
    }

    #[test]
    fn test_alert_response() {
        let classified =
            ErrorClassifier::new().classify(&RawErrorSignal::from_message("network down"));
        let resp = Response::alert(&classified);

        let json = resp.to_json();
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("Connection problem"));
        assert!(json.contains("\"retryable\":true"));
        assert!(json.contains("check-connection"));
    }

    #[test]
    fn test_alert_without_action_omits_the_key() {
        let classified = ErrorClassifier::new().classify(&RawErrorSignal::from_message(""));
        let resp = Response::alert(&classified);
        assert!(!resp.to_json().contains("\"action\""));
    }
}
