//! The classifier: raw failure signal in, structured outcome out
//!
//! Classification is total and never raises for a bad signal; every
//! input maps to at least `Unknown` with a generic fallback message.

use serde::{Deserialize, Serialize};

use super::kinds::{AlertSeverity, ErrorKind, SuggestedAction};
use super::{messages, rules};

/// Optional context accompanying a raw signal.
///
/// Context feeds message interpolation only; it never changes which
/// kind a signal classifies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Role of the user performing the operation (affects wording only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    /// Input field implicated in the failure, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    /// Identifier of the subject record (e.g. the email being registered)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// A raw failure signal from anywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawErrorSignal {
    /// Free-text message, possibly empty
    #[serde(default)]
    pub message: String,
    /// HTTP-style status code, if the upstream produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Interpolation context
    #[serde(default)]
    pub context: ErrorContext,
}

impl RawErrorSignal {
    /// Create a signal from a message alone.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Create a signal from a status code alone.
    pub fn from_code(code: u16) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    /// Attach a status code.
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach interpolation context.
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }
}

/// The structured, user-facing reduction of one failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    /// Taxonomy kind
    pub kind: ErrorKind,
    /// Display-ready message, always non-empty
    pub message: String,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Whether retrying unchanged may succeed
    pub retryable: bool,
    /// Suggested recovery intent, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
}

/// Stateless classifier over the process-wide rule and message tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Creates a classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classifies a raw signal. Total: never fails, always produces
    /// exactly one `ClassifiedError`.
    pub fn classify(&self, signal: &RawErrorSignal) -> ClassifiedError {
        let kind = rules::match_kind(&signal.message, signal.code);

        let message = signal
            .context
            .field_name
            .as_deref()
            .and_then(messages::field_override)
            .map(str::to_string)
            .unwrap_or_else(|| messages::render(kind, &signal.context));

        ClassifiedError {
            kind,
            message,
            severity: kind.severity(),
            retryable: kind.retryable(),
            suggested_action: kind.suggested_action(),
        }
    }
}
