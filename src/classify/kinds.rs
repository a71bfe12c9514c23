//! The closed failure taxonomy and its static per-kind lookups
//!
//! Extending the taxonomy means adding a kind here plus a rule in
//! `rules`; call sites never branch on message text themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of failure kinds.
///
/// Declaration order is also the rule-priority order used by the
/// classifier's rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The resource being created already exists
    Conflict,
    /// Transport could not reach the backend
    NetworkUnavailable,
    /// The backend rejected the request content
    ValidationRejected,
    /// The operation exceeded its time budget
    Timeout,
    /// The backend faulted
    ServerFault,
    /// Credentials missing or stale
    Unauthorized,
    /// Authenticated but not allowed
    Forbidden,
    /// The referenced record does not exist
    NotFound,
    /// Request budget exhausted
    RateLimited,
    /// Nothing matched
    Unknown,
}

impl ErrorKind {
    /// Returns the wire/display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Conflict => "conflict",
            ErrorKind::NetworkUnavailable => "network_unavailable",
            ErrorKind::ValidationRejected => "validation_rejected",
            ErrorKind::Timeout => "timeout",
            ErrorKind::ServerFault => "server_fault",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Display severity for alerts driven by this kind.
    pub fn severity(&self) -> AlertSeverity {
        match self {
            ErrorKind::NetworkUnavailable
            | ErrorKind::ServerFault
            | ErrorKind::Forbidden
            | ErrorKind::Unknown => AlertSeverity::Error,
            _ => AlertSeverity::Warning,
        }
    }

    /// Whether re-attempting the same operation unchanged may succeed.
    ///
    /// A pure function of the kind, so retry UX is consistent at every
    /// call site.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::NetworkUnavailable
                | ErrorKind::Timeout
                | ErrorKind::ServerFault
                | ErrorKind::RateLimited
        )
    }

    /// Recovery intent suggested for this kind, if any.
    pub fn suggested_action(&self) -> Option<SuggestedAction> {
        match self {
            ErrorKind::Conflict => Some(SuggestedAction {
                label: "Sign in instead".into(),
                kind: ActionKind::NavigateToSignIn,
            }),
            ErrorKind::NetworkUnavailable => Some(SuggestedAction {
                label: "Check connection".into(),
                kind: ActionKind::CheckConnection,
            }),
            _ => None,
        }
    }

    /// Alert title for this kind.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::Conflict => "Account already exists",
            ErrorKind::NetworkUnavailable => "Connection problem",
            ErrorKind::ValidationRejected => "Submission rejected",
            ErrorKind::Timeout => "Request timed out",
            ErrorKind::ServerFault => "Service unavailable",
            ErrorKind::Unauthorized => "Sign in required",
            ErrorKind::Forbidden => "Not allowed",
            ErrorKind::NotFound => "Not found",
            ErrorKind::RateLimited => "Too many attempts",
            ErrorKind::Unknown => "Something went wrong",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display-level alert classification, independent of retryability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Error,
}

impl AlertSeverity {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Error => "error",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed set of recovery intents.
///
/// The classifier returns only the intent; binding it to a concrete
/// navigation or retry effect is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    NavigateToSignIn,
    CheckConnection,
}

impl ActionKind {
    /// Returns the wire name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::NavigateToSignIn => "navigate-to-sign-in",
            ActionKind::CheckConnection => "check-connection",
        }
    }
}

/// A suggested recovery action: a button label plus an intent tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    /// Button label
    pub label: String,
    /// Abstract intent the caller resolves to a concrete effect
    pub kind: ActionKind,
}
