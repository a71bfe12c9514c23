//! Message synthesis for classified errors
//!
//! Every kind maps to a display-safe template. Context fields are
//! interpolated where the template uses them; when required context is
//! absent the template degrades to a context-free variant instead of
//! producing a malformed string. A field-specific override, when one
//! exists for the implicated field, replaces the templated wording.

use super::classifier::ErrorContext;
use super::kinds::ErrorKind;

/// Field-specific message overrides, keyed by implicated field name.
///
/// These supersede the kind-level template: a password error always
/// reads as the security-requirement hint regardless of the raw signal.
const FIELD_OVERRIDES: &[(&str, &str)] = &[
    (
        "password",
        "Password must be at least 8 characters and include at least one letter and one digit.",
    ),
    (
        "confirm_password",
        "The password confirmation does not match the password.",
    ),
    ("email", "Enter a valid email address, like name@example.com."),
];

/// Looks up the override wording for a field, if one is declared.
pub(crate) fn field_override(field: &str) -> Option<&'static str> {
    FIELD_OVERRIDES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, message)| *message)
}

/// Renders the template for a kind, interpolating available context.
pub(crate) fn render(kind: ErrorKind, context: &ErrorContext) -> String {
    match kind {
        ErrorKind::Conflict => match (&context.user_role, &context.subject) {
            (Some(role), Some(subject)) => format!(
                "A {} account for {} already exists. Try signing in instead.",
                role, subject
            ),
            (None, Some(subject)) => format!(
                "An account for {} already exists. Try signing in instead.",
                subject
            ),
            _ => "An account with these details already exists. Try signing in instead.".into(),
        },
        ErrorKind::NetworkUnavailable => {
            "Unable to reach the server. Check your internet connection and try again.".into()
        }
        ErrorKind::ValidationRejected => {
            "The submitted information was rejected. Review the highlighted fields and try again."
                .into()
        }
        ErrorKind::Timeout => "The request took too long. Please try again.".into(),
        ErrorKind::ServerFault => {
            "Something went wrong on our side. Please try again shortly.".into()
        }
        ErrorKind::Unauthorized => "Your session has expired. Please sign in again.".into(),
        ErrorKind::Forbidden => "You do not have permission to perform this action.".into(),
        ErrorKind::NotFound => "The requested record could not be found.".into(),
        ErrorKind::RateLimited => "Too many attempts. Please wait a moment and try again.".into(),
        ErrorKind::Unknown => "Something went wrong. Please try again.".into(),
    }
}
