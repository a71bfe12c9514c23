//! Error classification subsystem
//!
//! Reduces arbitrary, low-structure failure signals (free text and/or a
//! status code) to a closed taxonomy of user-facing outcomes.
//!
//! # Design Principles
//!
//! - Total: every signal, including an empty one, classifies to exactly
//!   one kind; `Unknown` is the floor
//! - Deterministic: an ordered rule table, first match wins
//! - Severity, retryability, and suggested action derive solely from the
//!   kind, never per call
//! - Messages are synthesized from templates and are always display-safe;
//!   raw signal text never reaches the user
//! - UI-agnostic: suggested actions are intent tags, not callbacks

mod classifier;
mod kinds;
mod messages;
mod rules;

pub use classifier::{ClassifiedError, ErrorClassifier, ErrorContext, RawErrorSignal};
pub use kinds::{ActionKind, AlertSeverity, ErrorKind, SuggestedAction};
