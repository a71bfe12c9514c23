//! fieldgate - a strict request-validation and error-normalization layer
//!
//! Two components, usable independently or in sequence:
//! - schema: declarative schemas with single-pass, aggregating validation
//! - classify: deterministic reduction of raw failure signals to a closed
//!   taxonomy of user-facing outcomes
//!
//! The gateway module wires both behind a JSON request/response envelope.

pub mod classify;
pub mod gateway;
pub mod observability;
pub mod schema;
