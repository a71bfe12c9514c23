//! Gateway: the request/response surface over validation and
//! classification
//!
//! A caller submits a JSON envelope; the payload is validated against
//! the operation's schema. Invalid input comes back as a structured
//! violation list. When a downstream operation fails after validation,
//! the raw failure is reported back through the classifier and returned
//! as an alert payload the presentation layer renders directly.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{GatewayError, GatewayResult};
pub use handler::Gateway;
pub use request::{Operation, Request};
pub use response::{AlertPayload, AlertResponse, InvalidResponse, Response, SuccessResponse};
