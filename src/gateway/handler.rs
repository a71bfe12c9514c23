//! Gateway handler: validate first, classify later
//!
//! The two-stage control flow: a request payload goes through the
//! schema validator; a validation failure is returned to the caller as
//! structured violations (no classification needed). When a downstream
//! operation fails after validation, the raw failure signal is reported
//! back through the classifier.

use super::errors::GatewayResult;
use super::request::Request;
use super::response::Response;
use crate::classify::{ErrorClassifier, RawErrorSignal};
use crate::observability::Logger;
use crate::schema::{builtin_registry, SchemaRegistry, SchemaValidator, ValidationOutcome};

/// The gateway: owns the schema registry and the classifier, both
/// read-only after construction. Safe to share across threads.
pub struct Gateway {
    registry: SchemaRegistry,
    classifier: ErrorClassifier,
}

impl Gateway {
    /// Creates a gateway over the built-in schema catalog.
    pub fn new() -> GatewayResult<Self> {
        Ok(Self::with_registry(builtin_registry()?))
    }

    /// Creates a gateway over a caller-provided registry.
    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Returns the schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validates a request payload against its operation's schema.
    ///
    /// # Errors
    ///
    /// Faults only for caller misuse (operation bound to an
    /// unregistered schema). Invalid payloads are a normal
    /// `Response::Invalid`, not an error.
    pub fn submit(&self, request: &Request) -> GatewayResult<Response> {
        let (schema_id, schema_version) = request.operation.schema();
        let validator = SchemaValidator::new(&self.registry);

        match validator.validate(schema_id, schema_version, &request.payload)? {
            ValidationOutcome::Valid(normalized) => {
                Logger::info(
                    "REQUEST_VALIDATED",
                    &[("op", request.operation.as_str()), ("schema", schema_id)],
                );
                Ok(Response::success(normalized))
            }
            ValidationOutcome::Invalid(violations) => {
                let count = violations.len().to_string();
                Logger::warn(
                    "REQUEST_REJECTED",
                    &[
                        ("op", request.operation.as_str()),
                        ("schema", schema_id),
                        ("violations", count.as_str()),
                    ],
                );
                Ok(Response::invalid(violations))
            }
        }
    }

    /// Parses and validates a raw JSON envelope.
    pub fn submit_json(&self, json: &str) -> GatewayResult<Response> {
        let request = Request::parse(json)?;
        self.submit(&request)
    }

    /// Classifies a downstream failure into an alert response.
    ///
    /// Total: any signal produces an alert, at worst the Unknown
    /// fallback.
    pub fn report_failure(&self, signal: &RawErrorSignal) -> Response {
        let classified = self.classifier.classify(signal);
        Logger::warn(
            "FAILURE_CLASSIFIED",
            &[
                ("kind", classified.kind.as_str()),
                ("severity", classified.severity.as_str()),
                ("retryable", if classified.retryable { "true" } else { "false" }),
            ],
        );
        Response::alert(&classified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::request::Operation;
    use serde_json::json;

    #[test]
    fn test_submit_valid_login() {
        let gateway = Gateway::new().unwrap();
        let request = Request::new(
            Operation::Login,
            json!({"email": "a@b.com", "password": "secret99"}),
        );

        let response = gateway.submit(&request).unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_submit_invalid_login() {
        let gateway = Gateway::new().unwrap();
        let request = Request::new(Operation::Login, json!({"email": "a@b.com", "password": "x"}));

        let response = gateway.submit(&request).unwrap();
        match response {
            Response::Invalid(r) => {
                assert_eq!(r.violations.len(), 1);
                assert_eq!(r.violations[0].field, "password");
            }
            _ => panic!("expected Invalid"),
        }
    }

    #[test]
    fn test_submit_json_envelope() {
        let gateway = Gateway::new().unwrap();
        let response = gateway
            .submit_json(r#"{"op": "login", "payload": {"email": "a@b.com", "password": "secret99"}}"#)
            .unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_report_failure_produces_alert() {
        let gateway = Gateway::new().unwrap();
        let response = gateway.report_failure(&RawErrorSignal::from_message("timeout"));

        match response {
            Response::Alert(r) => {
                assert_eq!(r.status, "error");
                assert!(r.alert.retryable);
            }
            _ => panic!("expected Alert"),
        }
    }

    #[test]
    fn test_custom_registry() {
        use crate::schema::{FieldDef, FieldType, Schema, SchemaRegistry};

        let mut registry = SchemaRegistry::new();
        registry
            .register(Schema::new(
                "login",
                "v1",
                vec![FieldDef::required("email", FieldType::Email)],
            ))
            .unwrap();

        let gateway = Gateway::with_registry(registry);
        let request = Request::new(Operation::Login, json!({"email": "a@b.com"}));
        assert!(gateway.submit(&request).unwrap().is_success());
    }
}
