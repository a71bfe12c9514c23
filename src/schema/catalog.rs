//! Built-in schemas for the operations the gateway serves
//!
//! Constructed once at startup and registered read-only. The schema is
//! the single source of truth for each operation's input shape.

use super::errors::SchemaResult;
use super::registry::SchemaRegistry;
use super::types::{FieldDef, FieldType, Schema};

/// Account roles accepted at registration.
const USER_TYPES: &[&str] = &["farmer", "trader", "agronomist"];

/// Schema for the login operation.
pub fn login_schema() -> Schema {
    Schema::new(
        "login",
        "v1",
        vec![
            FieldDef::required("email", FieldType::Email),
            FieldDef::required("password", FieldType::String).with_min_len(6),
        ],
    )
}

/// Schema for the registration operation.
///
/// Registration additionally requires a display name, a password
/// confirmation equal to the password, and an account role.
pub fn registration_schema() -> Schema {
    Schema::new(
        "registration",
        "v1",
        vec![
            FieldDef::required("name", FieldType::String)
                .with_min_len(1)
                .with_max_len(100),
            FieldDef::required("email", FieldType::Email),
            FieldDef::required("password", FieldType::String)
                .with_min_len(8)
                .with_pattern(
                    "[A-Za-z].*[0-9]|[0-9].*[A-Za-z]",
                    "must include at least one letter and one digit",
                ),
            FieldDef::required("confirm_password", FieldType::String).matching("password"),
            FieldDef::required(
                "user_type",
                FieldType::Enum {
                    allowed: USER_TYPES.iter().map(|s| s.to_string()).collect(),
                },
            ),
        ],
    )
}

/// Builds a registry holding every built-in schema.
pub fn builtin_registry() -> SchemaResult<SchemaRegistry> {
    let mut registry = SchemaRegistry::new();
    registry.register(login_schema())?;
    registry.register(registration_schema())?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validator::SchemaValidator;
    use serde_json::json;

    #[test]
    fn test_builtin_schemas_are_well_formed() {
        assert!(login_schema().validate_structure().is_ok());
        assert!(registration_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_builtin_registry() {
        let registry = builtin_registry().unwrap();
        assert!(registry.exists("login", "v1"));
        assert!(registry.exists("registration", "v1"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_login_short_password_is_the_only_violation() {
        let registry = builtin_registry().unwrap();
        let outcome = SchemaValidator::new(&registry)
            .validate("login", "v1", &json!({"email": "a@b.com", "password": "x"}))
            .unwrap();

        let violations = outcome.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "password");
    }

    #[test]
    fn test_registration_accepts_complete_input() {
        let registry = builtin_registry().unwrap();
        let input = json!({
            "name": "A",
            "email": "a@b.com",
            "password": "Secret123!",
            "confirm_password": "Secret123!",
            "user_type": "farmer"
        });

        let outcome = SchemaValidator::new(&registry)
            .validate("registration", "v1", &input)
            .unwrap();

        match outcome {
            crate::schema::ValidationOutcome::Valid(value) => {
                let obj = value.as_object().unwrap();
                assert_eq!(obj.len(), 5);
                assert_eq!(obj["user_type"], "farmer");
            }
            crate::schema::ValidationOutcome::Invalid(v) => {
                panic!("unexpected violations: {:?}", v)
            }
        }
    }

    #[test]
    fn test_registration_password_needs_a_letter_and_a_digit() {
        let registry = builtin_registry().unwrap();
        for password in ["12345678", "abcdefgh"] {
            let input = json!({
                "name": "A",
                "email": "a@b.com",
                "password": password,
                "confirm_password": password,
                "user_type": "farmer"
            });

            let outcome = SchemaValidator::new(&registry)
                .validate("registration", "v1", &input)
                .unwrap();
            let violations = outcome.violations();
            assert_eq!(violations.len(), 1, "password {:?}", password);
            assert_eq!(violations[0].field, "password");
            assert!(violations[0].message.contains("letter and one digit"));
        }
    }

    #[test]
    fn test_registration_rejects_unknown_role() {
        let registry = builtin_registry().unwrap();
        let input = json!({
            "name": "A",
            "email": "a@b.com",
            "password": "Secret123!",
            "confirm_password": "Secret123!",
            "user_type": "pilot"
        });

        let outcome = SchemaValidator::new(&registry)
            .validate("registration", "v1", &input)
            .unwrap();
        assert_eq!(outcome.violations().len(), 1);
        assert_eq!(outcome.violations()[0].field, "user_type");
    }
}
