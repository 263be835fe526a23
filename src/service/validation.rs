//! Request body validation: structural parse, then rule checks.

use crate::error::{AppError, FieldError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Parse a JSON body into a typed input. Structural failures and rule
/// violations both short-circuit with field-level details, so a
/// rejected body never reaches the store.
pub fn safe_parse<T>(entity: &str, body: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let input: T = serde_json::from_value(body).map_err(|e| AppError::Validation {
        message: format!("invalid {} payload", entity),
        details: vec![FieldError {
            field: "body".into(),
            message: e.to_string(),
        }],
    })?;
    if let Err(errors) = input.validate() {
        return Err(AppError::Validation {
            message: format!("invalid {} payload", entity),
            details: field_errors(&errors),
        });
    }
    Ok(input)
}

/// Flatten nested validation errors into one `{field, message}` entry
/// per violated rule.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, None, &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(p) => format!("{}.{}", p, field),
            None => field.to_string(),
        };
        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} failed rule '{}'", name, violation.code));
                    out.push(FieldError {
                        field: name.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, Some(&name), out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, Some(&format!("{}[{}]", name, index)), out);
                }
            }
        }
    }
}
