use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::core::{AppError, Result};

/// Validate a struct and return AppError naming every offending field
///
/// Nested models are reported by dotted path, e.g. `user.email`.
pub fn validate_request<T: Validate>(data: &T) -> Result<()> {
    data.validate().map_err(|e| AppError::Validation(describe(&e)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect("", errors, &mut messages);
    // errors() is backed by a HashMap
    messages.sort();
    messages.join(", ")
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errors) => {
                out.extend(errors.iter().map(|e| format!("{}: {}", path, message(e))));
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

fn message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
