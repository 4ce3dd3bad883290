//! Validation utilities.

use crate::{FieldError, RegistryError};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `RegistryError` on failure.
    fn validate_request(&self) -> Result<(), RegistryError> {
        self.validate().map_err(validation_errors_to_registry_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `RegistryError`.
#[must_use]
pub fn validation_errors_to_registry_error(errors: ValidationErrors) -> RegistryError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    RegistryError::Validation(message)
}

/// Flattens validator errors into field-level errors, including nested structs.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut result = Vec::new();

    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    result.push(FieldError {
                        field: field.to_string(),
                        message: err.message.as_ref().map_or_else(
                            || format!("Validation failed for field '{}'", field),
                            |m| m.to_string(),
                        ),
                        code: err.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                for nested_err in field_errors(nested) {
                    result.push(FieldError {
                        field: format!("{}.{}", field, nested_err.field),
                        ..nested_err
                    });
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, item) in items {
                    for nested_err in field_errors(item) {
                        result.push(FieldError {
                            field: format!("{}[{}].{}", field, index, nested_err.field),
                            ..nested_err
                        });
                    }
                }
            }
        }
    }

    result
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}
