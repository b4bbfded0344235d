//! Bridges `validator` derive output into [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run `validator` checks on an input DTO, mapping failures to
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render field errors as `"field: message"` pairs, sorted by field name so
/// the message is stable across runs.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{field}: {message}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
