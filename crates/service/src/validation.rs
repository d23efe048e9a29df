//! Bridges `validator` derive rules into `ServiceError::Validation`.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::errors::ServiceError;

/// Field name -> human readable messages, ordered by field for stable output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

pub fn validate<T: Validate>(request: &T) -> Result<(), ServiceError> {
    request
        .validate()
        .map_err(|e| ServiceError::Validation(field_errors(&e)))
}

pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("failed {} check", e.code),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}
