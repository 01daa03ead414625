use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldError;

/// Failures raised by a listing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record handed to the store violates the structural storage schema.
    /// The validator normally makes this unreachable; it fires when a caller
    /// bypasses validation and persists a hand-built record.
    #[error("listing violates the storage schema: {0}")]
    Schema(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Failures surfaced by the listing service.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("listing validation failed with {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("listing {0} not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ListingError {
    /// The field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            ListingError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleKind;

    #[test]
    fn validation_error_reports_count() {
        let error = ListingError::Validation(vec![
            FieldError::new("title", RuleKind::Required, "title is required"),
            FieldError::new("salePrice", RuleKind::Range, "salePrice must be greater than 0"),
        ]);
        assert_eq!(
            error.to_string(),
            "listing validation failed with 2 field error(s)"
        );
        assert_eq!(error.field_errors().map(<[FieldError]>::len), Some(2));
    }

    #[test]
    fn not_found_names_the_listing() {
        let id = Uuid::new_v4();
        let error = ListingError::NotFound(id);
        assert!(error.to_string().contains(&id.to_string()));
    }
}
