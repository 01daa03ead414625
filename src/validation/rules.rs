//! Field-error types produced by the listing validator.

use serde::Serialize;

/// The kind of constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A required field was missing or null.
    Required,
    /// The JSON value had the wrong type for the field.
    Type,
    /// A string or sequence entry fell outside its length bounds.
    Length,
    /// A numeric value fell outside its allowed range.
    Range,
    /// A value did not match any label of an enumerated field.
    Enumeration,
    /// A numeric field required an integral value.
    Integer,
    /// A string did not match the field's pattern.
    Pattern,
    /// A string was not an absolute URL.
    Url,
}

/// A single field-level violation. The validator reports every violation in
/// the submission, not just the first one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: RuleKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, rule: RuleKind, message: impl Into<String>) -> Self {
        FieldError {
            field,
            rule,
            message: message.into(),
        }
    }
}
