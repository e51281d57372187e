//! Error types for the redirect URL builder.
//!
//! There is a single error taxonomy: field validation failure. Bulk input
//! adds one more failure mode, malformed input that is not a JSON object.
//! Failures are returned to the immediate caller and never logged or
//! escalated internally.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for builder operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors that can occur while assembling redirect fields.
///
/// Validation failure is a routine control path, not an exceptional one:
/// every variant is returned as an `Err` value and no operation panics on
/// invalid input. A caller that ignores an error and renders anyway gets a
/// URL built from whatever valid state remains.
#[must_use = "validation errors should be handled or propagated"]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A string field received a non-string value.
    #[error("field `{field}` expects a string value, got {got}")]
    NotText {
        /// Name of the rejected field.
        field: &'static str,
        /// Kind of the offending value.
        got: &'static str,
    },

    /// A string field received an empty string.
    #[error("field `{field}` must not be empty")]
    EmptyText {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// A string field received a bare number in string form.
    ///
    /// Numeric strings are rejected so an amount can never silently land in
    /// an identifier slot.
    #[error("field `{field}` must not be a numeric string")]
    NumericText {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// The amount field received a non-numeric value.
    #[error("amount expects a numeric value, got {got}")]
    NotNumeric {
        /// Kind of the offending value.
        got: &'static str,
    },

    /// The amount field received zero or a negative number.
    #[error("amount must be greater than zero, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// Bulk field data was not a JSON object.
    #[error("bulk field data must be a JSON object")]
    NotAMapping,

    /// A JSON entry held a value that cannot be carried as a field.
    #[error("field values must be strings or numbers, got {kind}")]
    UnsupportedValue {
        /// Kind of the offending JSON value.
        kind: &'static str,
    },
}
