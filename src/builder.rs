//! Redirect URL builder for the hosted checkout endpoint.
//!
//! The builder holds a mutable, insertion-ordered set of named fields,
//! validates the four required ones (store, itemcode, amount, signouturl)
//! on demand, and renders the whole set into a redirect URL of the form
//! `https://commerce.cashnet.com/{store}?{querystring}`.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    encode,
    error::{CheckoutError, Result},
    field::FieldValue,
};

/// Hosted checkout endpoint every redirect URL points at.
pub const CHECKOUT_BASE_URL: &str = "https://commerce.cashnet.com";

/// Store identifier field, rendered as the URL path segment.
pub const FIELD_STORE: &str = "store";

/// Item code field for the product being paid for.
pub const FIELD_ITEMCODE: &str = "itemcode";

/// Payment amount field, must be greater than zero.
pub const FIELD_AMOUNT: &str = "amount";

/// Callback URL field the hosted checkout redirects to on signout.
pub const FIELD_SIGNOUTURL: &str = "signouturl";

/// Required fields that render as query parameters, in output order.
const QUERY_FIELD_ORDER: [&str; 3] = [FIELD_ITEMCODE, FIELD_AMOUNT, FIELD_SIGNOUTURL];

/// Builder for hosted checkout redirect URLs.
///
/// Fields may be set one at a time through the validating setters or merged
/// in bulk through [`set_data`](Self::set_data), which deliberately applies
/// no per-field validation (the original gateway contract). Rendering is a
/// pure read: [`redirect_url`](Self::redirect_url) may be called repeatedly,
/// including after further mutation.
///
/// # Examples
///
/// ```
/// use cashnet_redirect::RedirectUrlBuilder;
/// use rust_decimal::Decimal;
///
/// let mut builder = RedirectUrlBuilder::new();
/// builder.set_store("CASHNET-STORE")?;
/// builder.set_itemcode("ITEMCODE")?;
/// builder.set_amount(Decimal::new(4221, 2))?;
/// builder.set_signouturl("https://localhost/callback.php")?;
///
/// assert!(builder.required_fields_set());
/// assert_eq!(
///     builder.redirect_url(),
///     "https://commerce.cashnet.com/CASHNET-STORE?itemcode=ITEMCODE&amount=42.21&signouturl=https%3A%2F%2Flocalhost%2Fcallback.php"
/// );
/// # Ok::<(), cashnet_redirect::CheckoutError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectUrlBuilder {
    fields: Vec<(String, FieldValue)>,
}

impl RedirectUrlBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a builder pre-populated from a bulk mapping.
    ///
    /// Equivalent to [`new`](Self::new) followed by
    /// [`set_data`](Self::set_data): no per-field validation is applied.
    #[must_use]
    pub fn with_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut builder = Self::new();
        builder.set_data(fields);
        builder
    }

    /// Creates a builder pre-populated from a JSON value.
    ///
    /// A JSON object becomes the initial mapping, entry order preserved.
    /// Anything else, including an object holding values that are neither
    /// strings nor numbers, leaves the builder empty; no error is raised
    /// by construction.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let mut builder = Self::new();
        let _ = builder.set_data_json(value);
        builder
    }

    /// Sets the store identifier.
    ///
    /// Valid values are non-empty, non-numeric strings. On success the
    /// stored value is returned; on failure the prior state is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotText`], [`CheckoutError::EmptyText`], or
    /// [`CheckoutError::NumericText`] when the value fails validation.
    pub fn set_store(&mut self, value: impl Into<FieldValue>) -> Result<String> {
        self.set_text_field(FIELD_STORE, value.into())
    }

    /// Sets the item code.
    ///
    /// Same constraint as [`set_store`](Self::set_store).
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotText`], [`CheckoutError::EmptyText`], or
    /// [`CheckoutError::NumericText`] when the value fails validation.
    pub fn set_itemcode(&mut self, value: impl Into<FieldValue>) -> Result<String> {
        self.set_text_field(FIELD_ITEMCODE, value.into())
    }

    /// Sets the signout callback URL.
    ///
    /// The value is treated as an opaque string, not parsed as a URL.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotText`], [`CheckoutError::EmptyText`], or
    /// [`CheckoutError::NumericText`] when the value fails validation.
    pub fn set_signouturl(&mut self, value: impl Into<FieldValue>) -> Result<String> {
        self.set_text_field(FIELD_SIGNOUTURL, value.into())
    }

    /// Sets the payment amount.
    ///
    /// Valid values are numbers strictly greater than zero. Numeric strings
    /// do not qualify.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotNumeric`] for non-numeric values and
    /// [`CheckoutError::NonPositiveAmount`] for zero or negative amounts.
    pub fn set_amount(&mut self, value: impl Into<FieldValue>) -> Result<Decimal> {
        let value = value.into();
        let Some(amount) = value.as_number() else {
            return Err(CheckoutError::NotNumeric { got: value.kind() });
        };
        if amount <= Decimal::ZERO {
            return Err(CheckoutError::NonPositiveAmount { amount });
        }
        self.insert(FIELD_AMOUNT.to_owned(), FieldValue::Number(amount));
        Ok(amount)
    }

    /// Returns the store identifier, if one is validly set right now.
    #[must_use]
    pub fn store(&self) -> Option<&str> {
        self.valid_text(FIELD_STORE)
    }

    /// Returns the item code, if one is validly set right now.
    #[must_use]
    pub fn itemcode(&self) -> Option<&str> {
        self.valid_text(FIELD_ITEMCODE)
    }

    /// Returns the signout callback URL, if one is validly set right now.
    #[must_use]
    pub fn signouturl(&self) -> Option<&str> {
        self.valid_text(FIELD_SIGNOUTURL)
    }

    /// Returns the amount, if one is validly set right now.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self.field(FIELD_AMOUNT)? {
            FieldValue::Number(amount) if *amount > Decimal::ZERO => Some(*amount),
            _ => None,
        }
    }

    /// Returns the raw stored value for a field, required or extension.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Merges a bulk mapping into the field store.
    ///
    /// Every entry overwrites by key, required and extension fields alike,
    /// with no per-field validation. This asymmetry with the single-field
    /// setters is part of the gateway contract: bulk data arrives exactly
    /// as supplied and validity is re-derived by the accessors. Overwriting
    /// an existing key keeps its original position.
    ///
    /// Returns the full field store after the merge.
    pub fn set_data<K, V>(&mut self, fields: impl IntoIterator<Item = (K, V)>) -> &[(String, FieldValue)]
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let before = self.fields.len();
        for (name, value) in fields {
            self.insert(name.into(), value.into());
        }
        debug!(added = self.fields.len() - before, total = self.fields.len(), "merged bulk field data");
        &self.fields
    }

    /// Merges a JSON object into the field store.
    ///
    /// Same contract as [`set_data`](Self::set_data). The merge is atomic:
    /// if the input is rejected, the store is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NotAMapping`] when the value is not a JSON
    /// object and [`CheckoutError::UnsupportedValue`] when an entry holds
    /// anything other than a string or a number.
    pub fn set_data_json(&mut self, value: &Value) -> Result<&[(String, FieldValue)]> {
        let object = value.as_object().ok_or(CheckoutError::NotAMapping)?;
        let mut converted = Vec::with_capacity(object.len());
        for (name, entry) in object {
            converted.push((name.clone(), FieldValue::try_from(entry)?));
        }
        Ok(self.set_data(converted))
    }

    /// Returns the full field store, in insertion order.
    #[must_use]
    pub fn data(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Returns true when all four required fields hold valid values.
    ///
    /// Validity is re-derived from the current store on every call, because
    /// [`set_data`](Self::set_data) can alter fields without going through
    /// the validating setters.
    #[must_use]
    pub fn required_fields_set(&self) -> bool {
        self.store().is_some()
            && self.itemcode().is_some()
            && self.amount().is_some()
            && self.signouturl().is_some()
    }

    /// Renders the redirect URL from the current field store.
    ///
    /// The store value becomes the path segment, emitted raw. The query
    /// string carries itemcode, amount, and signouturl in that fixed order,
    /// then every extension field in insertion order; values are form
    /// encoded unless already percent-encoded. No validation happens here:
    /// whatever is stored renders, and absent fields are simply omitted.
    /// Callers that care about completeness check
    /// [`required_fields_set`](Self::required_fields_set) first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cashnet_redirect::{FieldValue, RedirectUrlBuilder};
    /// use rust_decimal::Decimal;
    ///
    /// let builder = RedirectUrlBuilder::with_fields([
    ///     ("store", FieldValue::from("CASHNET-STORE")),
    ///     ("itemcode", FieldValue::from("ITEMCODE")),
    ///     ("amount", FieldValue::from(Decimal::new(4221, 2))),
    ///     ("signouturl", FieldValue::from("https://localhost/callback.php")),
    ///     ("CARDNAME_G", FieldValue::from("John G.")),
    /// ]);
    ///
    /// assert_eq!(
    ///     builder.redirect_url(),
    ///     "https://commerce.cashnet.com/CASHNET-STORE?itemcode=ITEMCODE&amount=42.21&signouturl=https%3A%2F%2Flocalhost%2Fcallback.php&CARDNAME_G=John+G."
    /// );
    /// ```
    #[must_use]
    pub fn redirect_url(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(self.fields.len());
        for name in QUERY_FIELD_ORDER {
            if let Some(value) = self.field(name) {
                pairs.push((name, value.to_string()));
            }
        }
        for (name, value) in &self.fields {
            if name != FIELD_STORE && !QUERY_FIELD_ORDER.contains(&name.as_str()) {
                pairs.push((name, value.to_string()));
            }
        }

        let store = self.field(FIELD_STORE).map(ToString::to_string).unwrap_or_default();
        let query = encode::query_string(&pairs);
        trace!(store = %store, fields = pairs.len(), "rendered redirect URL");

        format!("{CHECKOUT_BASE_URL}/{store}?{query}")
    }

    fn set_text_field(&mut self, field: &'static str, value: FieldValue) -> Result<String> {
        let text = match value {
            FieldValue::Text(text) => text,
            other => return Err(CheckoutError::NotText { field, got: other.kind() }),
        };
        if text.is_empty() {
            return Err(CheckoutError::EmptyText { field });
        }
        if is_numeric_text(&text) {
            return Err(CheckoutError::NumericText { field });
        }
        self.insert(field.to_owned(), FieldValue::Text(text.clone()));
        Ok(text)
    }

    fn valid_text(&self, name: &str) -> Option<&str> {
        match self.field(name)? {
            FieldValue::Text(text) if !text.is_empty() && !is_numeric_text(text) => Some(text),
            _ => None,
        }
    }

    fn insert(&mut self, name: String, value: FieldValue) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }
}

/// A string counts as numeric when it parses as a plain decimal number.
///
/// Mirrors the gateway's treatment of values like `"123"` or `"-12.12"`:
/// they are amounts in disguise, not identifiers.
fn is_numeric_text(text: &str) -> bool {
    text.parse::<Decimal>().is_ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn invalid_string_values() -> Vec<FieldValue> {
        vec![
            FieldValue::from(0_i64),
            FieldValue::from(""),
            FieldValue::from(42_i64),
            FieldValue::from(Decimal::new(2121, 2)),
            FieldValue::from(-24_i64),
            FieldValue::from(Decimal::new(-1212, 2)),
            FieldValue::from("123"),
        ]
    }

    fn invalid_amount_values() -> Vec<FieldValue> {
        vec![
            FieldValue::from("not a number"),
            FieldValue::from(0_i64),
            FieldValue::from(""),
            FieldValue::from(-24_i64),
            FieldValue::from(Decimal::new(-1212, 2)),
        ]
    }

    #[test]
    fn test_set_store_round_trip() {
        let mut builder = RedirectUrlBuilder::new();
        let stored = builder.set_store("CASHNET-STORE").unwrap();
        assert_eq!(stored, "CASHNET-STORE");
        assert_eq!(builder.store(), Some("CASHNET-STORE"));
    }

    #[test]
    fn test_set_store_rejects_invalid_values() {
        for value in invalid_string_values() {
            let mut builder = RedirectUrlBuilder::new();
            assert!(builder.set_store(value).is_err());
            assert_eq!(builder.store(), None);
            assert!(builder.data().is_empty(), "failed set must not mutate the store");
        }
    }

    #[test]
    fn test_set_itemcode_round_trip() {
        let mut builder = RedirectUrlBuilder::new();
        let stored = builder.set_itemcode("ITEMCODE").unwrap();
        assert_eq!(stored, "ITEMCODE");
        assert_eq!(builder.itemcode(), Some("ITEMCODE"));
    }

    #[test]
    fn test_set_itemcode_rejects_invalid_values() {
        for value in invalid_string_values() {
            let mut builder = RedirectUrlBuilder::new();
            assert!(builder.set_itemcode(value).is_err());
            assert_eq!(builder.itemcode(), None);
        }
    }

    #[test]
    fn test_set_signouturl_round_trip() {
        let mut builder = RedirectUrlBuilder::new();
        let stored = builder.set_signouturl("https://localhost/callback.php").unwrap();
        assert_eq!(stored, "https://localhost/callback.php");
        assert_eq!(builder.signouturl(), Some("https://localhost/callback.php"));
    }

    #[test]
    fn test_set_amount_round_trip() {
        let mut builder = RedirectUrlBuilder::new();
        let amount = Decimal::new(4242, 2);
        assert_eq!(builder.set_amount(amount).unwrap(), amount);
        assert_eq!(builder.amount(), Some(amount));
    }

    #[test]
    fn test_set_amount_rejects_invalid_values() {
        for value in invalid_amount_values() {
            let mut builder = RedirectUrlBuilder::new();
            assert!(builder.set_amount(value).is_err());
            assert_eq!(builder.amount(), None);
        }
    }

    #[test]
    fn test_set_amount_error_kinds() {
        let mut builder = RedirectUrlBuilder::new();
        assert_eq!(
            builder.set_amount("not a number"),
            Err(CheckoutError::NotNumeric { got: "a string" })
        );
        assert_eq!(
            builder.set_amount(0_i64),
            Err(CheckoutError::NonPositiveAmount { amount: Decimal::ZERO })
        );
    }

    #[test]
    fn test_failed_set_keeps_prior_valid_value() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_amount(10_i64).unwrap();
        assert!(builder.set_amount(0_i64).is_err());
        assert_eq!(builder.amount(), Some(Decimal::from(10_i64)));

        builder.set_store("CASHNET-STORE").unwrap();
        assert!(builder.set_store("").is_err());
        assert_eq!(builder.store(), Some("CASHNET-STORE"));
    }

    #[test]
    fn test_required_fields_set_complete() {
        let builder = RedirectUrlBuilder::with_fields([
            ("store", FieldValue::from("CASHNET-STORE")),
            ("itemcode", FieldValue::from("ITEMCODE")),
            ("amount", FieldValue::from(Decimal::new(4242, 2))),
            ("signouturl", FieldValue::from("https://localhost/callback.php")),
        ]);
        assert!(builder.required_fields_set());
    }

    #[test]
    fn test_required_fields_set_missing_any_one() {
        let all = [
            ("store", FieldValue::from("CASHNET-STORE")),
            ("itemcode", FieldValue::from("ITEMCODE")),
            ("amount", FieldValue::from(Decimal::new(4242, 2))),
            ("signouturl", FieldValue::from("https://localhost/callback.php")),
        ];
        for skip in 0..all.len() {
            let fields: Vec<_> =
                all.iter().enumerate().filter(|(i, _)| *i != skip).map(|(_, f)| f.clone()).collect();
            let builder = RedirectUrlBuilder::with_fields(fields);
            assert!(!builder.required_fields_set(), "missing {} must fail", all[skip].0);
        }
    }

    #[test]
    fn test_set_data_bypasses_validation() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_data([("store", FieldValue::from(0_i64))]);
        assert_eq!(builder.field("store"), Some(&FieldValue::from(0_i64)));
        // Validity is re-derived by the accessor, so the getter still
        // reports the field as unset.
        assert_eq!(builder.store(), None);
        assert!(!builder.required_fields_set());
    }

    #[test]
    fn test_set_data_returns_full_store_in_order() {
        let mut builder = RedirectUrlBuilder::new();
        let merged = builder.set_data([
            ("store", FieldValue::from("CASHNET-STORE")),
            ("CARDNAME_G", FieldValue::from("John G.")),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].0, "store");
        assert_eq!(merged[1].0, "CARDNAME_G");
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_data([
            ("first", FieldValue::from("1st")),
            ("second", FieldValue::from("2nd")),
            ("third", FieldValue::from("3rd")),
        ]);
        builder.set_data([("second", FieldValue::from("updated"))]);

        let names: Vec<_> = builder.data().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(builder.field("second"), Some(&FieldValue::from("updated")));
    }

    #[test]
    fn test_set_data_json_object() {
        let mut builder = RedirectUrlBuilder::new();
        builder
            .set_data_json(&json!({
                "store": "CASHNET-STORE",
                "amount": 42.21,
            }))
            .unwrap();
        assert_eq!(builder.store(), Some("CASHNET-STORE"));
        assert_eq!(builder.amount(), Some(Decimal::new(4221, 2)));
    }

    #[test]
    fn test_set_data_json_rejects_non_objects() {
        for input in [json!(null), json!(42), json!("store"), json!(["store"])] {
            let mut builder = RedirectUrlBuilder::new();
            assert_eq!(builder.set_data_json(&input).unwrap_err(), CheckoutError::NotAMapping);
            assert!(builder.data().is_empty());
        }
    }

    #[test]
    fn test_set_data_json_rejects_unsupported_entries_atomically() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_store("CASHNET-STORE").unwrap();

        let err = builder
            .set_data_json(&json!({"itemcode": "ITEMCODE", "flagged": true}))
            .unwrap_err();
        assert_eq!(err, CheckoutError::UnsupportedValue { kind: "a boolean" });
        // Nothing merged, not even the valid entry.
        assert_eq!(builder.data().len(), 1);
        assert_eq!(builder.itemcode(), None);
    }

    #[test]
    fn test_from_json_object_preserves_entry_order() {
        let builder = RedirectUrlBuilder::from_json(&json!({
            "store": "CASHNET-STORE",
            "itemcode": "ITEMCODE",
            "amount": 42.21,
            "signouturl": "https://localhost/callback.php",
            "CARDNAME_G": "John G.",
        }));
        let names: Vec<_> = builder.data().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["store", "itemcode", "amount", "signouturl", "CARDNAME_G"]);
        assert!(builder.required_fields_set());
    }

    #[test]
    fn test_from_json_non_object_yields_empty_builder() {
        for input in [json!(null), json!(42), json!("store"), json!([1, 2])] {
            let builder = RedirectUrlBuilder::from_json(&input);
            assert!(builder.data().is_empty());
            assert!(!builder.required_fields_set());
        }
    }

    #[test]
    fn test_redirect_url_renders_raw_store_segment() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_data([("store", FieldValue::from(0_i64))]);
        assert_eq!(builder.redirect_url(), "https://commerce.cashnet.com/0?");
    }

    #[test]
    fn test_redirect_url_empty_builder() {
        let builder = RedirectUrlBuilder::new();
        assert_eq!(builder.redirect_url(), "https://commerce.cashnet.com/?");
    }

    #[test]
    fn test_redirect_url_fixed_order_regardless_of_insertion() {
        let builder = RedirectUrlBuilder::with_fields([
            ("signouturl", FieldValue::from("https://localhost/callback.php")),
            ("amount", FieldValue::from(Decimal::new(4221, 2))),
            ("store", FieldValue::from("CASHNET-STORE")),
            ("itemcode", FieldValue::from("ITEMCODE")),
        ]);
        assert_eq!(
            builder.redirect_url(),
            "https://commerce.cashnet.com/CASHNET-STORE?itemcode=ITEMCODE&amount=42.21&signouturl=https%3A%2F%2Flocalhost%2Fcallback.php"
        );
    }

    #[test]
    fn test_redirect_url_extension_fields_follow_in_insertion_order() {
        let builder = RedirectUrlBuilder::with_fields([
            ("store", FieldValue::from("CASHNET-STORE")),
            ("CARDNAME_G", FieldValue::from("John G.")),
            ("itemcode", FieldValue::from("ITEMCODE")),
            ("REF_G", FieldValue::from("ref 42")),
            ("amount", FieldValue::from(Decimal::new(4221, 2))),
            ("signouturl", FieldValue::from("https://localhost/callback.php")),
        ]);
        assert_eq!(
            builder.redirect_url(),
            "https://commerce.cashnet.com/CASHNET-STORE?itemcode=ITEMCODE&amount=42.21&signouturl=https%3A%2F%2Flocalhost%2Fcallback.php&CARDNAME_G=John+G.&REF_G=ref+42"
        );
    }

    #[test]
    fn test_redirect_url_is_idempotent() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_store("CASHNET-STORE").unwrap();
        builder.set_itemcode("ITEMCODE").unwrap();
        let first = builder.redirect_url();
        let second = builder.redirect_url();
        assert_eq!(first, second);
    }

    #[test]
    fn test_redirect_url_renders_after_further_mutation() {
        let mut builder = RedirectUrlBuilder::new();
        builder.set_store("CASHNET-STORE").unwrap();
        let before = builder.redirect_url();
        builder.set_itemcode("ITEMCODE").unwrap();
        let after = builder.redirect_url();
        assert_ne!(before, after);
        assert!(after.contains("itemcode=ITEMCODE"));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn test_valid_store_values_round_trip(store in "[A-Za-z][A-Za-z0-9_-]{0,31}") {
                let mut builder = RedirectUrlBuilder::new();
                let stored = builder.set_store(store.as_str()).expect("identifier must be accepted");
                prop_assert_eq!(stored, store.as_str());
                prop_assert_eq!(builder.store(), Some(store.as_str()));
            }

            #[test]
            fn test_positive_amounts_round_trip(units in 1_i64..=10_000_000, scale in 0_u32..=4) {
                let amount = Decimal::new(units, scale);
                let mut builder = RedirectUrlBuilder::new();
                prop_assert_eq!(builder.set_amount(amount).expect("positive amount must be accepted"), amount);
                prop_assert_eq!(builder.amount(), Some(amount));
            }

            #[test]
            fn test_render_is_pure(
                key in "[A-Za-z][A-Za-z0-9_]{0,15}",
                value in "[ -~]{0,32}",
            ) {
                let mut builder = RedirectUrlBuilder::new();
                builder.set_store("CASHNET-STORE").expect("valid store");
                builder.set_data([(key, FieldValue::from(value))]);
                let snapshot = builder.data().to_vec();
                prop_assert_eq!(builder.redirect_url(), builder.redirect_url());
                prop_assert_eq!(builder.data(), snapshot.as_slice());
            }

            #[test]
            fn test_rendered_query_has_no_raw_spaces(value in "[ -$&-~]{1,32}") {
                // Values without a percent sign always go through form
                // encoding, so no raw space survives into the URL.
                let mut builder = RedirectUrlBuilder::new();
                builder.set_data([("NOTE_G", FieldValue::from(value))]);
                prop_assert!(!builder.redirect_url().contains(' '));
            }
        }
    }
}
