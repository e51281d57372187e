//! Cashnet Redirect: hosted-checkout payment redirect URLs.
//!
//! A small builder for the redirect URL a storefront sends a payer to when
//! handing off to the Cashnet hosted checkout. The builder validates the
//! four required fields (store, itemcode, amount, signouturl), carries any
//! number of extension fields verbatim, and renders everything into a
//! canonical absolute URL:
//!
//! ```text
//! https://commerce.cashnet.com/<store>?<querystring>
//! ```
//!
//! The crate owns no network, file, or process boundary. Transmitting the
//! URL (typically as an HTTP redirect) and sourcing the field values are
//! the caller's concerns.
//!
//! # Quick Start
//!
//! ```
//! use cashnet_redirect::RedirectUrlBuilder;
//! use rust_decimal::Decimal;
//!
//! let mut builder = RedirectUrlBuilder::new();
//! builder.set_store("CASHNET-STORE")?;
//! builder.set_itemcode("ITEMCODE")?;
//! builder.set_amount(Decimal::new(4221, 2))?;
//! builder.set_signouturl("https://localhost/callback.php")?;
//!
//! assert!(builder.required_fields_set());
//! assert_eq!(
//!     builder.redirect_url(),
//!     "https://commerce.cashnet.com/CASHNET-STORE?itemcode=ITEMCODE&amount=42.21&signouturl=https%3A%2F%2Flocalhost%2Fcallback.php"
//! );
//! # Ok::<(), cashnet_redirect::CheckoutError>(())
//! ```
//!
//! # Bulk Data and Extension Fields
//!
//! Upstream request data often arrives as one mapping. Bulk assignment
//! merges it verbatim, without per-field validation; validity is re-derived
//! by the accessors when asked:
//!
//! ```
//! use cashnet_redirect::RedirectUrlBuilder;
//! use serde_json::json;
//!
//! let builder = RedirectUrlBuilder::from_json(&json!({
//!     "store": "CASHNET-STORE",
//!     "itemcode": "ITEMCODE",
//!     "amount": 42.21,
//!     "signouturl": "https://localhost/callback.php",
//!     "CARDNAME_G": "John G.",
//! }));
//!
//! assert!(builder.required_fields_set());
//! assert!(builder.redirect_url().ends_with("&CARDNAME_G=John+G."));
//! ```
//!
//! # Pre-Encoded Values
//!
//! A value that already contains a `%XX` escape sequence is passed through
//! into the query string untouched, so a caller that pre-encodes a nested
//! URL does not get it double-encoded. See [`encode::is_percent_encoded`]
//! for the exact rule and its known ambiguity.
//!
//! # Validation Failures
//!
//! Validation failure is routine, not exceptional: setters return
//! [`CheckoutError`] results and never panic. Rendering performs no
//! validation at all; it serializes whatever the field store holds.

pub mod builder;
pub mod encode;
pub mod error;
pub mod field;

pub use builder::{
    CHECKOUT_BASE_URL, FIELD_AMOUNT, FIELD_ITEMCODE, FIELD_SIGNOUTURL, FIELD_STORE,
    RedirectUrlBuilder,
};
pub use error::{CheckoutError, Result};
pub use field::FieldValue;
