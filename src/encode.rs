//! Query string encoding for the hosted checkout endpoint.
//!
//! Values use the form encoding convention (space becomes `+`, reserved
//! characters are percent-escaped), with one wire-compatibility rule: a
//! value that already contains a `%XX` escape sequence is assumed to be
//! pre-encoded by the caller and passes through verbatim, so nested URLs
//! are never double-encoded. Field names are caller-controlled identifiers
//! and are emitted as stored.

use std::borrow::Cow;

/// Form-encodes a single value.
///
/// # Examples
///
/// ```
/// use cashnet_redirect::encode::form_encode;
///
/// assert_eq!(form_encode("John G."), "John+G.");
/// assert_eq!(
///     form_encode("https://localhost/callback.php"),
///     "https%3A%2F%2Flocalhost%2Fcallback.php"
/// );
/// ```
#[must_use]
pub fn form_encode(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Returns true if the value already contains a `%XX` escape sequence.
///
/// The check is a heuristic: a literal value that happens to contain `%`
/// followed by two hex digits is indistinguishable from a pre-encoded one
/// and will be passed through unescaped. The hosted endpoint expects this
/// behavior, so the ambiguity is kept as is.
///
/// # Examples
///
/// ```
/// use cashnet_redirect::encode::is_percent_encoded;
///
/// assert!(is_percent_encoded("https%3A%2F%2Flocalhost%2Fcallback.php"));
/// assert!(!is_percent_encoded("https://localhost/callback.php"));
/// assert!(!is_percent_encoded("100%"));
/// ```
#[must_use]
pub fn is_percent_encoded(value: &str) -> bool {
    value
        .as_bytes()
        .windows(3)
        .any(|window| window[0] == b'%' && window[1].is_ascii_hexdigit() && window[2].is_ascii_hexdigit())
}

/// Encodes a value for the query string, leaving pre-encoded values alone.
#[must_use]
pub fn encode_value(raw: &str) -> Cow<'_, str> {
    if is_percent_encoded(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(form_encode(raw))
    }
}

/// Joins field pairs into a query string, in slice order.
///
/// # Examples
///
/// ```
/// use cashnet_redirect::encode::query_string;
///
/// let query = query_string(&[("itemcode", "ITEMCODE"), ("CARDNAME_G", "John G.")]);
/// assert_eq!(query, "itemcode=ITEMCODE&CARDNAME_G=John+G.");
/// ```
#[must_use]
pub fn query_string<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(key.as_ref());
        out.push('=');
        out.push_str(&encode_value(value.as_ref()));
    }
    out
}
