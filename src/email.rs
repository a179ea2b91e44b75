//! Loose email address check.
//!
//! One `@`, a dot somewhere after the first domain label, and at least two
//! characters after the last dot. No whitespace anywhere. Trim input first;
//! this is a sanity filter, not RFC 5322.

use crate::utf8::is_typical_utf8;
use regex::bytes::Regex;
use std::sync::LazyLock;

// Byte-oriented: `\s` is ASCII whitespace and `{2,}` counts bytes.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)\A[^\s@]+@[^\s@.]+\.[^\s@]{2,}\z").expect("static pattern")
});

/// `true` if `email` looks like an address.
#[inline]
pub fn is_valid_email(email: &str) -> bool {
    is_valid_email_bytes(email.as_bytes())
}

/// [`is_valid_email`] for input that may not be UTF-8 at all. Anything that
/// is not typical UTF-8 is rejected.
pub fn is_valid_email_bytes(email: &[u8]) -> bool {
    is_typical_utf8(email) && EMAIL_PATTERN.is_match(email)
}
