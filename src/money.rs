//! Integer cents → display strings.

pub const DEFAULT_SIGN: &str = "$";

/// `4750` → `"$47.50"`.
#[inline]
pub fn cents_to_dollars(cents: i64) -> String {
    cents_to_dollars_with_sign(cents, DEFAULT_SIGN)
}

/// Format `cents` as `sign` followed by a fixed-point amount with exactly two
/// decimals and no thousands separator.
///
/// The minus of a negative amount follows the sign: `-999` with `"$"` gives
/// `"$-9.99"`. `sign` may be empty.
///
/// Integer arithmetic only, so every `i64` (including `i64::MIN`) formats
/// exactly.
pub fn cents_to_dollars_with_sign(cents: i64, sign: &str) -> String {
    let magnitude = cents.unsigned_abs();
    let minus = if cents < 0 { "-" } else { "" };
    format!("{sign}{minus}{}.{:02}", magnitude / 100, magnitude % 100)
}
