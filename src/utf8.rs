//! UTF-8 classification and repair.
//!
//! * [`is_raw_utf8`] – strict well-formedness, nothing more
//! * [`is_typical_utf8`] – well-formed **and** free of C0 control bytes other
//!   than tab, line feed and carriage return; the sane default for
//!   user-generated text
//! * [`to_utf8`] – drop every invalid sequence, zero-copy when there is none
//!
//! ### Why a byte scan is enough
//! Every byte of a multi-byte UTF-8 sequence (lead or continuation) is
//! `>= 0x80`. A byte below `0x20` can therefore only ever be the ASCII control
//! character itself, and checking raw bytes is equivalent to checking decoded
//! code points.

#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;
use std::borrow::Cow;
#[cfg(not(feature = "simd"))]
use std::str::from_utf8;

/// `true` iff `bytes` is well-formed UTF-8.
///
/// Overlong encodings, surrogate code points (`U+D800`–`U+DFFF`), values past
/// `U+10FFFF` and truncated sequences are all rejected. The empty slice is
/// valid.
#[inline]
pub fn is_raw_utf8(bytes: &[u8]) -> bool {
    from_utf8(bytes).is_ok()
}

/// `true` iff `bytes` is well-formed UTF-8 without rejected control bytes.
#[inline]
pub fn is_typical_utf8(bytes: &[u8]) -> bool {
    is_raw_utf8(bytes) && !contains_rejected_control(bytes)
}

/// [`is_typical_utf8`] for text that is already known to be UTF-8.
#[inline]
pub fn is_typical_str(text: &str) -> bool {
    !contains_rejected_control(text.as_bytes())
}

/// Bytes `0x00–0x08`, `0x0B–0x0C` and `0x0E–0x1F`.
///
/// Tab (`0x09`), line feed (`0x0A`) and carriage return (`0x0D`) are allowed,
/// as is DEL (`0x7F`).
#[inline(always)]
pub const fn is_rejected_control(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F)
}

#[inline]
fn contains_rejected_control(bytes: &[u8]) -> bool {
    bytes.iter().copied().any(is_rejected_control)
}

/// Return `bytes` unchanged if well-formed, otherwise a copy with every
/// invalid sequence removed (no replacement character is inserted).
///
/// Control characters are left intact; combine with [`is_typical_utf8`] if
/// they matter.
pub fn to_utf8(bytes: &[u8]) -> Cow<'_, [u8]> {
    match to_utf8_string(bytes) {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// [`to_utf8`] typed as text.
pub fn to_utf8_string(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(bytes.len());
    let mut dropped = 0usize;
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    tracing::debug!(dropped, kept = out.len(), "removed invalid UTF-8 sequences");
    Cow::Owned(out)
}
