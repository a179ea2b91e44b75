//! Random strings for keys and one-time codes.
//!
//! Characters come from the standard base64 alphabet with the look-alikes
//! removed, which leaves 54 symbols (≈ 5.75 bits each).

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Characters that are never emitted: base64 padding/punctuation and glyphs
/// easily confused when read or typed by hand.
pub const AMBIGUOUS_CHARACTERS: &[char] = &['+', '/', '=', 'o', 'O', '0', 'i', 'I', 'l', 'L', '1'];

#[inline(always)]
pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS_CHARACTERS.contains(&c)
}

/// A cryptographically random string of exactly `length` unambiguous
/// characters.
///
/// Draws `length * 3` bytes per round from the thread-local CSPRNG,
/// base64-encodes them, filters out [`AMBIGUOUS_CHARACTERS`] and repeats
/// until enough characters are collected.
pub fn get_random_string(length: usize) -> String {
    if length == 0 {
        return String::new();
    }

    let mut rng = rand::rng();
    let mut bytes = vec![0u8; length.saturating_mul(3)];
    let mut encoded = String::with_capacity(bytes.len().div_ceil(3) * 4);
    let mut out = String::with_capacity(length);

    while out.len() < length {
        rng.fill_bytes(&mut bytes);
        encoded.clear();
        STANDARD.encode_string(&bytes, &mut encoded);
        out.extend(encoded.chars().filter(|&c| !is_ambiguous(c)));
    }

    // Every char is ASCII, so byte length == char count.
    out.truncate(length);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        for n in [1, 2, 3, 17, 512, 1025] {
            assert_eq!(get_random_string(n).len(), n);
        }
        assert_eq!(get_random_string(0), "");
    }

    #[test]
    fn test_contains_no_ambiguous_chars() {
        for _ in 0..1000 {
            let s = get_random_string(512);
            assert!(!s.chars().any(is_ambiguous), "{s}");
        }
    }

    #[test]
    fn test_alphabet() {
        let s = get_random_string(4096);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_values_differ() {
        assert_ne!(get_random_string(32), get_random_string(32));
    }
}
