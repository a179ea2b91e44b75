//! stage/transliterate.rs – **ASCII transliteration (lossy)**
//! * Ä → "A", ß → "ss", Ж → "Zh", Θ → "8", Ъ → "" (deleted)
//! * Preserves case of the source letter
//! * Single pass: substituted ASCII is never looked up again
//! * Zero-copy when the text holds no table key
use crate::{
    stage::Stage,
    transliteration::{is_transliterable, transliterate_char},
};
use std::borrow::Cow;

/// Public stage – zero-sized, stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    /// ASCII never needs the table; `apply` does the per-char lookup.
    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        // Copy the untouched prefix in one go.
        let Some(first) = text.find(is_transliterable) else {
            return text;
        };

        let mut out = String::with_capacity(text.len() + (text.len() >> 3));
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match transliterate_char(c) {
                Some(ascii) => out.push_str(ascii),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_transliteration() {
        let stage = Transliterate;
        let input = "Hello World";
        assert!(!stage.needs_apply(input));
        let result = stage.apply(Cow::Borrowed(input));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Hello World");
    }

    #[test]
    fn test_non_latin_without_table_entry_is_borrowed() {
        let stage = Transliterate;
        let input = "東京 🧟";
        assert!(matches!(stage.apply(Cow::Borrowed(input)), Cow::Borrowed(_)));
    }

    #[test]
    fn test_hungarian_double_acute() {
        let stage = Transliterate;
        let result = stage.apply(Cow::Borrowed("HÉllo wőrld, fűn!"));
        assert_eq!(result, "HEllo world, fun!");
    }

    #[test]
    fn test_expansion_and_case() {
        let stage = Transliterate;
        assert_eq!(stage.apply(Cow::Borrowed("Straße")), "Strasse");
        assert_eq!(stage.apply(Cow::Borrowed("Жук")), "Zhuk");
        assert_eq!(stage.apply(Cow::Borrowed("ЖУК")), "ZhUK");
        assert_eq!(stage.apply(Cow::Borrowed("Þór")), "THor");
    }

    #[test]
    fn test_deletion() {
        let stage = Transliterate;
        assert_eq!(stage.apply(Cow::Borrowed("объект")), "obekt");
        assert_eq!(stage.apply(Cow::Borrowed("Ь")), "");
    }

    #[test]
    fn test_mixed_scripts() {
        let stage = Transliterate;
        let input = "Łódź Київ Αθήνα İzmir Český";
        assert!(stage.needs_apply(input));
        assert_eq!(
            stage.apply(Cow::Borrowed(input)),
            "Lodz Kiyiv A8hna Izmir Cesky"
        );
    }

    #[test]
    fn test_single_pass_no_rescan() {
        // "(c)" contains ASCII only so nothing downstream of it changes.
        let stage = Transliterate;
        assert_eq!(stage.apply(Cow::Borrowed("© 2024")), "(c) 2024");
    }

    #[test]
    fn test_idempotency() {
        let stage = Transliterate;
        let first = stage.apply(Cow::Borrowed("Ærøskøbing Ελλάδα"));
        assert!(!stage.needs_apply(&first));
        let second = stage.apply(first.clone());
        assert_eq!(first, second);
    }
}
