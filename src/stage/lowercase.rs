use crate::stage::Stage;
use std::borrow::Cow;

/// Unicode-aware lowercasing (`str::to_lowercase`).
///
/// Context-sensitive rules from `SpecialCasing.txt` apply, so a word-final
/// `Σ` becomes `ς`. No language tailoring: `I` always maps to `i`.
///
/// Characters whose full lowercase mapping expands (`İ` → `i` + U+0307) fold
/// to the first character only, so the output never gains combining marks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowercase;

impl Stage for Lowercase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        !text.chars().all(|c| c.to_lowercase().eq([c]))
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if text.is_ascii() {
            return match text {
                Cow::Owned(mut s) => {
                    s.make_ascii_lowercase();
                    Cow::Owned(s)
                }
                Cow::Borrowed(s) if s.bytes().any(|b| b.is_ascii_uppercase()) => {
                    Cow::Owned(s.to_ascii_lowercase())
                }
                borrowed => borrowed,
            };
        }
        let lowered = if text.chars().any(expands_on_lowercase) {
            text.chars()
                .map(simple_fold)
                .collect::<String>()
                .to_lowercase()
        } else {
            text.to_lowercase()
        };
        if lowered == *text {
            return text;
        }
        Cow::Owned(lowered)
    }
}

#[inline]
fn expands_on_lowercase(c: char) -> bool {
    c.to_lowercase().nth(1).is_some()
}

#[inline]
fn simple_fold(c: char) -> char {
    if expands_on_lowercase(c) {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}
