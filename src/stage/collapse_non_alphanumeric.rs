use crate::stage::Stage;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Anything that is neither a Unicode letter nor a decimal digit.
static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]+").expect("static pattern"));

/// Replace every maximal run of non-letter, non-digit characters with one
/// delimiter.
///
/// Classification is Unicode-aware: `東京`, `Ωμέγα` or `٣` survive untouched,
/// while punctuation, whitespace, symbols, emoji and combining marks become
/// the delimiter. Letter numbers such as `Ⅻ` (`Nl`) are *not* decimal digits and
/// are replaced as well.
#[derive(Debug, Clone, Copy)]
pub struct CollapseNonAlphanumeric {
    delimiter: char,
}

impl CollapseNonAlphanumeric {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Stage for CollapseNonAlphanumeric {
    fn name(&self) -> &'static str {
        "collapse_non_alphanumeric"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return !text.bytes().all(|b| b.is_ascii_alphanumeric());
        }
        NON_ALPHANUMERIC_RUN.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut buf = [0u8; 4];
        let delimiter: &str = self.delimiter.encode_utf8(&mut buf);
        if let Cow::Owned(out) = NON_ALPHANUMERIC_RUN.replace_all(&text, NoExpand(delimiter)) {
            return Cow::Owned(out);
        }
        text
    }
}
