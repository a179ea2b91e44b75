use crate::stage::Stage;
use std::borrow::Cow;

/// Collapse every run of two or more delimiters into a single one.
///
/// Runs appear when a custom replacement emits a delimiter next to an
/// existing one (`"a-&-b"` with `&` → `-and-` style rules).
#[derive(Debug, Clone)]
pub struct DedupDelimiter {
    delimiter: char,
    pair: String,
}

impl DedupDelimiter {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            pair: [delimiter, delimiter].iter().collect(),
        }
    }
}

impl Stage for DedupDelimiter {
    fn name(&self) -> &'static str {
        "dedup_delimiter"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.contains(self.pair.as_str())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let mut out = String::with_capacity(text.len());
        let mut previous_was_delimiter = false;
        for c in text.chars() {
            let is_delimiter = c == self.delimiter;
            if !(is_delimiter && previous_was_delimiter) {
                out.push(c);
            }
            previous_was_delimiter = is_delimiter;
        }
        Cow::Owned(out)
    }
}
