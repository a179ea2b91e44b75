use crate::stage::Stage;
use std::borrow::Cow;

/// Keep at most `limit` Unicode scalar values.
#[derive(Debug, Clone, Copy)]
pub struct Truncate {
    limit: usize,
}

impl Truncate {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Byte offset of the first char past the limit, if any.
    #[inline]
    fn cut_at(&self, text: &str) -> Option<usize> {
        if text.len() <= self.limit {
            return None; // every char is at least one byte
        }
        text.char_indices().nth(self.limit).map(|(idx, _)| idx)
    }
}

impl Stage for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        self.cut_at(text).is_some()
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some(cut) = self.cut_at(&text) else {
            return text;
        };
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(&s[..cut]),
            Cow::Owned(mut s) => {
                s.truncate(cut);
                Cow::Owned(s)
            }
        }
    }
}
