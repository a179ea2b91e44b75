use crate::stage::Stage;
use std::borrow::Cow;

/// Strip leading and trailing delimiters.
#[derive(Debug, Clone, Copy)]
pub struct TrimDelimiter {
    delimiter: char,
}

impl TrimDelimiter {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Stage for TrimDelimiter {
    fn name(&self) -> &'static str {
        "trim_delimiter"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        text.starts_with(self.delimiter) || text.ends_with(self.delimiter)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(self.delimiter)),
            Cow::Owned(s) => {
                let trimmed = s.trim_matches(self.delimiter);
                if trimmed.len() == s.len() {
                    return Cow::Owned(s);
                }
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}
