use crate::{
    slug::{Replacement, SlugError},
    stage::Stage,
};
use regex::Regex;
use std::borrow::Cow;

/// One caller-supplied regex search-and-replace, compiled.
///
/// The replacement string uses `regex` expansion syntax (`$1`, `${name}`,
/// `$$` for a literal dollar).
#[derive(Debug, Clone)]
pub struct ReplacePattern {
    regex: Regex,
    replacement: String,
}

impl ReplacePattern {
    pub fn compile(rule: &Replacement) -> Result<Self, SlugError> {
        let regex = Regex::new(rule.pattern()).map_err(|source| SlugError::InvalidPattern {
            pattern: rule.pattern().to_owned(),
            source,
        })?;
        Ok(Self {
            regex,
            replacement: rule.replacement().to_owned(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Stage for ReplacePattern {
    fn name(&self) -> &'static str {
        "replace_pattern"
    }

    #[inline]
    fn needs_apply(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if let Cow::Owned(out) = self.regex.replace_all(&text, self.replacement.as_str()) {
            return Cow::Owned(out);
        }
        text
    }
}
