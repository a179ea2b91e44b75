//! Custom search-and-replace rules for the slug pipeline.
//!
//! Patterns are [`regex`] syntax. Rules written for PCRE-style engines
//! (`/pattern/flags`, `\1` backreferences) can be brought over with
//! [`Replacement::delimited`].

use crate::slug::SlugError;

/// An uncompiled `(pattern, replacement)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pattern: String,
    replacement: String,
}

impl Replacement {
    /// `pattern` is `regex` syntax; `replacement` may reference groups as
    /// `$1` or `${name}`.
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Build a rule from a delimited pattern such as `/zombie/i` or
    /// `~(\d+)-(\d+)~`.
    ///
    /// The first character is the delimiter; bracket-style delimiters close
    /// with their counterpart (`{…}`, `(…)`, `[…]`, `<…>`). Trailing flags
    /// `i`, `m`, `s`, `x` and `U` become an inline `(?…)` group, `u` is
    /// accepted and ignored. Backreferences `\0`–`\99` in `replacement` are
    /// rewritten to `${N}`.
    pub fn delimited(pattern: &str, replacement: &str) -> Result<Self, SlugError> {
        let malformed = || SlugError::MalformedDelimited(pattern.to_owned());

        let mut chars = pattern.chars();
        let open = chars.next().ok_or_else(malformed)?;
        if open.is_alphanumeric() || open == '\\' || open.is_whitespace() {
            return Err(malformed());
        }
        let close = match open {
            '(' => ')',
            '{' => '}',
            '[' => ']',
            '<' => '>',
            other => other,
        };

        let body = chars.as_str();
        let end = body.rfind(close).ok_or_else(malformed)?;
        let (inner, flags) = (&body[..end], &body[end + close.len_utf8()..]);

        let mut inline = String::new();
        for flag in flags.chars() {
            match flag {
                'i' | 'm' | 's' | 'x' | 'U' => {
                    if !inline.contains(flag) {
                        inline.push(flag);
                    }
                }
                'u' => {}
                other => {
                    return Err(SlugError::UnsupportedFlag {
                        flag: other,
                        pattern: pattern.to_owned(),
                    });
                }
            }
        }

        let pattern = if inline.is_empty() {
            inner.to_owned()
        } else {
            format!("(?{inline}){inner}")
        };
        Ok(Self::new(pattern, expand_backreferences(replacement)))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

impl<P: Into<String>, R: Into<String>> From<(P, R)> for Replacement {
    fn from((pattern, replacement): (P, R)) -> Self {
        Self::new(pattern, replacement)
    }
}

/// `\1` and `$1` → `${1}`; a lone `$` → `$$`.
fn expand_backreferences(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' | '$' if chars.peek().is_some_and(char::is_ascii_digit) => {
                out.push_str("${");
                for _ in 0..2 {
                    match chars.next_if(char::is_ascii_digit) {
                        Some(d) => out.push(d),
                        None => break,
                    }
                }
                out.push('}');
            }
            '\\' if chars.peek() == Some(&'\\') => {
                chars.next();
                out.push('\\');
            }
            '$' if chars.peek() == Some(&'{') => out.push('$'),
            '$' => out.push_str("$$"),
            other => out.push(other),
        }
    }
    out
}
