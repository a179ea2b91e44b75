//! Slug pipeline stage abstraction.
//!
//! A [`Slugifier`](crate::slug::Slugifier) is an ordered list of stages. Every
//! stage works on a `Cow<str>`:
//!
//! * `needs_apply(&self, text) -> bool` is a cheap scan. Returning `false`
//!   skips the stage and the text flows on untouched.
//! * `apply(&self, text) -> Cow<str>` performs the transformation. Stages
//!   hand the input back unchanged (still `Cow::Borrowed` if it was) when
//!   nothing needed rewriting.
//!
//! Stages are configured when the pipeline is compiled, so `apply` itself is
//! infallible. Anything that can fail (regex compilation) fails earlier, in
//! [`Slugifier::new`](crate::slug::Slugifier::new).

pub mod collapse_non_alphanumeric;
pub mod dedup_delimiter;
pub mod lowercase;
pub mod replace_pattern;
pub mod transliterate;
pub mod trim_delimiter;
pub mod truncate;

pub use collapse_non_alphanumeric::CollapseNonAlphanumeric;
pub use dedup_delimiter::DedupDelimiter;
pub use lowercase::Lowercase;
pub use replace_pattern::ReplacePattern;
pub use transliterate::Transliterate;
pub use trim_delimiter::TrimDelimiter;
pub use truncate::Truncate;

use std::borrow::Cow;

/// A single slug pipeline step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and `Debug` output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without a preceding `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}

/// Run `stage` over `text` honouring its pre-check.
#[inline(always)]
pub(crate) fn run<'a, S: Stage + ?Sized>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if stage.needs_apply(&text) {
        stage.apply(text)
    } else {
        text
    }
}
