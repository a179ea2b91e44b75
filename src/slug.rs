//! URL slugs: `"Hello, wőrld!"` → `"hello-world"`.
//!
//! A [`Slugifier`] is compiled once from a [`SlugConfig`] and can then be
//! shared across threads. The pipeline always runs in this order:
//!
//! 1. transliteration to ASCII (optional)
//! 2. every run of non-letters/non-digits → one delimiter
//! 3. custom regex replacements, in order
//! 4. runs of delimiters → one delimiter
//! 5. truncation to `limit` characters (optional)
//! 6. delimiters trimmed from both ends
//! 7. lowercasing (optional)
//!
//! Disabled steps are left out of the pipeline entirely.

pub mod replacement;

pub use replacement::Replacement;

use crate::{
    stage::{
        self, CollapseNonAlphanumeric, DedupDelimiter, Lowercase, ReplacePattern, Stage,
        Transliterate, TrimDelimiter, Truncate,
    },
    utf8::to_utf8_string,
};
use smallvec::SmallVec;
use std::{borrow::Cow, fmt, sync::Arc};
use thiserror::Error;

pub const DEFAULT_DELIMITER: char = '-';

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("invalid replacement pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed delimited pattern `{0}`")]
    MalformedDelimited(String),

    #[error("unsupported flag `{flag}` in pattern `{pattern}`")]
    UnsupportedFlag { flag: char, pattern: String },
}

/// Slug options. `Default` gives `-` as delimiter, no limit, lowercasing and
/// transliteration on, no replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    pub delimiter: char,
    /// Maximum length in characters. `None` and `Some(0)` both mean unlimited.
    pub limit: Option<usize>,
    pub lowercase: bool,
    pub replacements: Vec<Replacement>,
    pub transliterate: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            limit: None,
            lowercase: true,
            replacements: Vec::new(),
            transliterate: true,
        }
    }
}

impl SlugConfig {
    pub fn builder() -> SlugConfigBuilder {
        SlugConfigBuilder::default()
    }

    /// The positive limit, if any.
    #[inline]
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }
}

#[derive(Debug, Default)]
pub struct SlugConfigBuilder {
    config: SlugConfig,
}

impl SlugConfigBuilder {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    pub fn transliterate(mut self, transliterate: bool) -> Self {
        self.config.transliterate = transliterate;
        self
    }

    /// Append a regex rule. Rules run in the order they were added.
    pub fn replace(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.config
            .replacements
            .push(Replacement::new(pattern, replacement));
        self
    }

    pub fn replacement(mut self, rule: Replacement) -> Self {
        self.config.replacements.push(rule);
        self
    }

    pub fn build(self) -> SlugConfig {
        self.config
    }

    /// Shortcut for `Slugifier::new(&builder.build())`.
    pub fn compile(self) -> Result<Slugifier, SlugError> {
        Slugifier::new(&self.config)
    }
}

/// A compiled slug pipeline.
#[derive(Clone)]
pub struct Slugifier {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Slugifier {
    pub fn new(config: &SlugConfig) -> Result<Self, SlugError> {
        let rules = config
            .replacements
            .iter()
            .map(ReplacePattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        let slugifier = Self::assemble(config, rules);
        tracing::debug!(
            stages = ?slugifier.stage_names().collect::<Vec<_>>(),
            replacements = config.replacements.len(),
            "compiled slugifier"
        );
        Ok(slugifier)
    }

    fn assemble(config: &SlugConfig, rules: Vec<ReplacePattern>) -> Self {
        let delimiter = config.delimiter;
        let mut stages: SmallVec<[Arc<dyn Stage>; 8]> = SmallVec::new();

        if config.transliterate {
            stages.push(Arc::new(Transliterate));
        }
        stages.push(Arc::new(CollapseNonAlphanumeric::new(delimiter)));
        for rule in rules {
            stages.push(Arc::new(rule));
        }
        stages.push(Arc::new(DedupDelimiter::new(delimiter)));
        if let Some(limit) = config.effective_limit() {
            stages.push(Arc::new(Truncate::new(limit)));
        }
        stages.push(Arc::new(TrimDelimiter::new(delimiter)));
        if config.lowercase {
            stages.push(Arc::new(Lowercase));
        }
        Self { stages }
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn slugify(&self, text: &str) -> String {
        let mut current = Cow::Borrowed(text);
        for s in &self.stages {
            current = stage::run(s.as_ref(), current);
        }
        tracing::trace!(input_len = text.len(), output_len = current.len(), "slugified");
        current.into_owned()
    }

    /// Like [`slugify`](Self::slugify) but for raw bytes; invalid UTF-8
    /// sequences are dropped first.
    pub fn slugify_bytes(&self, bytes: &[u8]) -> String {
        self.slugify(&to_utf8_string(bytes))
    }
}

impl Default for Slugifier {
    fn default() -> Self {
        Self::assemble(&SlugConfig::default(), Vec::new())
    }
}

impl fmt::Debug for Slugifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

/// One-shot slugify. Compiles `config` on every call; keep a [`Slugifier`]
/// around when slugifying many strings with the same options.
pub fn slugify(text: &str, config: &SlugConfig) -> Result<String, SlugError> {
    Ok(Slugifier::new(config)?.slugify(text))
}

/// One-shot slugify of possibly malformed UTF-8.
pub fn slugify_bytes(bytes: &[u8], config: &SlugConfig) -> Result<String, SlugError> {
    Ok(Slugifier::new(config)?.slugify_bytes(bytes))
}
