//! Lexical spans and the lexer seam.
//!
//! A [`LexicalSource`] turns source text into an ordered list of
//! [`LexicalSpan`]s. Spans never copy text; callers slice it from the source
//! with [`LexicalSpan::text`]. Spans must be produced in non-decreasing
//! offset order. Gaps and overlaps are tolerated by consumers but spans must
//! not go backward.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::LexicalError;

/// One contiguous slice of source text tagged with a lexical category.
///
/// Offsets are UTF-8 byte offsets into the scanned text; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl LexicalSpan {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Slices this span's text out of `source`.
    ///
    /// Returns `None` if the span does not describe a valid range of `source`.
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        if self.end < self.start {
            return None;
        }
        source.get(self.start..self.end)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A lexer for one language.
///
/// Implementations must be deterministic: the same text always yields the
/// same spans. They are shared across threads, so scanning state lives in
/// the call, not in `self`.
pub trait LexicalSource: Send + Sync {
    /// Short human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Scans `text` into spans.
    fn scan(&self, text: &str) -> Result<Vec<LexicalSpan>, LexicalError>;
}

impl<T: LexicalSource + ?Sized> LexicalSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scan(&self, text: &str) -> Result<Vec<LexicalSpan>, LexicalError> {
        (**self).scan(text)
    }
}

impl<T: LexicalSource + ?Sized> LexicalSource for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scan(&self, text: &str) -> Result<Vec<LexicalSpan>, LexicalError> {
        (**self).scan(text)
    }
}

/// Span output recorded from an external lexer, with category tags kept as
/// strings.
///
/// Tags are decoded on [`scan`](LexicalSource::scan), so a lexer that emits a
/// tag outside the taxonomy fails the scan with
/// [`LexicalError::UnknownCategory`]. The text passed to `scan` is ignored;
/// the recorded offsets are replayed as-is.
///
/// ```rust
/// use lexical::{Category, LexicalSource, TaggedSpans};
///
/// let recorded = TaggedSpans::new("pygments")
///     .push(0, 3, "Keyword.Type")
///     .push(3, 4, "Text")
///     .push(4, 5, "Name");
/// let spans = recorded.scan("int x").unwrap();
/// assert_eq!(spans[0].category, Category::KeywordType);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpans {
    name: String,
    spans: Vec<TaggedSpan>,
}

/// A span whose category is still an undecoded tag string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub start: usize,
    pub end: usize,
    pub tag: String,
}

impl TaggedSpans {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spans: Vec::new(),
        }
    }

    /// Appends a recorded span.
    pub fn push(mut self, start: usize, end: usize, tag: impl Into<String>) -> Self {
        self.spans.push(TaggedSpan {
            start,
            end,
            tag: tag.into(),
        });
        self
    }

    /// Builds a recording by laying `(text, tag)` pieces end to end.
    ///
    /// Returns the concatenated source alongside the recording.
    ///
    /// ```rust
    /// use lexical::TaggedSpans;
    ///
    /// let (source, recorded) =
    ///     TaggedSpans::from_pieces("test", &[("a", "Name"), (" ", "Text"), ("+", "Operator")]);
    /// assert_eq!(source, "a +");
    /// assert_eq!(recorded.spans().len(), 3);
    /// ```
    pub fn from_pieces(name: impl Into<String>, pieces: &[(&str, &str)]) -> (String, Self) {
        let mut source = String::new();
        let mut recorded = TaggedSpans::new(name);
        for (text, tag) in pieces {
            let start = source.len();
            source.push_str(text);
            recorded = recorded.push(start, source.len(), *tag);
        }
        (source, recorded)
    }

    pub fn spans(&self) -> &[TaggedSpan] {
        &self.spans
    }
}

impl LexicalSource for TaggedSpans {
    fn name(&self) -> &str {
        &self.name
    }

    fn scan(&self, _text: &str) -> Result<Vec<LexicalSpan>, LexicalError> {
        self.spans
            .iter()
            .map(|span| {
                Category::from_tag(&span.tag)
                    .map(|category| LexicalSpan::new(span.start, span.end, category))
            })
            .collect()
    }
}
