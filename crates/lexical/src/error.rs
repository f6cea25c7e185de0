//! Error types produced by the lexical crate.
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`UnknownLanguage`](LexicalError::UnknownLanguage) | [`resolve_language`](crate::resolve_language) | Filename has no extension |
//! | [`UnsupportedLanguage`](LexicalError::UnsupportedLanguage) | [`LanguageTable::resolve`](crate::LanguageTable::resolve) | Extension not in the table |
//! | [`UnknownCategory`](LexicalError::UnknownCategory) | [`Category::from_tag`](crate::Category::from_tag) | Lexer emitted a tag outside the taxonomy |
//!
//! None of these are transient, so callers should not retry.
use thiserror::Error;

/// Errors raised while resolving a language or decoding lexer output.
///
/// ```rust
/// use lexical::{resolve_language, LexicalError};
///
/// let err = resolve_language("Makefile").unwrap_err();
/// assert_eq!(
///     err,
///     LexicalError::UnknownLanguage { filename: "Makefile".into() }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LexicalError {
    /// The filename carries no `.` so no extension can be extracted.
    #[error("filename has no extension to identify its language: {filename}")]
    UnknownLanguage { filename: String },

    /// The extension is not present in the language table.
    #[error("file extension not supported: {extension}")]
    UnsupportedLanguage { extension: String },

    /// The lexer produced a category tag that the taxonomy does not know.
    ///
    /// This signals a version mismatch between the lexer and the classifier
    /// rule table and must never be swallowed.
    #[error("unknown lexical category: {0}")]
    UnknownCategory(String),
}

impl LexicalError {
    /// Returns true for errors caused by the caller's input rather than by
    /// lexer/classifier configuration.
    ///
    /// ```rust
    /// use lexical::LexicalError;
    ///
    /// assert!(LexicalError::UnsupportedLanguage { extension: "xyz".into() }.is_client_error());
    /// assert!(!LexicalError::UnknownCategory("Generic.Heading".into()).is_client_error());
    /// ```
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LexicalError::UnknownLanguage { .. } | LexicalError::UnsupportedLanguage { .. }
        )
    }
}
