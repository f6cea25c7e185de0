use lexical::LexicalError;
use thiserror::Error;

/// Errors that can occur during normalization and fingerprinting.
///
/// Every variant aborts the whole call; no partial token stream is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CanonicalError {
    /// The lexer emitted a category tag outside the known taxonomy.
    #[error("unknown lexical category: {0}")]
    UnknownCategory(String),

    /// A span went backward, ran past the text, or split a UTF-8 character.
    #[error("invalid lexical span {start}..{end}: {reason}")]
    InvalidSpan {
        start: usize,
        end: usize,
        reason: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Any other failure reported by the lexical layer.
    #[error("lexical failure: {0}")]
    Lexical(LexicalError),
}

impl From<LexicalError> for CanonicalError {
    fn from(err: LexicalError) -> Self {
        match err {
            LexicalError::UnknownCategory(tag) => CanonicalError::UnknownCategory(tag),
            other => CanonicalError::Lexical(other),
        }
    }
}
