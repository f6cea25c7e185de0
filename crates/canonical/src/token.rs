use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendered form of [`Symbol::Identifier`].
pub const IDENTIFIER_MARKER: &str = "$";

/// Rendered form of [`Symbol::Literal`].
///
/// Identical to [`IDENTIFIER_MARKER`]; canonical text therefore does not
/// tell identifiers and literals apart, while the token stream does.
pub const LITERAL_MARKER: &str = "$";

/// Canonical symbol of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Any identifier not on the builtin type allow-list.
    Identifier,
    /// Any literal or literal-like keyword.
    Literal,
    /// Structural text kept as-is: keywords, operators, punctuation,
    /// allow-listed type names.
    Verbatim(String),
}

impl Symbol {
    /// The string this symbol contributes to canonical text.
    pub fn as_str(&self) -> &str {
        match self {
            Symbol::Identifier => IDENTIFIER_MARKER,
            Symbol::Literal => LITERAL_MARKER,
            Symbol::Verbatim(text) => text,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Symbol::Literal)
    }

    pub fn is_marker(&self) -> bool {
        !matches!(self, Symbol::Verbatim(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized token with its source position.
///
/// `line` and `column` are 1-based; `column` counts Unicode scalar values.
/// `start_offset` is a UTF-8 byte offset into the text that was normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalToken {
    pub kind: Symbol,
    /// Verbatim source text. Merged literal runs hold the concatenation of
    /// every merged span.
    pub text: String,
    pub start_offset: usize,
    pub line: usize,
    pub column: usize,
    /// Statement-like grouping, unset until
    /// [`assign_logical_lines`](crate::assign_logical_lines) runs.
    pub logical_line: Option<usize>,
    pub source_name: String,
}

impl CanonicalToken {
    pub fn new(
        kind: Symbol,
        text: impl Into<String>,
        start_offset: usize,
        line: usize,
        column: usize,
        source_name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            start_offset,
            line,
            column,
            logical_line: None,
            source_name: source_name.into(),
        }
    }
}

impl AsRef<str> for CanonicalToken {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

impl fmt::Display for CanonicalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t:({}:{}) {}@{}",
            self.kind, self.text, self.line, self.column, self.source_name, self.start_offset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_render_identically() {
        assert_eq!(Symbol::Identifier.as_str(), Symbol::Literal.as_str());
        assert_ne!(Symbol::Identifier, Symbol::Literal);
        assert_eq!(Symbol::Verbatim("while".into()).to_string(), "while");
    }

    #[test]
    fn new_token_has_no_logical_line() {
        let token = CanonicalToken::new(Symbol::Literal, "5", 8, 1, 9, "a.c");
        assert_eq!(token.logical_line, None);
        assert_eq!(token.as_ref(), "5");
        assert_eq!(token.to_string(), "$\t5\t:(1:9) a.c@8");
    }

    #[test]
    fn symbol_serde_shape() {
        let json = serde_json::to_string(&Symbol::Verbatim(";".into())).expect("serialize");
        assert_eq!(json, r#"{"verbatim":";"}"#);
        let json = serde_json::to_string(&Symbol::Identifier).expect("serialize");
        assert_eq!(json, r#""identifier""#);
    }
}
