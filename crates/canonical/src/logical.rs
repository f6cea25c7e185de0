use fxhash::FxHashSet;

use crate::config::LogicalLineConfig;
use crate::token::{CanonicalToken, Symbol};

/// Groups tokens into statement-like logical lines.
///
/// Numbering starts at 1. A verbatim token whose text is one of the break
/// symbols ends the current logical line; the next token starts a new one.
/// Markers never break a line, even if their source text matches.
///
/// ```rust
/// use canonical::{assign_logical_lines, normalize_language, LogicalLineConfig, TokenClassifier};
/// use lexical::LanguageId;
///
/// let tokens = normalize_language(
///     LanguageId::C,
///     "int a; if (a) { a++; }",
///     "a.c",
///     &TokenClassifier::default(),
/// )
/// .unwrap();
/// let lines: Vec<_> = assign_logical_lines(tokens, &LogicalLineConfig::default())
///     .into_iter()
///     .map(|t| t.logical_line.unwrap())
///     .collect();
/// assert_eq!(lines, vec![1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4]);
/// ```
pub fn assign_logical_lines(
    mut tokens: Vec<CanonicalToken>,
    cfg: &LogicalLineConfig,
) -> Vec<CanonicalToken> {
    let breaks: FxHashSet<&str> = cfg.break_symbols.iter().map(String::as_str).collect();

    let mut current = 1;
    for token in &mut tokens {
        token.logical_line = Some(current);
        if let Symbol::Verbatim(text) = &token.kind {
            if breaks.contains(text.as_str()) {
                current += 1;
            }
        }
    }
    tokens
}
