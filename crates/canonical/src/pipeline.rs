use lexical::{LanguageId, LexicalSource, LexicalSpan};

use crate::classify::TokenClassifier;
use crate::config::CanonicalizeConfig;
use crate::document::CanonicalizedSource;
use crate::error::CanonicalError;
use crate::fingerprint::Fingerprint;
use crate::token::{CanonicalToken, Symbol};

/// Main entry point. Normalizes `text` with `source` and fingerprints the
/// resulting tokens under `cfg`.
pub fn canonicalize<L: LexicalSource + ?Sized>(
    source: &L,
    text: &str,
    source_name: &str,
    cfg: &CanonicalizeConfig,
) -> Result<CanonicalizedSource, CanonicalError> {
    // Validates the whole config, version included, before any scanning.
    cfg.validate()?;
    let classifier = TokenClassifier::new(&cfg.classifier)?;

    let tokens = normalize(source, text, source_name, &classifier)?;
    let fingerprint = Fingerprint::from_tokens(source_name, &tokens, cfg.version)?;

    Ok(CanonicalizedSource {
        source_name: source_name.to_string(),
        tokens,
        fingerprint,
        config: cfg.clone(),
    })
}

/// Normalizes `text` with the built-in lexer for `language`.
pub fn normalize_language(
    language: LanguageId,
    text: &str,
    source_name: &str,
    classifier: &TokenClassifier,
) -> Result<Vec<CanonicalToken>, CanonicalError> {
    normalize(&language.lexer(), text, source_name, classifier)
}

/// Drives `source` over `text` and returns the canonical token stream.
///
/// Consecutive literal tokens (with nothing but elided spans between them)
/// merge into one token whose text is the concatenation of the merged spans
/// and whose position is that of the first. No other pair of kinds merges.
///
/// ```rust
/// use canonical::{canonical_text, normalize, TokenClassifier};
/// use lexical::TaggedSpans;
///
/// let (text, spans) = TaggedSpans::from_pieces(
///     "a.c",
///     &[("s", "Name"), (" ", "Text"), ("=", "Operator"), (" ", "Text"),
///       ("\"a", "String"), ("\\n", "String.Escape"), ("\"", "String"), (";", "Punctuation")],
/// );
/// let tokens = normalize(&spans, &text, "a.c", &TokenClassifier::default()).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2].text, "\"a\\n\"");
/// assert_eq!(canonical_text(&tokens), "$=$;");
/// ```
pub fn normalize<L: LexicalSource + ?Sized>(
    source: &L,
    text: &str,
    source_name: &str,
    classifier: &TokenClassifier,
) -> Result<Vec<CanonicalToken>, CanonicalError> {
    let spans = source.scan(text)?;

    let mut tokens: Vec<CanonicalToken> = Vec::with_capacity(spans.len() / 2 + 1);
    let mut pending = Pending::Empty;
    let mut cursor = Cursor::start();
    let mut previous_start = 0;

    for span in &spans {
        let raw = slice_span(text, span, previous_start)?;
        previous_start = span.start;

        if let Some(kind) = classifier.classify(span.category, raw) {
            pending = pending.accept(kind, raw, span.start, &cursor, source_name, &mut tokens);
        }
        // Elided spans still move the cursor.
        cursor.advance(raw);
    }

    pending.flush(&mut tokens);
    Ok(tokens)
}

/// Merge state between spans.
enum Pending {
    Empty,
    Holding(CanonicalToken),
}

impl Pending {
    fn accept(
        self,
        kind: Symbol,
        raw: &str,
        start_offset: usize,
        cursor: &Cursor,
        source_name: &str,
        out: &mut Vec<CanonicalToken>,
    ) -> Pending {
        match self {
            Pending::Holding(mut held) if held.kind.is_literal() && kind.is_literal() => {
                held.text.push_str(raw);
                Pending::Holding(held)
            }
            Pending::Holding(held) => {
                out.push(held);
                Pending::Holding(cursor.token(kind, raw, start_offset, source_name))
            }
            Pending::Empty => Pending::Holding(cursor.token(kind, raw, start_offset, source_name)),
        }
    }

    fn flush(self, out: &mut Vec<CanonicalToken>) {
        if let Pending::Holding(held) = self {
            out.push(held);
        }
    }
}

/// Line/column of the next span's first character.
struct Cursor {
    line: usize,
    column: usize,
}

impl Cursor {
    fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    fn token(
        &self,
        kind: Symbol,
        raw: &str,
        start_offset: usize,
        source_name: &str,
    ) -> CanonicalToken {
        CanonicalToken::new(kind, raw, start_offset, self.line, self.column, source_name)
    }

    fn advance(&mut self, raw: &str) {
        match raw.rfind('\n') {
            Some(last) => {
                self.line += raw.bytes().filter(|b| *b == b'\n').count();
                self.column = 1 + raw[last + 1..].chars().count();
            }
            None => self.column += raw.chars().count(),
        }
    }
}

fn slice_span<'a>(
    text: &'a str,
    span: &LexicalSpan,
    previous_start: usize,
) -> Result<&'a str, CanonicalError> {
    let invalid = |reason| CanonicalError::InvalidSpan {
        start: span.start,
        end: span.end,
        reason,
    };

    if span.start < previous_start {
        return Err(invalid("span starts before the previous span"));
    }
    if span.end < span.start {
        return Err(invalid("span ends before it starts"));
    }
    if span.end > text.len() {
        return Err(invalid("span runs past the end of the text"));
    }
    span.text(text)
        .ok_or_else(|| invalid("span offsets split a UTF-8 character"))
}
