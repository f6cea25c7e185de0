use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;
use crate::hash::{hash_canonical_bytes, string_hash};
use crate::token::CanonicalToken;

/// Similarity fingerprint of one normalized source.
///
/// ```rust
/// use canonical::{normalize_language, Fingerprint, TokenClassifier};
/// use lexical::LanguageId;
///
/// let classifier = TokenClassifier::default();
/// let a = normalize_language(LanguageId::C, "int total = 10;", "a.c", &classifier).unwrap();
/// let b = normalize_language(LanguageId::C, "int n=0; // reset", "b.c", &classifier).unwrap();
///
/// let fa = Fingerprint::from_tokens("a.c", &a, 1).unwrap();
/// let fb = Fingerprint::from_tokens("b.c", &b, 1).unwrap();
/// assert_eq!(fa.canonical_text, "int$=$;");
/// assert_eq!(fa.hash, fb.hash);
/// assert_eq!(fa.sha256_hex, fb.sha256_hex);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    pub source_name: String,
    pub canonical_text: String,
    /// Coarse similarity key, see [`string_hash`].
    pub hash: i32,
    /// Version-aware identity digest, see [`hash_canonical_bytes`].
    pub sha256_hex: String,
    pub canonical_version: u32,
    pub token_count: usize,
}

impl Fingerprint {
    pub fn from_tokens(
        source_name: impl Into<String>,
        tokens: &[CanonicalToken],
        canonical_version: u32,
    ) -> Result<Self, CanonicalError> {
        if canonical_version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }

        let canonical_text = canonical_text(tokens);
        let hash = string_hash(&canonical_text);
        let sha256_hex = hash_canonical_bytes(canonical_version, canonical_text.as_bytes());

        Ok(Self {
            source_name: source_name.into(),
            canonical_text,
            hash,
            sha256_hex,
            canonical_version,
            token_count: tokens.len(),
        })
    }
}

/// Concatenates the rendered symbol of every token, without separators.
pub fn canonical_text(tokens: &[CanonicalToken]) -> String {
    let mut out = String::with_capacity(tokens.len() * 2);
    for token in tokens {
        out.push_str(token.kind.as_str());
    }
    out
}

/// Concatenates the verbatim text of every token.
pub fn token_text(tokens: &[CanonicalToken]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// [`string_hash`] of the canonical text.
pub fn fingerprint_hash(tokens: &[CanonicalToken]) -> i32 {
    string_hash(&canonical_text(tokens))
}
