//! Output type of [`canonicalize`](crate::canonicalize).
//!
//! # Structure
//!
//! ```text
//! CanonicalizedSource
//! ├── source_name: String              # Filename or caller-chosen label
//! ├── tokens: Vec<CanonicalToken>      # Normalized tokens with positions
//! ├── fingerprint: Fingerprint         # Canonical text, hash, digest
//! └── config: CanonicalizeConfig       # Config snapshot
//! ```
//!
//! # Determinism
//!
//! For a fixed lexer, config and input text every field is reproducible on
//! any machine.
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//! use lexical::LanguageId;
//!
//! let cfg = CanonicalizeConfig::default();
//! let lexer = LanguageId::Java.lexer();
//! let a = canonicalize(&lexer, "int a = 1;", "A.java", &cfg).unwrap();
//! let b = canonicalize(&lexer, "int b = 2;", "B.java", &cfg).unwrap();
//!
//! assert!(a.is_clone_of(&b));
//! assert_eq!(a.tokens[1].text, "a");
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::fingerprint::Fingerprint;
use crate::token::CanonicalToken;

/// Tokens and fingerprint of one source, with the config that produced them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizedSource {
    pub source_name: String,
    pub tokens: Vec<CanonicalToken>,
    pub fingerprint: Fingerprint,
    pub config: CanonicalizeConfig,
}

impl CanonicalizedSource {
    /// True when both sources were produced under the same version and have
    /// identical canonical text.
    pub fn is_clone_of(&self, other: &CanonicalizedSource) -> bool {
        self.fingerprint.canonical_version == other.fingerprint.canonical_version
            && self.fingerprint.sha256_hex == other.fingerprint.sha256_hex
    }
}
