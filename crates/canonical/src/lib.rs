//! Code canonicalization layer.
//!
//! Turns lexer spans into a canonical token stream and fingerprints it, so
//! that two sources differing only in identifier names, literal values,
//! whitespace or comments produce the same fingerprint.
//!
//! ## What we do
//!
//! - Classify each span into a [`Symbol`]: verbatim structure, identifier
//!   marker, literal marker, or elided
//! - Merge runs of adjacent literals into one token
//! - Track line, column and byte offset of every emitted token
//! - Build a [`Fingerprint`]: canonical text, a 32-bit similarity key and a
//!   versioned SHA-256 digest
//! - Optionally group tokens into logical lines
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Give us the same text,
//! lexer and config, you get the same result on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Tokens are in source order and no two adjacent tokens are both literals
//! - Whitespace, comments and markup names never produce tokens
//! - Digest = SHA-256(version || 0x00 || canonical_text)
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//! use lexical::LanguageId;
//!
//! let cfg = CanonicalizeConfig::default();
//! let lexer = LanguageId::C.lexer();
//! let out = canonicalize(&lexer, "while (i < 10) { i++; }", "loop.c", &cfg).unwrap();
//! assert_eq!(out.fingerprint.canonical_text, "while($<$){$++;}");
//! ```

mod classify;
mod config;
mod document;
mod error;
mod fingerprint;
mod hash;
mod logical;
mod pipeline;
mod token;

pub use crate::classify::TokenClassifier;
pub use crate::config::{CanonicalizeConfig, ClassifierConfig, LogicalLineConfig};
pub use crate::document::CanonicalizedSource;
pub use crate::error::CanonicalError;
pub use crate::fingerprint::{canonical_text, fingerprint_hash, token_text, Fingerprint};
pub use crate::hash::{hash_canonical_bytes, hash_text, string_hash};
pub use crate::logical::assign_logical_lines;
pub use crate::pipeline::{canonicalize, normalize, normalize_language};
pub use crate::token::{CanonicalToken, Symbol, IDENTIFIER_MARKER, LITERAL_MARKER};
