//! Hashing utilities for canonical text.
//!
//! Two families of hash are produced:
//!
//! ## Similarity key
//!
//! ```text
//! h = 0; for each UTF-16 code unit u: h = 31 * h + u   (wrapping i32)
//! ```
//!
//! [`string_hash`] is a coarse, collision-tolerant key that is cheap to store
//! and compare. The polynomial and the UTF-16 unit stream make the value
//! identical to the one historical clone-detection tooling reported for the
//! same canonical text, so existing key stores stay comparable.
//!
//! ## Identity digest
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_text_bytes)
//! ```
//!
//! [`hash_canonical_bytes`] includes the canonicalization version so that
//! digests produced under different classifier rules never collide.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{hash_canonical_bytes, string_hash};
//!
//! assert_eq!(string_hash(""), 0);
//! assert_eq!(string_hash("a"), 97);
//! assert_ne!(hash_canonical_bytes(1, b"$=$;"), hash_canonical_bytes(2, b"$=$;"));
//! ```

use sha2::{Digest, Sha256};

/// 32-bit polynomial string hash over UTF-16 code units.
///
/// ```rust
/// use canonical::string_hash;
///
/// assert_eq!(string_hash("hello"), 99162322);
/// // Wraps instead of overflowing.
/// let _ = string_hash(&"int$=$;".repeat(1000));
/// ```
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// Version-agnostic; for fingerprint identity use [`hash_canonical_bytes`].
///
/// ```rust
/// use canonical::hash_text;
///
/// let hash = hash_text("int$=$;");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash_text("int$=$;"));
/// ```
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Version-aware identity digest of canonical text.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
