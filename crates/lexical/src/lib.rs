//! Lexical layer for code fingerprinting.
//!
//! Everything upstream of token normalization lives here:
//!
//! - [`Category`]: the closed taxonomy of span categories, decodable from the
//!   dotted tag names used by regex highlighters
//! - [`LexicalSpan`] and the [`LexicalSource`] trait, the seam where any lexer
//!   plugs in
//! - [`TaggedSpans`]: replays span output recorded from an external lexer
//! - [`CFamilyLexer`]: built-in lexer for C, C++ and Java
//! - [`LanguageTable`] / [`resolve_language`]: filename extension lookup
//! - [`prepare_source`]: newline/trim tidying applied before lexing
//!
//! Nothing here keeps global mutable state; tables are plain values.
//!
//! ```rust
//! use lexical::{resolve_language, LexicalSource};
//!
//! let language = resolve_language("main.c").unwrap();
//! let spans = language.lexer().scan("return 0;").unwrap();
//! assert_eq!(spans.len(), 4);
//! ```

mod category;
mod cfamily;
mod error;
mod keywords;
mod language;
mod prepare;
mod span;

pub use crate::category::{Category, CategoryFamily};
pub use crate::cfamily::CFamilyLexer;
pub use crate::error::LexicalError;
pub use crate::language::{resolve_language, LanguageId, LanguageTable};
pub use crate::prepare::{prepare_source, SourcePolicy};
pub use crate::span::{LexicalSource, LexicalSpan, TaggedSpan, TaggedSpans};
