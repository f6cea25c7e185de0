//! Filename-based language resolution.
//!
//! [`LanguageTable`] maps lower-case file extensions (no leading dot) to a
//! [`LanguageId`]. The table is an ordinary value: callers build their own,
//! load one from configuration, or start from [`LanguageTable::default`],
//! which carries the C / C++ / Java set.
//!
//! ```rust
//! use lexical::{LanguageId, LanguageTable};
//!
//! let table = LanguageTable::default().with_extension("ino", LanguageId::Cpp);
//! assert_eq!(table.resolve("sketch.INO").unwrap(), LanguageId::Cpp);
//! assert_eq!(table.resolve("Main.java").unwrap(), LanguageId::Java);
//! ```

use std::fmt;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cfamily::CFamilyLexer;
use crate::error::LexicalError;

/// Languages with a built-in lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[serde(alias = "C")]
    C,
    #[serde(alias = "C++", alias = "c++")]
    Cpp,
    #[serde(alias = "Java")]
    Java,
}

impl LanguageId {
    /// Display name of the language.
    pub fn name(self) -> &'static str {
        match self {
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Java => "Java",
        }
    }

    /// The built-in lexer bound to this language.
    pub fn lexer(self) -> CFamilyLexer {
        CFamilyLexer::new(self)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extension to language lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FxHashMap<String, LanguageId>", into = "FxHashMap<String, LanguageId>")]
pub struct LanguageTable {
    extensions: FxHashMap<String, LanguageId>,
}

impl LanguageTable {
    /// An empty table. Every lookup fails with `UnsupportedLanguage`.
    pub fn empty() -> Self {
        Self {
            extensions: FxHashMap::default(),
        }
    }

    /// Adds or replaces one extension. A leading `.` is ignored and the
    /// extension is stored lower-case.
    pub fn with_extension(mut self, extension: &str, language: LanguageId) -> Self {
        self.insert(extension, language);
        self
    }

    pub fn insert(&mut self, extension: &str, language: LanguageId) {
        self.extensions
            .insert(normalize_extension(extension), language);
    }

    /// Looks up a bare extension.
    pub fn get(&self, extension: &str) -> Option<LanguageId> {
        self.extensions.get(&normalize_extension(extension)).copied()
    }

    /// Resolves the language of `filename` from the text after its last `.`.
    pub fn resolve(&self, filename: &str) -> Result<LanguageId, LexicalError> {
        let Some(dot) = filename.rfind('.') else {
            return Err(LexicalError::UnknownLanguage {
                filename: filename.to_string(),
            });
        };

        let extension = filename[dot + 1..].to_lowercase();
        match self.extensions.get(&extension) {
            Some(language) => Ok(*language),
            None => Err(LexicalError::UnsupportedLanguage { extension }),
        }
    }

    /// Extensions in the table, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        LanguageTable::empty()
            .with_extension("c", LanguageId::C)
            .with_extension("h", LanguageId::Cpp)
            .with_extension("cc", LanguageId::Cpp)
            .with_extension("cpp", LanguageId::Cpp)
            .with_extension("c++", LanguageId::Cpp)
            .with_extension("hpp", LanguageId::Cpp)
            .with_extension("java", LanguageId::Java)
    }
}

impl From<FxHashMap<String, LanguageId>> for LanguageTable {
    fn from(map: FxHashMap<String, LanguageId>) -> Self {
        let mut table = LanguageTable::empty();
        for (extension, language) in map {
            table.insert(&extension, language);
        }
        table
    }
}

impl From<LanguageTable> for FxHashMap<String, LanguageId> {
    fn from(table: LanguageTable) -> Self {
        table.extensions
    }
}

fn normalize_extension(extension: &str) -> String {
    extension
        .trim()
        .trim_start_matches('.')
        .to_lowercase()
}

/// Resolves `filename` against the default table.
///
/// ```rust
/// use lexical::{resolve_language, LanguageId, LexicalError};
///
/// assert_eq!(resolve_language("io.c").unwrap(), LanguageId::C);
/// assert!(matches!(
///     resolve_language("data.xyz"),
///     Err(LexicalError::UnsupportedLanguage { .. })
/// ));
/// ```
pub fn resolve_language(filename: &str) -> Result<LanguageId, LexicalError> {
    LanguageTable::default().resolve(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_extension_is_unknown_language() {
        assert_eq!(
            resolve_language("data"),
            Err(LexicalError::UnknownLanguage {
                filename: "data".into()
            })
        );
    }

    #[test]
    fn unlisted_extension_is_unsupported() {
        assert_eq!(
            resolve_language("data.xyz"),
            Err(LexicalError::UnsupportedLanguage {
                extension: "xyz".into()
            })
        );
        // Trailing dot yields an empty extension, which is never in the table.
        assert_eq!(
            resolve_language("data."),
            Err(LexicalError::UnsupportedLanguage {
                extension: String::new()
            })
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(resolve_language("MAIN.C"), Ok(LanguageId::C));
        assert_eq!(resolve_language("Widget.Hpp"), Ok(LanguageId::Cpp));
        assert_eq!(resolve_language("src/Tokenizer.JAVA"), Ok(LanguageId::Java));
    }

    #[test]
    fn only_last_dot_counts() {
        assert_eq!(resolve_language("archive.tar.c"), Ok(LanguageId::C));
        assert_eq!(resolve_language("lib.c++"), Ok(LanguageId::Cpp));
        assert!(matches!(
            resolve_language("main.c.orig"),
            Err(LexicalError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn default_table_contents() {
        let table = LanguageTable::default();
        assert_eq!(
            table.extensions(),
            vec!["c", "c++", "cc", "cpp", "h", "hpp", "java"]
        );
        assert_eq!(table.get(".H"), Some(LanguageId::Cpp));
    }

    #[test]
    fn custom_tables_replace_defaults() {
        let table = LanguageTable::empty().with_extension(".JAV", LanguageId::Java);
        assert_eq!(table.resolve("A.jav"), Ok(LanguageId::Java));
        assert!(matches!(
            table.resolve("a.c"),
            Err(LexicalError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn table_deserializes_from_map() {
        let table: LanguageTable =
            serde_json::from_str(r#"{".CPP": "C++", "java": "java", "inc": "c"}"#)
                .expect("deserialize");
        assert_eq!(table.get("cpp"), Some(LanguageId::Cpp));
        assert_eq!(table.get("java"), Some(LanguageId::Java));
        assert_eq!(table.get("inc"), Some(LanguageId::C));
    }

    #[test]
    fn lexer_binding_names_language() {
        use crate::span::LexicalSource;
        assert_eq!(LanguageId::Java.lexer().name(), "Java");
    }
}
