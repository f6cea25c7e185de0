//! Category to canonical symbol mapping.
//!
//! | Category | Symbol |
//! |----------|--------|
//! | `Keyword.Type` | verbatim |
//! | `Keyword.Constant`, `Keyword.Pseudo` | literal marker |
//! | other keywords | verbatim |
//! | `Name.Attribute`, `Name.Entity`, `Name.Tag`, `Name.Decorator` | elided |
//! | other names | verbatim if allow-listed, else identifier marker |
//! | literals | literal marker |
//! | operators, punctuation | verbatim |
//! | text, comments, errors | elided |
//!
//! The taxonomy is closed, so the mapping is total. Unknown tags are rejected
//! earlier, when an external lexer's output is decoded into [`Category`].

use fxhash::FxHashSet;
use lexical::{Category, CategoryFamily};

use crate::config::ClassifierConfig;
use crate::error::CanonicalError;
use crate::token::Symbol;

/// Maps `(category, span text)` to a canonical symbol.
///
/// ```rust
/// use canonical::{Symbol, TokenClassifier};
/// use lexical::Category;
///
/// let classifier = TokenClassifier::default();
/// assert_eq!(classifier.classify(Category::Name, "count"), Some(Symbol::Identifier));
/// assert_eq!(
///     classifier.classify(Category::Name, "U32"),
///     Some(Symbol::Verbatim("U32".into()))
/// );
/// assert_eq!(classifier.classify(Category::CommentSingle, "// hi"), None);
/// ```
#[derive(Debug, Clone)]
pub struct TokenClassifier {
    builtin_types: FxHashSet<String>,
}

impl TokenClassifier {
    pub fn new(cfg: &ClassifierConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self::from_names(&cfg.builtin_type_names))
    }

    fn from_names(names: &[String]) -> Self {
        let builtin_types = names.iter().map(|name| name.trim().to_string()).collect();
        Self { builtin_types }
    }

    /// Returns the symbol for a span, or `None` if the span is elided.
    ///
    /// Allow-list matching compares the trimmed, lower-cased text against the
    /// entries as written, so an entry with upper-case letters never matches.
    /// Verbatim symbols carry `raw` unchanged.
    pub fn classify(&self, category: Category, raw: &str) -> Option<Symbol> {
        match category {
            Category::KeywordType => Some(Symbol::Verbatim(raw.to_string())),
            Category::KeywordConstant | Category::KeywordPseudo => Some(Symbol::Literal),
            Category::NameAttribute
            | Category::NameEntity
            | Category::NameTag
            | Category::NameDecorator => None,
            _ => match category.family() {
                CategoryFamily::Keyword => Some(Symbol::Verbatim(raw.to_string())),
                CategoryFamily::Name => {
                    if self.is_builtin_type(raw) {
                        Some(Symbol::Verbatim(raw.to_string()))
                    } else {
                        Some(Symbol::Identifier)
                    }
                }
                CategoryFamily::Literal => Some(Symbol::Literal),
                CategoryFamily::Operator | CategoryFamily::Punctuation => {
                    Some(Symbol::Verbatim(raw.to_string()))
                }
                CategoryFamily::Text | CategoryFamily::Comment | CategoryFamily::Error => None,
            },
        }
    }

    /// True if `raw` names an allow-listed builtin type.
    pub fn is_builtin_type(&self, raw: &str) -> bool {
        self.builtin_types.contains(&raw.trim().to_lowercase())
    }
}

impl Default for TokenClassifier {
    fn default() -> Self {
        Self::from_names(&ClassifierConfig::default().builtin_type_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verbatim(s: &str) -> Option<Symbol> {
        Some(Symbol::Verbatim(s.to_string()))
    }

    #[test]
    fn keyword_rules() {
        let c = TokenClassifier::default();
        assert_eq!(c.classify(Category::KeywordType, "int"), verbatim("int"));
        assert_eq!(c.classify(Category::KeywordConstant, "true"), Some(Symbol::Literal));
        assert_eq!(c.classify(Category::KeywordPseudo, "this"), Some(Symbol::Literal));
        assert_eq!(c.classify(Category::Keyword, "while"), verbatim("while"));
        assert_eq!(c.classify(Category::KeywordDeclaration, "static"), verbatim("static"));
        assert_eq!(c.classify(Category::KeywordNamespace, "import"), verbatim("import"));
        assert_eq!(c.classify(Category::KeywordReserved, "goto"), verbatim("goto"));
    }

    #[test]
    fn markup_names_are_elided() {
        let c = TokenClassifier::default();
        for category in [
            Category::NameAttribute,
            Category::NameEntity,
            Category::NameTag,
            Category::NameDecorator,
        ] {
            assert_eq!(c.classify(category, "@Override"), None, "{category}");
        }
    }

    #[test]
    fn names_fold_unless_allow_listed() {
        let c = TokenClassifier::default();
        assert_eq!(c.classify(Category::Name, "total"), Some(Symbol::Identifier));
        assert_eq!(c.classify(Category::NameFunction, "main"), Some(Symbol::Identifier));
        assert_eq!(c.classify(Category::NameBuiltin, "printf"), Some(Symbol::Identifier));
        assert_eq!(c.classify(Category::NameClass, "u8"), verbatim("u8"));
        // The text is trimmed and lower-cased before lookup, emission keeps raw text.
        assert_eq!(c.classify(Category::Name, " U8 "), verbatim(" U8 "));
    }

    #[test]
    fn mixed_case_entries_never_match() {
        let c = TokenClassifier::default();
        for raw in ["CString", "cstring", "UINT32", "uint32", "Uint32"] {
            assert_eq!(c.classify(Category::Name, raw), Some(Symbol::Identifier), "{raw}");
        }
        assert!(!c.is_builtin_type("CString"));
    }

    #[test]
    fn default_matches_default_config() {
        let built = TokenClassifier::new(&ClassifierConfig::default()).expect("valid config");
        let default = TokenClassifier::default();
        for raw in ["u8", " u32 ", "U32", "CString", "UINT32", "size_t", "x"] {
            assert_eq!(
                built.classify(Category::Name, raw),
                default.classify(Category::Name, raw),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn custom_allow_list() {
        let c = TokenClassifier::new(&ClassifierConfig {
            builtin_type_names: vec![" string ".into(), "Vector".into()],
        })
        .expect("valid config");
        assert_eq!(c.classify(Category::Name, "String"), verbatim("String"));
        assert_eq!(c.classify(Category::Name, "Vector"), Some(Symbol::Identifier));
        assert_eq!(c.classify(Category::Name, "u8"), Some(Symbol::Identifier));

        let empty = TokenClassifier::new(&ClassifierConfig::without_builtin_types())
            .expect("valid config");
        assert_eq!(empty.classify(Category::Name, "u32"), Some(Symbol::Identifier));
    }

    #[test]
    fn invalid_allow_list_rejected() {
        let err = TokenClassifier::new(&ClassifierConfig {
            builtin_type_names: vec![String::new()],
        })
        .unwrap_err();
        assert!(matches!(err, CanonicalError::InvalidConfig(_)));
    }

    #[test]
    fn literals_operators_and_trivia() {
        let c = TokenClassifier::default();
        assert_eq!(c.classify(Category::LiteralNumberHex, "0xFF"), Some(Symbol::Literal));
        assert_eq!(c.classify(Category::LiteralStringEscape, "\\n"), Some(Symbol::Literal));
        assert_eq!(c.classify(Category::Literal, "x"), Some(Symbol::Literal));
        assert_eq!(c.classify(Category::Operator, "+="), verbatim("+="));
        assert_eq!(c.classify(Category::OperatorWord, "and"), verbatim("and"));
        assert_eq!(c.classify(Category::Punctuation, ";"), verbatim(";"));
        assert_eq!(c.classify(Category::Text, "\n  "), None);
        assert_eq!(c.classify(Category::TextWhitespace, " "), None);
        assert_eq!(c.classify(Category::CommentPreproc, "#include <x>"), None);
        assert_eq!(c.classify(Category::Error, "`"), None);
    }
}
