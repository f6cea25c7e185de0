//! Closed lexical category taxonomy.
//!
//! Lexers describe each span with one [`Category`]. The set mirrors the
//! dotted token names used by Pygments-family highlighters (`Keyword.Type`,
//! `Literal.String.Escape`, ...) so that output recorded from such a lexer can
//! be decoded with [`Category::from_tag`]. Tags outside this enumeration are
//! rejected with [`LexicalError::UnknownCategory`] at decode time; nothing
//! downstream ever sees an unrecognized category.
//!
//! ```rust
//! use lexical::{Category, CategoryFamily};
//!
//! let cat = Category::from_tag("Token.Literal.String.Escape").unwrap();
//! assert_eq!(cat, Category::LiteralStringEscape);
//! assert_eq!(cat.family(), CategoryFamily::Literal);
//! assert_eq!(cat.as_tag(), "Literal.String.Escape");
//! ```

use std::fmt;
use std::str::FromStr;

use phf::phf_map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LexicalError;

/// Top-level grouping of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFamily {
    Keyword,
    Name,
    Literal,
    Operator,
    Punctuation,
    Text,
    Comment,
    Error,
}

/// Lexical category of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    KeywordConstant,
    KeywordDeclaration,
    KeywordNamespace,
    KeywordPseudo,
    KeywordReserved,
    KeywordType,

    Name,
    NameAttribute,
    NameBuiltin,
    NameBuiltinPseudo,
    NameClass,
    NameConstant,
    NameDecorator,
    NameEntity,
    NameException,
    NameFunction,
    NameFunctionMagic,
    NameLabel,
    NameNamespace,
    NameOther,
    NameProperty,
    NameTag,
    NameVariable,
    NameVariableClass,
    NameVariableGlobal,
    NameVariableInstance,
    NameVariableMagic,

    Literal,
    LiteralDate,
    LiteralString,
    LiteralStringAffix,
    LiteralStringBacktick,
    LiteralStringChar,
    LiteralStringDelimiter,
    LiteralStringDoc,
    LiteralStringDouble,
    LiteralStringEscape,
    LiteralStringHeredoc,
    LiteralStringInterpol,
    LiteralStringOther,
    LiteralStringRegex,
    LiteralStringSingle,
    LiteralStringSymbol,
    LiteralNumber,
    LiteralNumberBin,
    LiteralNumberFloat,
    LiteralNumberHex,
    LiteralNumberInteger,
    LiteralNumberIntegerLong,
    LiteralNumberOct,

    Operator,
    OperatorWord,
    Punctuation,

    Text,
    TextWhitespace,

    Comment,
    CommentHashbang,
    CommentMultiline,
    CommentPreproc,
    CommentPreprocFile,
    CommentSingle,
    CommentSpecial,

    Error,
}

static TAGS: phf::Map<&'static str, Category> = phf_map! {
    "Keyword" => Category::Keyword,
    "Keyword.Constant" => Category::KeywordConstant,
    "Keyword.Declaration" => Category::KeywordDeclaration,
    "Keyword.Namespace" => Category::KeywordNamespace,
    "Keyword.Pseudo" => Category::KeywordPseudo,
    "Keyword.Reserved" => Category::KeywordReserved,
    "Keyword.Type" => Category::KeywordType,
    "Name" => Category::Name,
    "Name.Attribute" => Category::NameAttribute,
    "Name.Builtin" => Category::NameBuiltin,
    "Name.Builtin.Pseudo" => Category::NameBuiltinPseudo,
    "Name.Class" => Category::NameClass,
    "Name.Constant" => Category::NameConstant,
    "Name.Decorator" => Category::NameDecorator,
    "Name.Entity" => Category::NameEntity,
    "Name.Exception" => Category::NameException,
    "Name.Function" => Category::NameFunction,
    "Name.Function.Magic" => Category::NameFunctionMagic,
    "Name.Label" => Category::NameLabel,
    "Name.Namespace" => Category::NameNamespace,
    "Name.Other" => Category::NameOther,
    "Name.Property" => Category::NameProperty,
    "Name.Tag" => Category::NameTag,
    "Name.Variable" => Category::NameVariable,
    "Name.Variable.Class" => Category::NameVariableClass,
    "Name.Variable.Global" => Category::NameVariableGlobal,
    "Name.Variable.Instance" => Category::NameVariableInstance,
    "Name.Variable.Magic" => Category::NameVariableMagic,
    "Literal" => Category::Literal,
    "Literal.Date" => Category::LiteralDate,
    "Literal.String" => Category::LiteralString,
    "Literal.String.Affix" => Category::LiteralStringAffix,
    "Literal.String.Backtick" => Category::LiteralStringBacktick,
    "Literal.String.Char" => Category::LiteralStringChar,
    "Literal.String.Delimiter" => Category::LiteralStringDelimiter,
    "Literal.String.Doc" => Category::LiteralStringDoc,
    "Literal.String.Double" => Category::LiteralStringDouble,
    "Literal.String.Escape" => Category::LiteralStringEscape,
    "Literal.String.Heredoc" => Category::LiteralStringHeredoc,
    "Literal.String.Interpol" => Category::LiteralStringInterpol,
    "Literal.String.Other" => Category::LiteralStringOther,
    "Literal.String.Regex" => Category::LiteralStringRegex,
    "Literal.String.Single" => Category::LiteralStringSingle,
    "Literal.String.Symbol" => Category::LiteralStringSymbol,
    "Literal.Number" => Category::LiteralNumber,
    "Literal.Number.Bin" => Category::LiteralNumberBin,
    "Literal.Number.Float" => Category::LiteralNumberFloat,
    "Literal.Number.Hex" => Category::LiteralNumberHex,
    "Literal.Number.Integer" => Category::LiteralNumberInteger,
    "Literal.Number.Integer.Long" => Category::LiteralNumberIntegerLong,
    "Literal.Number.Oct" => Category::LiteralNumberOct,
    "Operator" => Category::Operator,
    "Operator.Word" => Category::OperatorWord,
    "Punctuation" => Category::Punctuation,
    "Text" => Category::Text,
    "Text.Whitespace" => Category::TextWhitespace,
    "Comment" => Category::Comment,
    "Comment.Hashbang" => Category::CommentHashbang,
    "Comment.Multiline" => Category::CommentMultiline,
    "Comment.Preproc" => Category::CommentPreproc,
    "Comment.PreprocFile" => Category::CommentPreprocFile,
    "Comment.Single" => Category::CommentSingle,
    "Comment.Special" => Category::CommentSpecial,
    "Error" => Category::Error,
};

impl Category {
    /// Decodes a dotted tag such as `Keyword.Type` or `Token.Name.Attribute`.
    ///
    /// The `String.*` and `Number.*` shorthands are accepted as aliases for
    /// `Literal.String.*` and `Literal.Number.*`. Any other unknown tag is an
    /// error.
    ///
    /// ```rust
    /// use lexical::{Category, LexicalError};
    ///
    /// assert_eq!(Category::from_tag("Number.Hex"), Ok(Category::LiteralNumberHex));
    /// assert_eq!(
    ///     Category::from_tag("Generic.Heading"),
    ///     Err(LexicalError::UnknownCategory("Generic.Heading".into()))
    /// );
    /// ```
    pub fn from_tag(tag: &str) -> Result<Self, LexicalError> {
        let trimmed = tag.trim();
        let bare = trimmed.strip_prefix("Token.").unwrap_or(trimmed);

        if let Some(cat) = TAGS.get(bare) {
            return Ok(*cat);
        }

        if bare.starts_with("String") || bare.starts_with("Number") {
            let aliased = format!("Literal.{bare}");
            if let Some(cat) = TAGS.get(aliased.as_str()) {
                return Ok(*cat);
            }
        }

        Err(LexicalError::UnknownCategory(tag.to_string()))
    }

    /// Canonical dotted tag for this category.
    pub fn as_tag(self) -> &'static str {
        match self {
            Category::Keyword => "Keyword",
            Category::KeywordConstant => "Keyword.Constant",
            Category::KeywordDeclaration => "Keyword.Declaration",
            Category::KeywordNamespace => "Keyword.Namespace",
            Category::KeywordPseudo => "Keyword.Pseudo",
            Category::KeywordReserved => "Keyword.Reserved",
            Category::KeywordType => "Keyword.Type",
            Category::Name => "Name",
            Category::NameAttribute => "Name.Attribute",
            Category::NameBuiltin => "Name.Builtin",
            Category::NameBuiltinPseudo => "Name.Builtin.Pseudo",
            Category::NameClass => "Name.Class",
            Category::NameConstant => "Name.Constant",
            Category::NameDecorator => "Name.Decorator",
            Category::NameEntity => "Name.Entity",
            Category::NameException => "Name.Exception",
            Category::NameFunction => "Name.Function",
            Category::NameFunctionMagic => "Name.Function.Magic",
            Category::NameLabel => "Name.Label",
            Category::NameNamespace => "Name.Namespace",
            Category::NameOther => "Name.Other",
            Category::NameProperty => "Name.Property",
            Category::NameTag => "Name.Tag",
            Category::NameVariable => "Name.Variable",
            Category::NameVariableClass => "Name.Variable.Class",
            Category::NameVariableGlobal => "Name.Variable.Global",
            Category::NameVariableInstance => "Name.Variable.Instance",
            Category::NameVariableMagic => "Name.Variable.Magic",
            Category::Literal => "Literal",
            Category::LiteralDate => "Literal.Date",
            Category::LiteralString => "Literal.String",
            Category::LiteralStringAffix => "Literal.String.Affix",
            Category::LiteralStringBacktick => "Literal.String.Backtick",
            Category::LiteralStringChar => "Literal.String.Char",
            Category::LiteralStringDelimiter => "Literal.String.Delimiter",
            Category::LiteralStringDoc => "Literal.String.Doc",
            Category::LiteralStringDouble => "Literal.String.Double",
            Category::LiteralStringEscape => "Literal.String.Escape",
            Category::LiteralStringHeredoc => "Literal.String.Heredoc",
            Category::LiteralStringInterpol => "Literal.String.Interpol",
            Category::LiteralStringOther => "Literal.String.Other",
            Category::LiteralStringRegex => "Literal.String.Regex",
            Category::LiteralStringSingle => "Literal.String.Single",
            Category::LiteralStringSymbol => "Literal.String.Symbol",
            Category::LiteralNumber => "Literal.Number",
            Category::LiteralNumberBin => "Literal.Number.Bin",
            Category::LiteralNumberFloat => "Literal.Number.Float",
            Category::LiteralNumberHex => "Literal.Number.Hex",
            Category::LiteralNumberInteger => "Literal.Number.Integer",
            Category::LiteralNumberIntegerLong => "Literal.Number.Integer.Long",
            Category::LiteralNumberOct => "Literal.Number.Oct",
            Category::Operator => "Operator",
            Category::OperatorWord => "Operator.Word",
            Category::Punctuation => "Punctuation",
            Category::Text => "Text",
            Category::TextWhitespace => "Text.Whitespace",
            Category::Comment => "Comment",
            Category::CommentHashbang => "Comment.Hashbang",
            Category::CommentMultiline => "Comment.Multiline",
            Category::CommentPreproc => "Comment.Preproc",
            Category::CommentPreprocFile => "Comment.PreprocFile",
            Category::CommentSingle => "Comment.Single",
            Category::CommentSpecial => "Comment.Special",
            Category::Error => "Error",
        }
    }

    /// Top-level family of this category.
    pub fn family(self) -> CategoryFamily {
        use Category::*;
        match self {
            Keyword | KeywordConstant | KeywordDeclaration | KeywordNamespace | KeywordPseudo
            | KeywordReserved | KeywordType => CategoryFamily::Keyword,
            Name | NameAttribute | NameBuiltin | NameBuiltinPseudo | NameClass | NameConstant
            | NameDecorator | NameEntity | NameException | NameFunction | NameFunctionMagic
            | NameLabel | NameNamespace | NameOther | NameProperty | NameTag | NameVariable
            | NameVariableClass | NameVariableGlobal | NameVariableInstance
            | NameVariableMagic => CategoryFamily::Name,
            Literal | LiteralDate | LiteralString | LiteralStringAffix | LiteralStringBacktick
            | LiteralStringChar | LiteralStringDelimiter | LiteralStringDoc
            | LiteralStringDouble | LiteralStringEscape
            | LiteralStringHeredoc | LiteralStringInterpol | LiteralStringOther
            | LiteralStringRegex | LiteralStringSingle | LiteralStringSymbol | LiteralNumber
            | LiteralNumberBin | LiteralNumberFloat | LiteralNumberHex | LiteralNumberInteger
            | LiteralNumberIntegerLong | LiteralNumberOct => CategoryFamily::Literal,
            Operator | OperatorWord => CategoryFamily::Operator,
            Punctuation => CategoryFamily::Punctuation,
            Text | TextWhitespace => CategoryFamily::Text,
            Comment | CommentHashbang | CommentMultiline | CommentPreproc | CommentPreprocFile
            | CommentSingle | CommentSpecial => CategoryFamily::Comment,
            Error => CategoryFamily::Error,
        }
    }

    /// True for whitespace and comment categories.
    pub fn is_trivia(self) -> bool {
        matches!(
            self.family(),
            CategoryFamily::Text | CategoryFamily::Comment
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Category {
    type Err = LexicalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_tag(s)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Category::from_tag(&tag).map_err(serde::de::Error::custom)
    }
}
