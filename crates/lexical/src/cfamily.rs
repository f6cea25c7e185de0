//! Built-in lexer for C, C++ and Java.
//!
//! Single linear pass producing gapless spans: every byte of the input lands
//! in exactly one span. String literals are split at escape sequences
//! (`Literal.String` / `Literal.String.Escape`), the way regex highlighters
//! report them. Preprocessor lines are reported as `Comment.Preproc`.

use crate::category::Category;
use crate::error::LexicalError;
use crate::keywords::{CPP_WORDS, C_WORDS, JAVA_WORDS};
use crate::language::LanguageId;
use crate::span::{LexicalSource, LexicalSpan};

const PUNCTUATION: &[&str] = &["...", "(", ")", "[", "]", "{", "}", ",", ";", "."];

const OPERATORS: &[&str] = &[
    ">>>=", "<<=", ">>=", ">>>", "->*", "<=>", "::", "->", "++", "--", "<<", ">>", "<=", ">=",
    "==", "!=", "&&", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/",
    "%", "=", "<", ">", "!", "&", "|", "^", "~", "?", ":",
];

/// Lexer for one C-family language.
///
/// ```rust
/// use lexical::{Category, CFamilyLexer, LanguageId, LexicalSource};
///
/// let spans = CFamilyLexer::new(LanguageId::C).scan("int x = 5;").unwrap();
/// let cats: Vec<Category> = spans.iter().map(|s| s.category).collect();
/// assert_eq!(
///     cats,
///     vec![
///         Category::KeywordType,
///         Category::Text,
///         Category::Name,
///         Category::Text,
///         Category::Operator,
///         Category::Text,
///         Category::LiteralNumberInteger,
///         Category::Punctuation,
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CFamilyLexer {
    language: LanguageId,
}

impl CFamilyLexer {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }
}

impl LexicalSource for CFamilyLexer {
    fn name(&self) -> &str {
        self.language.name()
    }

    fn scan(&self, text: &str) -> Result<Vec<LexicalSpan>, LexicalError> {
        Ok(Scanner::new(text, self.language).run())
    }
}

struct Scanner<'a> {
    src: &'a str,
    i: usize,
    language: LanguageId,
    words: &'static phf::Map<&'static str, Category>,
    spans: Vec<LexicalSpan>,
    at_line_start: bool,
    after_dot: bool,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, language: LanguageId) -> Self {
        let words = match language {
            LanguageId::C => &C_WORDS,
            LanguageId::Cpp => &CPP_WORDS,
            LanguageId::Java => &JAVA_WORDS,
        };
        Self {
            src,
            i: 0,
            language,
            words,
            spans: Vec::with_capacity(src.len().saturating_div(3).max(16)),
            at_line_start: true,
            after_dot: false,
        }
    }

    fn run(mut self) -> Vec<LexicalSpan> {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.whitespace();
                continue;
            }

            let start = self.i;
            if self.rest().starts_with("//") {
                self.line_comment();
            } else if self.rest().starts_with("/*") {
                self.block_comment();
            } else if c == '#' && self.at_line_start && self.language != LanguageId::Java {
                self.preprocessor();
            } else if c == '\\' && matches!(self.peek_nth(1), Some('\n' | '\r')) {
                self.i += 1;
                self.push(start, Category::Text);
            } else if c == '"' {
                self.string(start);
            } else if c == '\'' {
                self.char_literal(start);
            } else if c.is_ascii_digit()
                || (c == '.' && self.peek_nth(1).is_some_and(|n| n.is_ascii_digit()))
            {
                self.number();
            } else if c == '@'
                && self.language == LanguageId::Java
                && self.peek_nth(1).is_some_and(is_ident_start)
            {
                self.annotation();
            } else if is_ident_start(c) {
                self.word();
            } else if let Some(len) = longest_match(self.rest(), PUNCTUATION) {
                self.i += len;
                self.push(start, Category::Punctuation);
            } else if let Some(len) = longest_match(self.rest(), OPERATORS) {
                self.i += len;
                self.push(start, Category::Operator);
            } else {
                self.i += c.len_utf8();
                self.push(start, Category::Error);
            }
            self.at_line_start = false;
        }
        self.spans
    }

    fn rest(&self) -> &'a str {
        &self.src[self.i..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
        }
    }

    fn push(&mut self, start: usize, category: Category) {
        if self.i <= start {
            return;
        }
        if !category.is_trivia() {
            self.after_dot = &self.src[start..self.i] == ".";
        }
        self.spans.push(LexicalSpan::new(start, self.i, category));
    }

    fn whitespace(&mut self) {
        let start = self.i;
        self.eat_while(char::is_whitespace);
        if self.src[start..self.i].contains('\n') {
            self.at_line_start = true;
        }
        self.push(start, Category::Text);
    }

    fn line_comment(&mut self) {
        let start = self.i;
        self.eat_while(|c| c != '\n');
        self.push(start, Category::CommentSingle);
    }

    fn block_comment(&mut self) {
        let start = self.i;
        self.i = match self.src[start + 2..].find("*/") {
            Some(pos) => start + 2 + pos + 2,
            None => self.src.len(),
        };
        self.push(start, Category::CommentMultiline);
    }

    /// Consumes a directive up to an unescaped newline.
    fn preprocessor(&mut self) {
        let start = self.i;
        loop {
            self.eat_while(|c| c != '\n');
            let line = self.src[start..self.i].trim_end_matches('\r');
            if line.ends_with('\\') && self.peek() == Some('\n') {
                self.i += 1;
                continue;
            }
            break;
        }
        self.push(start, Category::CommentPreproc);
    }

    /// Scans a string literal whose opening quote is at `self.i`; `start`
    /// may point earlier when an encoding prefix (`L`, `u8`, ...) was read.
    fn string(&mut self, start: usize) {
        self.i += 1;
        let mut segment = start;
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '"' => {
                    self.i += 1;
                    break;
                }
                '\\' => {
                    self.push(segment, Category::LiteralString);
                    let escape = self.i;
                    self.i += 1;
                    if let Some(next) = self.peek() {
                        self.i += next.len_utf8();
                        if next == 'x' {
                            self.eat_while(|h| h.is_ascii_hexdigit());
                        } else if next.is_digit(8) {
                            let mut taken = 1;
                            while taken < 3 && self.peek().is_some_and(|d| d.is_digit(8)) {
                                self.i += 1;
                                taken += 1;
                            }
                        }
                    }
                    self.push(escape, Category::LiteralStringEscape);
                    segment = self.i;
                }
                _ => self.i += c.len_utf8(),
            }
        }
        self.push(segment, Category::LiteralString);
    }

    fn char_literal(&mut self, start: usize) {
        self.i += 1;
        while let Some(c) = self.peek() {
            match c {
                '\n' => break,
                '\'' => {
                    self.i += 1;
                    break;
                }
                '\\' => {
                    self.i += 1;
                    self.bump();
                }
                _ => self.i += c.len_utf8(),
            }
        }
        self.push(start, Category::LiteralStringChar);
    }

    fn number(&mut self) {
        let start = self.i;
        let cpp = self.language == LanguageId::Cpp;
        let separator = move |c: char| c == '_' || (cpp && c == '\'');
        let rest = self.rest();

        let mut category = if rest.starts_with("0x") || rest.starts_with("0X") {
            self.i += 2;
            self.eat_while(|c| c.is_ascii_hexdigit() || separator(c));
            Category::LiteralNumberHex
        } else if (rest.starts_with("0b") || rest.starts_with("0B"))
            && self.peek_nth(2).is_some_and(|c| c == '0' || c == '1')
        {
            self.i += 2;
            self.eat_while(|c| c == '0' || c == '1' || separator(c));
            Category::LiteralNumberBin
        } else {
            let mut category = Category::LiteralNumberInteger;
            self.eat_while(|c| c.is_ascii_digit() || separator(c));
            if self.peek() == Some('.')
                && !self
                    .peek_nth(1)
                    .is_some_and(|n| n == '.' || is_ident_start(n))
            {
                self.i += 1;
                self.eat_while(|c| c.is_ascii_digit() || separator(c));
                category = Category::LiteralNumberFloat;
            }
            if matches!(self.peek(), Some('e' | 'E')) {
                let signed = matches!(self.peek_nth(1), Some('+' | '-'));
                let digit_at = if signed { 2 } else { 1 };
                if self.peek_nth(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                    self.i += digit_at;
                    self.eat_while(|c| c.is_ascii_digit());
                    category = Category::LiteralNumberFloat;
                }
            }
            let digits = &self.src[start..self.i];
            if category == Category::LiteralNumberInteger
                && digits.len() > 1
                && digits.starts_with('0')
            {
                category = Category::LiteralNumberOct;
            }
            category
        };

        let suffix_start = self.i;
        self.eat_while(|c| c.is_ascii_alphanumeric());
        let suffix = &self.src[suffix_start..self.i];
        if suffix.contains(['l', 'L']) && category == Category::LiteralNumberInteger {
            category = Category::LiteralNumberIntegerLong;
        }
        self.push(start, category);
    }

    fn annotation(&mut self) {
        let start = self.i;
        self.i += 1;
        let name_start = self.i;
        self.eat_while(|c| is_ident_continue(c) || c == '.');
        let category = if &self.src[name_start..self.i] == "interface" {
            Category::KeywordDeclaration
        } else {
            Category::NameDecorator
        };
        self.push(start, category);
    }

    fn word(&mut self) {
        let start = self.i;
        self.eat_while(is_ident_continue);
        let word = &self.src[start..self.i];

        if self.language != LanguageId::Java && matches!(word, "L" | "u" | "U" | "u8") {
            match self.peek() {
                Some('"') => return self.string(start),
                Some('\'') => return self.char_literal(start),
                _ => {}
            }
        }

        let category = match self.words.get(word).copied() {
            Some(Category::KeywordDeclaration)
                if word == "class" && self.language == LanguageId::Java && self.after_dot =>
            {
                Category::KeywordPseudo
            }
            Some(category) => category,
            None => Category::Name,
        };
        self.push(start, category);
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn longest_match(rest: &str, table: &[&str]) -> Option<usize> {
    table
        .iter()
        .filter(|candidate| rest.starts_with(**candidate))
        .map(|candidate| candidate.len())
        .max()
}
