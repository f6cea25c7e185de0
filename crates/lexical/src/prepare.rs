use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How raw file content is tidied before it is lexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcePolicy {
    /// Rewrite `\r\n` and lone `\r` to `\n`.
    pub normalize_newlines: bool,
    /// Strip leading and trailing whitespace from the whole text.
    pub trim: bool,
}

impl Default for SourcePolicy {
    fn default() -> Self {
        Self {
            normalize_newlines: true,
            trim: true,
        }
    }
}

impl SourcePolicy {
    /// Leaves text untouched.
    pub fn verbatim() -> Self {
        Self {
            normalize_newlines: false,
            trim: false,
        }
    }
}

/// Applies `policy` to `input`. Borrows when nothing changes.
///
/// Offsets reported for prepared text refer to the prepared text, not to the
/// original input.
///
/// ```rust
/// use lexical::{prepare_source, SourcePolicy};
///
/// let out = prepare_source("  int x;\r\nint y;\r\n", &SourcePolicy::default());
/// assert_eq!(out, "int x;\nint y;");
/// ```
pub fn prepare_source<'a>(input: &'a str, policy: &SourcePolicy) -> Cow<'a, str> {
    let text: Cow<'a, str> = if policy.normalize_newlines && input.contains('\r') {
        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\r' {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            } else {
                out.push(c);
            }
        }
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    };

    if !policy.trim {
        return text;
    }

    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_string())
            }
        }
    }
}
