//! Configuration types for code canonicalization.
//!
//! [`CanonicalizeConfig`] carries the fingerprint version and the
//! [`ClassifierConfig`] used to build a [`TokenClassifier`](crate::TokenClassifier).
//! [`LogicalLineConfig`] drives the optional downstream
//! [`assign_logical_lines`](crate::assign_logical_lines) pass.
//!
//! # Versioning
//!
//! The `version` is mixed into the SHA-256 identity digest of every
//! [`Fingerprint`](crate::Fingerprint). Any change to classification behaviour,
//! including a different builtin type allow-list, should come with a version
//! bump so that digests produced under different rules never compare equal.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{CanonicalizeConfig, ClassifierConfig};
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.classifier.builtin_type_names.contains(&"u32".to_string()));
//!
//! let custom = CanonicalizeConfig {
//!     version: 2,
//!     classifier: ClassifierConfig {
//!         builtin_type_names: vec!["size_type".into()],
//!     },
//! };
//! assert!(custom.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Top-level configuration for [`canonicalize`](crate::canonicalize).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalizeConfig {
    /// Fingerprint version. Must be >= 1; 0 is reserved.
    pub version: u32,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl CanonicalizeConfig {
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        self.classifier.validate()
    }
}

/// Rule-table inputs for the token classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Identifiers that name builtin or conventional type aliases.
    ///
    /// A name span whose trimmed, lower-cased text equals one of these
    /// entries exactly keeps its verbatim text instead of being folded to the
    /// identifier marker. Entries are trimmed but not case-folded, so one
    /// containing upper-case letters (`CString`, `UINT32`) never matches.
    pub builtin_type_names: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            builtin_type_names: vec![
                "CString".into(),
                "UINT32".into(),
                "u8".into(),
                "u32".into(),
            ],
        }
    }
}

impl ClassifierConfig {
    /// An allow-list with no entries: every name folds to the marker.
    pub fn without_builtin_types() -> Self {
        Self {
            builtin_type_names: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), CanonicalError> {
        if let Some(idx) = self
            .builtin_type_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(CanonicalError::InvalidConfig(format!(
                "builtin_type_names[{idx}] is empty"
            )));
        }
        Ok(())
    }
}

/// Symbols that close a logical line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogicalLineConfig {
    pub break_symbols: Vec<String>,
}

impl Default for LogicalLineConfig {
    fn default() -> Self {
        Self {
            break_symbols: vec![";".into(), "{".into(), "}".into()],
        }
    }
}

impl LogicalLineConfig {
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.break_symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(CanonicalError::InvalidConfig(
                "logical line break symbols must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_zero_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn blank_allow_list_entry_rejected() {
        let cfg = ClassifierConfig {
            builtin_type_names: vec!["u8".into(), "  ".into()],
        };
        assert_eq!(
            cfg.validate(),
            Err(CanonicalError::InvalidConfig(
                "builtin_type_names[1] is empty".into()
            ))
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg: CanonicalizeConfig = serde_json::from_str(r#"{"version": 3}"#).expect("parse");
        assert_eq!(cfg.version, 3);
        assert_eq!(cfg.classifier, ClassifierConfig::default());

        let lines: LogicalLineConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(lines.break_symbols, vec![";", "{", "}"]);
    }

    #[test]
    fn empty_break_symbol_rejected() {
        let cfg = LogicalLineConfig {
            break_symbols: vec![String::new()],
        };
        assert!(cfg.validate().is_err());
    }
}
