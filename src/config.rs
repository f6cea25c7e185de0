//! YAML configuration file support.
//!
//! Loads a whole [`PipelineConfig`](crate::PipelineConfig) from a single YAML
//! file so the CLI and library callers can share one configuration format.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "strict c"
//!
//! canonical:
//!   version: 2
//!   builtin_type_names: ["size_t", "u8", "u32"]
//!
//! languages:
//!   replace_defaults: false
//!   extensions:
//!     inc: c
//!     hh: cpp
//!
//! source:
//!   normalize_newlines: true
//!   trim: true
//!
//! logical_lines:
//!   enabled: true
//!   break_symbols: [";", "{", "}"]
//!
//! limits:
//!   max_source_bytes: 1048576
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use canonical::{CanonicalizeConfig, ClassifierConfig, LogicalLineConfig};
use lexical::{LanguageId, LanguageTable, SourcePolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_MAX_SOURCE_BYTES, PipelineConfig};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure for the fingerprinting pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FingerprintFileConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub languages: LanguagesYamlConfig,

    #[serde(default)]
    pub source: SourcePolicy,

    #[serde(default)]
    pub logical_lines: LogicalLinesYamlConfig,

    #[serde(default)]
    pub limits: LimitsYamlConfig,
}

impl FingerprintFileConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FingerprintFileConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.languages.validate()?;
        self.logical_lines.validate()?;
        self.limits.validate()?;
        Ok(())
    }

    /// Build the runtime pipeline configuration.
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            canonical: self.canonical.to_canonical_config(),
            languages: self.languages.to_table(),
            source_policy: self.source,
            logical_lines: self
                .logical_lines
                .enabled
                .then(|| LogicalLineConfig {
                    break_symbols: self.logical_lines.break_symbols.clone(),
                }),
            max_source_bytes: self.limits.max_source_bytes,
        }
    }
}

impl Default for FingerprintFileConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            languages: LanguagesYamlConfig::default(),
            source: SourcePolicy::default(),
            logical_lines: LogicalLinesYamlConfig::default(),
            limits: LimitsYamlConfig::default(),
        }
    }
}

/// Canonicalization stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Replaces the default allow-list when present.
    #[serde(default)]
    pub builtin_type_names: Option<Vec<String>>,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        self.to_canonical_config()
            .classifier
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))
    }

    fn to_canonical_config(&self) -> CanonicalizeConfig {
        let classifier = match &self.builtin_type_names {
            Some(names) => ClassifierConfig {
                builtin_type_names: names.clone(),
            },
            None => ClassifierConfig::default(),
        };
        CanonicalizeConfig {
            version: self.version,
            classifier,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            builtin_type_names: None,
        }
    }
}

/// Extension table YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagesYamlConfig {
    /// Start from an empty table instead of the built-in mapping.
    #[serde(default)]
    pub replace_defaults: bool,

    #[serde(default)]
    pub extensions: BTreeMap<String, LanguageId>,
}

impl LanguagesYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if let Some(ext) = self
            .extensions
            .keys()
            .find(|ext| ext.trim_start_matches('.').trim().is_empty())
        {
            return Err(ConfigLoadError::Validation(format!(
                "languages.extensions has an empty extension: {ext:?}"
            )));
        }
        if self.replace_defaults && self.extensions.is_empty() {
            return Err(ConfigLoadError::Validation(
                "languages.replace_defaults needs at least one extension".to_string(),
            ));
        }
        Ok(())
    }

    fn to_table(&self) -> LanguageTable {
        let mut table = if self.replace_defaults {
            LanguageTable::empty()
        } else {
            LanguageTable::default()
        };
        for (ext, language) in &self.extensions {
            table.insert(ext, *language);
        }
        table
    }
}

/// Logical line YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogicalLinesYamlConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_break_symbols")]
    pub break_symbols: Vec<String>,
}

impl LogicalLinesYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.enabled && self.break_symbols.is_empty() {
            return Err(ConfigLoadError::Validation(
                "logical_lines.break_symbols must not be empty when enabled".to_string(),
            ));
        }
        LogicalLineConfig {
            break_symbols: self.break_symbols.clone(),
        }
        .validate()
        .map_err(|err| ConfigLoadError::Validation(err.to_string()))
    }
}

impl Default for LogicalLinesYamlConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            break_symbols: default_break_symbols(),
        }
    }
}

/// Input limits YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsYamlConfig {
    #[serde(default = "default_max_source_bytes")]
    pub max_source_bytes: usize,
}

impl LimitsYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_source_bytes == 0 {
            return Err(ConfigLoadError::Validation(
                "limits.max_source_bytes must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LimitsYamlConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

fn default_version() -> u32 {
    1
}
fn default_break_symbols() -> Vec<String> {
    LogicalLineConfig::default().break_symbols
}
fn default_max_source_bytes() -> usize {
    DEFAULT_MAX_SOURCE_BYTES
}
