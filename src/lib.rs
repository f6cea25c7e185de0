//! Workspace umbrella crate for code fingerprinting.
//!
//! This crate stitches together language resolution, source preparation,
//! normalization and fingerprinting so callers can fingerprint a source file
//! with a single API entry point.
//!
//! ```rust
//! use codefp::{fingerprint_file, PipelineConfig};
//!
//! let cfg = PipelineConfig::default();
//! let a = fingerprint_file("a.c", "int total = 10;\n", &cfg).unwrap();
//! let b = fingerprint_file("b.c", "int n=0; /* reset */", &cfg).unwrap();
//! assert!(a.is_clone_of(&b));
//! assert_eq!(a.fingerprint.canonical_text, "int$=$;");
//! ```

pub mod config;

pub use crate::config::{ConfigLoadError, FingerprintFileConfig};
pub use canonical::{
    CanonicalError, CanonicalToken, CanonicalizeConfig, CanonicalizedSource, ClassifierConfig,
    Fingerprint, IDENTIFIER_MARKER, LITERAL_MARKER, LogicalLineConfig, Symbol, TokenClassifier,
    assign_logical_lines, canonical_text, canonicalize, fingerprint_hash, hash_text, normalize,
    normalize_language, string_hash, token_text,
};
pub use lexical::{
    CFamilyLexer, Category, LanguageId, LanguageTable, LexicalError, LexicalSource, LexicalSpan,
    SourcePolicy, TaggedSpans, prepare_source, resolve_language,
};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};
use tracing::{Level, info, warn};

/// Default upper bound on source size accepted by the pipeline (10 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 10 * 1024 * 1024;

/// Errors that can occur while fingerprinting a source through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    Lexical(LexicalError),
    Canonical(CanonicalError),
    SourceTooLarge {
        source_name: String,
        size: usize,
        limit: usize,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Lexical(err) => write!(f, "lexical failure: {err}"),
            PipelineError::Canonical(err) => write!(f, "canonicalization failure: {err}"),
            PipelineError::SourceTooLarge {
                source_name,
                size,
                limit,
            } => write!(
                f,
                "source {source_name} is {size} bytes, limit is {limit} bytes"
            ),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Lexical(err) => Some(err),
            PipelineError::Canonical(err) => Some(err),
            PipelineError::SourceTooLarge { .. } => None,
        }
    }
}

impl From<LexicalError> for PipelineError {
    fn from(value: LexicalError) -> Self {
        PipelineError::Lexical(value)
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        PipelineError::Canonical(value)
    }
}

/// Configuration for every pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    pub canonical: CanonicalizeConfig,
    pub languages: LanguageTable,
    pub source_policy: SourcePolicy,
    /// When set, reported tokens carry logical line numbers.
    pub logical_lines: Option<LogicalLineConfig>,
    pub max_source_bytes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            canonical: CanonicalizeConfig::default(),
            languages: LanguageTable::default(),
            source_policy: SourcePolicy::default(),
            logical_lines: None,
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.canonical.validate()?;
        if let Some(lines) = &self.logical_lines {
            lines.validate()?;
        }
        if self.max_source_bytes == 0 {
            return Err(CanonicalError::InvalidConfig(
                "max_source_bytes must be >= 1".into(),
            )
            .into());
        }
        Ok(())
    }
}

/// Result of fingerprinting one source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintReport {
    pub source_name: String,
    pub language: LanguageId,
    pub fingerprint: Fingerprint,
    pub tokens: Vec<CanonicalToken>,
}

impl FingerprintReport {
    /// True when both reports carry the same versioned digest.
    pub fn is_clone_of(&self, other: &FingerprintReport) -> bool {
        self.fingerprint.canonical_version == other.fingerprint.canonical_version
            && self.fingerprint.sha256_hex == other.fingerprint.sha256_hex
    }
}

/// Metrics observer for pipeline stages.
pub trait PipelineMetrics: Send + Sync {
    fn record_resolve(&self, latency: Duration, result: Result<(), LexicalError>);
    fn record_fingerprint(&self, latency: Duration, result: Result<(), PipelineError>);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_resolve(self, result: Result<(), LexicalError>) {
        self.recorder.record_resolve(self.start.elapsed(), result);
    }

    fn record_fingerprint(self, result: Result<(), PipelineError>) {
        self.recorder
            .record_fingerprint(self.start.elapsed(), result);
    }
}

/// Resolve the language of `filename` from `cfg.languages`, then fingerprint
/// `text` with [`fingerprint_source`].
pub fn fingerprint_file(
    filename: &str,
    text: &str,
    cfg: &PipelineConfig,
) -> Result<FingerprintReport, PipelineError> {
    let mut resolve_metrics = MetricsSpan::start();
    let language = match cfg.languages.resolve(filename) {
        Ok(language) => {
            if let Some(span) = resolve_metrics.take() {
                span.record_resolve(Ok(()));
            }
            language
        }
        Err(err) => {
            warn!(filename, error = %err, "fingerprint_failure");
            if let Some(span) = resolve_metrics.take() {
                span.record_resolve(Err(err.clone()));
            }
            return Err(PipelineError::Lexical(err));
        }
    };

    fingerprint_source(language, filename, text, cfg)
}

/// Fingerprint `text` as `language` source.
///
/// Applies the size limit and the source policy, canonicalizes with the
/// language's built-in lexer and assigns logical lines when configured.
pub fn fingerprint_source(
    language: LanguageId,
    source_name: &str,
    text: &str,
    cfg: &PipelineConfig,
) -> Result<FingerprintReport, PipelineError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "fingerprint.file",
        source_name = %source_name,
        language = %language
    );
    let _guard = span.enter();

    let mut metrics = MetricsSpan::start();
    match fingerprint_inner(language, source_name, text, cfg) {
        Ok(report) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                token_count = report.fingerprint.token_count,
                hash = report.fingerprint.hash,
                source_len = text.len(),
                elapsed_micros,
                "fingerprint_success"
            );
            if let Some(span) = metrics.take() {
                span.record_fingerprint(Ok(()));
            }
            Ok(report)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "fingerprint_failure");
            if let Some(span) = metrics.take() {
                span.record_fingerprint(Err(err.clone()));
            }
            Err(err)
        }
    }
}

fn fingerprint_inner(
    language: LanguageId,
    source_name: &str,
    text: &str,
    cfg: &PipelineConfig,
) -> Result<FingerprintReport, PipelineError> {
    cfg.validate()?;
    if text.len() > cfg.max_source_bytes {
        return Err(PipelineError::SourceTooLarge {
            source_name: source_name.to_string(),
            size: text.len(),
            limit: cfg.max_source_bytes,
        });
    }

    let prepared = prepare_source(text, &cfg.source_policy);
    let lexer = language.lexer();
    let CanonicalizedSource {
        tokens,
        fingerprint,
        ..
    } = canonicalize(&lexer, &prepared, source_name, &cfg.canonical)?;

    let tokens = match &cfg.logical_lines {
        Some(lines) => assign_logical_lines(tokens, lines),
        None => tokens,
    };

    Ok(FingerprintReport {
        source_name: source_name.to_string(),
        language,
        fingerprint,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn fingerprint_file_resolves_and_canonicalizes() {
        let cfg = PipelineConfig::default();
        let report = fingerprint_file("Main.java", "int x = 5;", &cfg).expect("fingerprint");
        assert_eq!(report.language, LanguageId::Java);
        assert_eq!(report.source_name, "Main.java");
        assert_eq!(report.fingerprint.canonical_text, "int$=$;");
        assert_eq!(report.tokens.len(), 5);
        assert!(report.tokens.iter().all(|t| t.logical_line.is_none()));
    }

    #[test]
    fn crlf_and_surrounding_blank_lines_are_prepared_away() {
        let cfg = PipelineConfig::default();
        let report =
            fingerprint_file("a.c", "\r\n\r\n  int a;\r\nint b;\r\n", &cfg).expect("fingerprint");
        let positions: Vec<(usize, usize)> =
            report.tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (1, 6), (2, 1), (2, 5), (2, 6)]);
    }

    #[test]
    fn verbatim_policy_keeps_original_positions() {
        let cfg = PipelineConfig {
            source_policy: SourcePolicy::verbatim(),
            ..Default::default()
        };
        let report = fingerprint_file("a.c", "\n\n  x;", &cfg).expect("fingerprint");
        assert_eq!((report.tokens[0].line, report.tokens[0].column), (3, 3));
    }

    #[test]
    fn logical_lines_assigned_when_configured() {
        let cfg = PipelineConfig {
            logical_lines: Some(LogicalLineConfig::default()),
            ..Default::default()
        };
        let report = fingerprint_file("a.cpp", "a = 1; b = 2;", &cfg).expect("fingerprint");
        let lines: Vec<Option<usize>> = report.tokens.iter().map(|t| t.logical_line).collect();
        assert_eq!(
            lines,
            vec![Some(1), Some(1), Some(1), Some(1), Some(2), Some(2), Some(2), Some(2)]
        );
    }

    #[test]
    fn unknown_and_unsupported_extensions() {
        let cfg = PipelineConfig::default();
        assert_eq!(
            fingerprint_file("data", "x", &cfg),
            Err(PipelineError::Lexical(LexicalError::UnknownLanguage {
                filename: "data".into()
            }))
        );
        assert_eq!(
            fingerprint_file("data.xyz", "x", &cfg),
            Err(PipelineError::Lexical(LexicalError::UnsupportedLanguage {
                extension: "xyz".into()
            }))
        );
    }

    #[test]
    fn oversized_source_rejected() {
        let cfg = PipelineConfig {
            max_source_bytes: 4,
            ..Default::default()
        };
        let err = fingerprint_file("a.c", "int x;", &cfg).unwrap_err();
        assert_eq!(
            err,
            PipelineError::SourceTooLarge {
                source_name: "a.c".into(),
                size: 6,
                limit: 4
            }
        );
        assert!(err.to_string().contains("limit is 4 bytes"));
    }

    #[test]
    fn invalid_config_rejected_before_scanning() {
        let cfg = PipelineConfig {
            max_source_bytes: 0,
            ..Default::default()
        };
        assert!(matches!(
            fingerprint_source(LanguageId::C, "a.c", "int x;", &cfg),
            Err(PipelineError::Canonical(CanonicalError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn error_source_chain() {
        let err = PipelineError::from(LexicalError::UnknownLanguage {
            filename: "x".into(),
        });
        assert!(err.source().is_some());
        assert!(
            PipelineError::SourceTooLarge {
                source_name: "x".into(),
                size: 2,
                limit: 1
            }
            .source()
            .is_none()
        );
    }

    #[derive(Default)]
    struct CountingMetrics {
        events: Mutex<Vec<&'static str>>,
    }

    impl CountingMetrics {
        fn snapshot(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().clone()
        }
    }

    impl PipelineMetrics for CountingMetrics {
        fn record_resolve(&self, _latency: Duration, result: Result<(), LexicalError>) {
            let label = if result.is_ok() {
                "resolve_ok"
            } else {
                "resolve_err"
            };
            self.events.lock().unwrap().push(label);
        }

        fn record_fingerprint(&self, _latency: Duration, result: Result<(), PipelineError>) {
            let label = if result.is_ok() {
                "fingerprint_ok"
            } else {
                "fingerprint_err"
            };
            self.events.lock().unwrap().push(label);
        }
    }

    #[test]
    fn metrics_recorder_tracks_pipeline_outcome() {
        let metrics = Arc::new(CountingMetrics::default());
        set_pipeline_metrics(Some(metrics.clone()));

        let cfg = PipelineConfig::default();
        let ok = fingerprint_file("metrics.c", "int x;", &cfg);
        let unsupported = fingerprint_file("metrics.rs", "fn x() {}", &cfg);

        set_pipeline_metrics(None);

        assert!(ok.is_ok());
        assert!(unsupported.is_err());
        let events = metrics.snapshot();
        assert!(events.contains(&"resolve_ok"));
        assert!(events.contains(&"fingerprint_ok"));
        assert!(events.contains(&"resolve_err"));
    }
}
