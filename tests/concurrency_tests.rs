//! Concurrency and thread safety tests for the fingerprinting pipeline

use std::sync::Arc;
use std::thread;

use codefp::{
    CanonicalizeConfig, LanguageId, PipelineConfig, TokenClassifier, canonicalize,
    fingerprint_file, normalize_language,
};

const SOURCE: &str = "int main(void) {\n    int total = 0;\n    for (int i = 0; i < 10; i++) total += i;\n    return total;\n}\n";

#[test]
fn concurrent_canonicalize_same_config() {
    let config = Arc::new(CanonicalizeConfig::default());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                canonicalize(
                    &LanguageId::C.lexer(),
                    SOURCE,
                    &format!("thread-{i}.c"),
                    &config,
                )
                .expect("canonicalize should succeed")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let first = &results[0];
    for (i, result) in results.iter().enumerate().skip(1) {
        assert_eq!(
            first.fingerprint.canonical_text, result.fingerprint.canonical_text,
            "Thread {i} produced different canonical text",
        );
        assert_eq!(
            first.fingerprint.sha256_hex, result.fingerprint.sha256_hex,
            "Thread {i} produced different hash",
        );
    }
}

#[test]
fn shared_classifier_across_threads() {
    let classifier = Arc::new(TokenClassifier::default());

    let handles: Vec<_> = [LanguageId::C, LanguageId::Cpp, LanguageId::Java]
        .into_iter()
        .cycle()
        .take(12)
        .map(|language| {
            let classifier = Arc::clone(&classifier);
            thread::spawn(move || {
                normalize_language(language, SOURCE, "shared", &classifier)
                    .expect("normalize should succeed")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for tokens in &results {
        assert_eq!(tokens, &results[0]);
    }
}

#[test]
fn concurrent_pipeline_processing() {
    let cfg = Arc::new(PipelineConfig::default());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let cfg = Arc::clone(&cfg);
            thread::spawn(move || {
                let text = format!("int v{i} = {i};\nreturn v{i} * {};", i + 1);
                fingerprint_file(&format!("file-{i}.cpp"), &text, &cfg)
                    .expect("process should succeed")
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (i, report) in results.iter().enumerate() {
        assert_eq!(report.source_name, format!("file-{i}.cpp"));
        assert_eq!(
            report.fingerprint.canonical_text, "int$=$;return$*$;",
            "Thread {i} produced unexpected canonical text",
        );
        assert!(report.is_clone_of(&results[0]));
    }
}
