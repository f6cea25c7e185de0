use codefp::{
    FingerprintFileConfig, LogicalLineConfig, PipelineConfig, PipelineError, Symbol,
    fingerprint_file, string_hash,
};

const SAMPLE: &str = r#"#include <stdio.h>

/* Prints a greeting. */
static int greet(const char *name, int times)
{
    for (int i = 0; i < times; i++) {
        printf("hello, %s\n", name);
    }
    return 0;
}
"#;

#[test]
fn sample_file_end_to_end() -> Result<(), PipelineError> {
    let cfg = PipelineConfig::default();
    let report = fingerprint_file("greet.c", SAMPLE, &cfg)?;

    assert_eq!(
        report.fingerprint.canonical_text,
        "staticint$(constchar*$,int$){for(int$=$;$<$;$++){$($,$);}return$;}"
    );
    assert_eq!(
        report.fingerprint.hash,
        string_hash(&report.fingerprint.canonical_text)
    );
    assert_eq!(report.fingerprint.token_count, report.tokens.len());

    // Prepared text is trimmed, so `static` sits on line 4.
    let first = &report.tokens[0];
    assert_eq!(first.kind, Symbol::Verbatim("static".into()));
    assert_eq!((first.line, first.column), (4, 1));

    let format_string = report
        .tokens
        .iter()
        .find(|t| t.text.starts_with("\"hello"))
        .expect("string literal token");
    assert_eq!(format_string.kind, Symbol::Literal);
    assert_eq!(format_string.text, "\"hello, %s\\n\"");
    assert_eq!((format_string.line, format_string.column), (7, 16));

    Ok(())
}

#[test]
fn second_line_token_column() -> Result<(), PipelineError> {
    let report = fingerprint_file("two.c", "a;\n   b;", &PipelineConfig::default())?;
    let b = &report.tokens[2];
    assert_eq!(b.line, 2);
    assert_eq!(b.column, 1 + 3);
    assert_eq!(b.start_offset, "a;\n   ".len());
    Ok(())
}

#[test]
fn empty_source_has_zero_hash() -> Result<(), PipelineError> {
    let report = fingerprint_file("empty.java", "  \n\n", &PipelineConfig::default())?;
    assert!(report.tokens.is_empty());
    assert_eq!(report.fingerprint.canonical_text, "");
    assert_eq!(report.fingerprint.hash, 0);
    Ok(())
}

#[test]
fn yaml_config_drives_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = r#"
version: "1.0"
canonical:
  builtin_type_names: ["size_t"]
languages:
  extensions:
    inc: c
logical_lines:
  enabled: true
"#;
    let cfg = FingerprintFileConfig::from_yaml(yaml)?.to_pipeline_config();
    let report = fingerprint_file("table.inc", "size_t n; u8 m;", &cfg)?;

    assert_eq!(report.fingerprint.canonical_text, "size_t$;$$;");
    let lines: Vec<Option<usize>> = report.tokens.iter().map(|t| t.logical_line).collect();
    assert_eq!(
        lines,
        vec![Some(1), Some(1), Some(1), Some(2), Some(2), Some(2)]
    );
    assert_eq!(cfg.logical_lines, Some(LogicalLineConfig::default()));
    Ok(())
}

#[test]
fn report_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let report = fingerprint_file("a.cpp", "x = 1;", &PipelineConfig::default())?;
    let json = serde_json::to_value(&report)?;

    assert_eq!(json["language"], "cpp");
    assert_eq!(json["fingerprint"]["canonical_text"], "$=$;");
    assert_eq!(json["tokens"][0]["kind"], "identifier");
    assert_eq!(json["tokens"][1]["kind"]["verbatim"], "=");

    let back: codefp::FingerprintReport = serde_json::from_value(json)?;
    assert_eq!(back, report);
    Ok(())
}
