//! `codefp`: print a JSON fingerprint report for each source file.
//!
//! ```bash
//! codefp src/main.c include/util.hpp
//! codefp --config codefp.yaml --tokens Foo.java
//! codefp --type-only *.cc
//! RUST_LOG=codefp=debug codefp --log-json main.c
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use codefp::{
    CanonicalToken, Fingerprint, FingerprintFileConfig, LanguageId, PipelineConfig, PipelineError,
    fingerprint_file,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codefp")]
#[command(about = "Identifier- and literal-insensitive fingerprints for C, C++ and Java sources", long_about = None)]
struct Cli {
    /// YAML pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include the canonical token list in each report
    #[arg(long)]
    tokens: bool,

    /// Only resolve and print each file's language
    #[arg(long, conflicts_with = "tokens")]
    type_only: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,

    /// Source files to fingerprint
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

#[derive(Serialize)]
struct LanguageOutput<'a> {
    path: &'a str,
    language: LanguageId,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    path: &'a str,
    language: LanguageId,
    fingerprint: &'a Fingerprint,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a [CanonicalToken]>,
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    path: &'a str,
    error: String,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(err) = result {
        eprintln!("codefp: tracing already initialized: {err}");
    }
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig, String> {
    match path {
        Some(path) => FingerprintFileConfig::from_file(path)
            .map(|file| file.to_pipeline_config())
            .map_err(|err| format!("{}: {err}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}

/// File name used for language resolution; directories never contribute an
/// extension.
fn resolution_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn process(path: &Path, cli: &Cli, cfg: &PipelineConfig) -> Result<String, String> {
    let display = path.to_string_lossy();
    let name = resolution_name(path);

    if cli.type_only {
        let language = cfg
            .languages
            .resolve(&name)
            .map_err(|err| PipelineError::Lexical(err).to_string())?;
        return to_json(&LanguageOutput {
            path: &display,
            language,
        });
    }

    let text = fs::read_to_string(path).map_err(|err| format!("failed to read file: {err}"))?;
    let report = fingerprint_file(&name, &text, cfg).map_err(|err| err.to_string())?;
    to_json(&ReportOutput {
        path: &display,
        language: report.language,
        fingerprint: &report.fingerprint,
        tokens: cli.tokens.then_some(report.tokens.as_slice()),
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("failed to encode report: {err}"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let cfg = match load_config(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("codefp: {err}");
            return ExitCode::from(2);
        }
    };

    let mut failed = false;
    for path in &cli.paths {
        match process(path, &cli, &cfg) {
            Ok(line) => println!("{line}"),
            Err(error) => {
                failed = true;
                let display = path.to_string_lossy();
                match to_json(&ErrorOutput {
                    path: &display,
                    error,
                }) {
                    Ok(line) => println!("{line}"),
                    Err(err) => eprintln!("codefp: {err}"),
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
