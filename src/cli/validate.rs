use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ContentError, Result};
use crate::models::config;
use crate::validate::{validate_document, ValidationReport};

pub fn handle_validate(track: Option<String>, file: Option<PathBuf>, json: bool, strict: bool) {
    let strict = strict || config::load_config().strict;

    let reports = match file {
        Some(path) => match read_document(&path) {
            Ok(text) => vec![validate_document(&path.display().to_string(), &text)],
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            let catalog = super::load_catalog();
            match track {
                Some(id) => vec![super::resolve_track(&catalog, Some(id)).validate()],
                None => catalog.validate(),
            }
        }
    };

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for report in &reports {
            print_report(report, strict);
        }
    }

    if reports.iter().any(|r| !r.passes(strict)) {
        std::process::exit(1);
    }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn print_report(report: &ValidationReport, strict: bool) {
    let status = if report.passes(strict) { "ok" } else { "FAILED" };
    println!(
        "{}: {} ({} error(s), {} warning(s))",
        report.target,
        status,
        report.errors.len(),
        report.warnings.len()
    );
    for error in &report.errors {
        println!("  error:   {}", error);
    }
    for warning in &report.warnings {
        println!("  warning: {}", warning);
    }
}
