//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use beanprobe_core::TypeInfo;
use beanprobe_syntax::scan::scan_named;

use super::report::{TypeReport, render_json, render_text};
use super::{CliError, CliResult, ExitCode, OutputFormat};
use crate::config::IntrospectorConfig;
use crate::expect::contains_exactly;
use crate::introspector::Introspector;

/// Maximum source file size (10 MB)
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "File '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Cannot read file '{}': {}", path.display(), e)))
}

/// Read and scan one file, rendering parse errors as source diagnostics.
///
/// ## Errors
///
/// Returns an error if the file cannot be read or is not valid Rust.
pub fn scan_file(path: &Path) -> CliResult<Vec<TypeInfo>> {
    let source = read_source(path)?;
    scan_named(&path.display().to_string(), &source)
        .map_err(|err| CliError::failure(format!("{:?}", miette::Report::new(err))))
}

/// Scan files and produce one report per type, optionally restricted to `type_name`.
///
/// ## Errors
///
/// Returns an error if any file fails to scan, or if `type_name` is given and no file declares it.
pub fn collect_reports(
    files: &[impl AsRef<Path>],
    type_name: Option<&str>,
    config: &IntrospectorConfig,
) -> CliResult<Vec<TypeReport>> {
    let introspector = Introspector::new(config.clone());
    let mut reports = Vec::new();
    for file in files {
        let types = scan_file(file.as_ref())?;
        reports.extend(
            types
                .iter()
                .filter(|info| type_name.is_none_or(|wanted| info.name == wanted))
                .map(|info| TypeReport::describe(&introspector, info)),
        );
    }

    match type_name {
        Some(wanted) if reports.is_empty() => Err(CliError::failure(format!("Type '{wanted}' was not found"))),
        _ => Ok(reports),
    }
}

/// `beanprobe scan`: print every type's properties.
///
/// Exits with failure when any type fails to introspect (the failures are part of the output).
pub fn scan_files(
    files: &[impl AsRef<Path>],
    type_name: Option<&str>,
    format: OutputFormat,
    names_only: bool,
    config: &IntrospectorConfig,
) -> CliResult<ExitCode> {
    let reports = collect_reports(files, type_name, config)?;

    let rendered = match format {
        OutputFormat::Text => render_text(&reports, names_only),
        OutputFormat::Json => render_json(&reports)
            .map_err(|e| CliError::failure(format!("Cannot render JSON: {e}")))?,
    };
    print!("{rendered}");
    if format == OutputFormat::Json {
        println!();
    }

    let failures = reports.iter().filter(|r| r.is_err()).count();
    if failures > 0 {
        tracing::warn!(failures, "some types could not be introspected");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Compare one type's property names with the expected list.
///
/// ## Errors
///
/// Returns the rendered mismatch (or the introspection error) as a failure.
pub fn check_report(report: &TypeReport, expected: &[String]) -> CliResult<()> {
    if let Some(err) = &report.error {
        return Err(CliError::failure(format!("{}: error: {}", report.type_name, err)));
    }
    contains_exactly(&report.names(), expected)
        .map_err(|mismatch| CliError::failure(format!("{}: {}", report.type_name, mismatch)))
}

/// `beanprobe check`: succeed only when `type_name` has exactly the `expected` properties, in order.
pub fn check_type(
    file: &Path,
    type_name: &str,
    expected: &[String],
    config: &IntrospectorConfig,
) -> CliResult<ExitCode> {
    let reports = collect_reports(&[file], Some(type_name), config)?;
    for report in &reports {
        check_report(report, expected)?;
    }
    println!("{type_name}: ok ({})", expected.join(", "));
    Ok(ExitCode::SUCCESS)
}
