//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Write};

use keytour_core::TypeIdentity;
use keytour_core::introspect::describe_type;
use keytour_core::lang::keywords::KEYWORDS;

use super::{CliError, CliResult, ExitCode};
use crate::config::TourConfig;
use crate::demos::{self, reflection};

// ============================================================================
// run
// ============================================================================

/// Run the selected demonstrations, writing their output to stdout.
///
/// Failing demonstrations are logged and skipped; the tour itself still succeeds.
pub fn run_tour(config: &TourConfig) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = demos::run_tour(&mut out, config);
    out.flush()
        .map_err(|e| CliError::failure(format!("Error writing output: {e}")))?;

    if summary.is_success() {
        tracing::info!(completed = summary.completed.len(), "tour finished");
    } else {
        tracing::warn!(
            completed = summary.completed.len(),
            failed = summary.failed.len(),
            "tour finished with failures"
        );
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// list
// ============================================================================

/// Print `<keyword>  <category>  <description>` for every catalogued keyword.
pub fn list_keywords() -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_keyword_list(&mut out).map_err(|e| CliError::failure(format!("Error writing output: {e}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Render the keyword catalogue into `out`, one aligned row per keyword.
pub fn write_keyword_list(out: &mut dyn Write) -> io::Result<()> {
    let keyword_width = KEYWORDS.iter().map(|k| k.canonical.len()).max().unwrap_or(0);
    let category_width = KEYWORDS.iter().map(|k| k.category.as_str().len()).max().unwrap_or(0);
    for info in KEYWORDS {
        writeln!(
            out,
            "{:<keyword_width$}  {:<category_width$}  {}",
            info.canonical,
            info.category.as_str(),
            info.description
        )?;
    }
    Ok(())
}

// ============================================================================
// describe
// ============================================================================

/// Print the descriptor of the registered type called `name`.
///
/// Unknown names are reported with the registered names as help and exit with code 1.
pub fn describe(name: &str, json: bool) -> CliResult<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_description(&mut out, name, json)?;
    Ok(ExitCode::SUCCESS)
}

/// Render the descriptor of `name` into `out` as text or pretty JSON.
pub fn write_description(out: &mut dyn Write, name: &str, json: bool) -> CliResult<()> {
    let descriptor = describe_type(&TypeIdentity::named(name))
        .map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))?;

    let written = if json {
        let rendered = serde_json::to_string_pretty(descriptor.as_ref())
            .map_err(|e| CliError::failure(format!("Error serializing descriptor: {e}")))?;
        writeln!(out, "{rendered}")
    } else {
        reflection::write_descriptor(out, &descriptor)
    };
    written.map_err(|e| CliError::failure(format!("Error writing output: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn describe_prints_properties_and_methods() {
        let mut out = Vec::new();
        write_description(&mut out, "ReflectionExampleClass", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Properties:\n- MyProperty\nMethods:\n- MyMethod\n"
        );
    }

    #[test]
    fn describe_unknown_type_fails_with_help() {
        let mut out = Vec::new();
        let err = write_description(&mut out, "Nope", false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unknown type `Nope`"));
        assert!(err.message.contains("ReflectionExampleClass"));
        assert!(out.is_empty());
    }

    #[test]
    fn describe_json_lists_members() {
        let mut out = Vec::new();
        write_description(&mut out, "Dog3", true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["name"], "Dog3");
        let members = value["members"].as_array().unwrap();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0]["kind"], "attribute");
        assert_eq!(members[0]["name"], "Name");
        assert_eq!(members[2]["kind"], "operation");
        assert_eq!(members[2]["name"], "MakeSound");
    }

    #[test]
    fn keyword_list_has_one_row_per_keyword() {
        let mut out = Vec::new();
        write_keyword_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), KEYWORDS.len());
        assert!(text.lines().any(|l| l.starts_with("sealed ") && l.ends_with('.')));
    }
}
