//! Implementation of the `conjoin check` command.

use std::path::{Path, PathBuf};

use conjoin::{Pattern, PatternKey, RawPatternTable};
use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::data::{read_raw, DataError};
use crate::output::table::{format_locale_table, LocaleSummary};
use crate::output::PatternDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Pattern files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A malformed key or pattern in a pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub locale: String,
    pub key: String,
    /// `two`, `start`, `middle`, or `end`; none when the key itself is bad.
    pub field: Option<&'static str>,
    /// 1-based character column within `source`.
    pub column: usize,
    pub message: String,
    /// The offending pattern string, or the key name.
    pub source: String,
}

/// Check results for one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Valid keys per locale.
    pub locales: Vec<LocaleKeys>,
    pub problems: Vec<Problem>,
}

#[derive(Debug, Serialize)]
pub struct LocaleKeys {
    pub locale: String,
    pub keys: Vec<String>,
}

/// Validate every key and pattern in a file, collecting all problems.
pub fn check_file(path: &Path) -> Result<FileReport, DataError> {
    debug!(path = %path.display(), "checking pattern file");
    let raw = read_raw(path)?;
    let mut locales = Vec::new();
    let mut problems = Vec::new();

    for (locale, tables) in raw {
        let mut keys = Vec::new();
        for (key, table) in tables {
            let before = problems.len();
            check_table(&locale, &key, &table, &mut problems);
            if problems.len() == before {
                keys.push(key);
            }
        }
        locales.push(LocaleKeys { locale, keys });
    }

    Ok(FileReport {
        path: path.display().to_string(),
        locales,
        problems,
    })
}

fn check_table(locale: &str, key: &str, table: &RawPatternTable, problems: &mut Vec<Problem>) {
    if let Err(e) = key.parse::<PatternKey>() {
        problems.push(Problem {
            locale: locale.to_string(),
            key: key.to_string(),
            field: None,
            column: 1,
            message: e.to_string(),
            source: key.to_string(),
        });
        return;
    }

    let fields = [
        ("two", &table.two),
        ("start", &table.start),
        ("middle", &table.middle),
        ("end", &table.end),
    ];
    for (field, source) in fields {
        if let Err(e) = Pattern::parse(source) {
            problems.push(Problem {
                locale: locale.to_string(),
                key: key.to_string(),
                field: Some(field),
                column: e.column(),
                message: e.message(),
                source: source.clone(),
            });
        }
    }
}

fn summaries(report: &FileReport) -> Vec<LocaleSummary> {
    report
        .locales
        .iter()
        .map(|locale| LocaleSummary {
            locale: locale.locale.clone(),
            keys: locale.keys.clone(),
            problems: report
                .problems
                .iter()
                .filter(|problem| problem.locale == locale.locale)
                .count(),
        })
        .collect()
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();
    for path in &args.files {
        match check_file(path) {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("{}", e);
                return Ok(e.exit_code());
            }
        }
    }

    let any_problems = reports.iter().any(|report| !report.problems.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for report in &reports {
            for problem in &report.problems {
                let diagnostic = PatternDiagnostic::from_problem(&report.path, problem);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }

            let tables: usize = report.locales.iter().map(|l| l.keys.len()).sum();
            if report.problems.is_empty() {
                println!(
                    "{} {}: {} valid tables",
                    "✓".if_supports_color(Stream::Stdout, |t| t.green()),
                    report.path,
                    tables
                );
            } else {
                println!(
                    "{} {}: {} problems",
                    "✗".if_supports_color(Stream::Stdout, |t| t.red()),
                    report.path,
                    report.problems.len()
                );
            }
            println!("{}", format_locale_table(&summaries(report)));
        }
    }

    if any_problems {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_file_has_no_problems() {
        let file = write_file(
            r#"{
                "de": {
                    "standard": { "two": "{0} und {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} und {1}" },
                    "or": { "two": "{0} oder {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} oder {1}" }
                }
            }"#,
        );
        let report = check_file(file.path()).unwrap();
        assert!(report.problems.is_empty());
        assert_eq!(report.locales[0].keys, vec!["or", "standard"]);
    }

    #[test]
    fn reports_every_malformed_pattern() {
        let file = write_file(
            r#"{
                "de": {
                    "standard": { "two": "{0} und", "start": "{0}, {1}", "middle": "{0}, {2}", "end": "{0} und {1}" }
                }
            }"#,
        );
        let report = check_file(file.path()).unwrap();
        assert!(report.locales[0].keys.is_empty());
        assert_eq!(report.problems.len(), 2);
        assert_eq!(report.problems[0].field, Some("two"));
        assert_eq!(report.problems[1].field, Some("middle"));
        assert_eq!(report.problems[1].column, 6);
        assert_eq!(report.problems[1].source, "{0}, {2}");
    }

    #[test]
    fn reports_unknown_keys_with_suggestion() {
        let file = write_file(
            r#"{ "de": { "unit-narow": { "two": "{0} {1}", "start": "{0} {1}", "middle": "{0} {1}", "end": "{0} {1}" } } }"#,
        );
        let report = check_file(file.path()).unwrap();
        assert_eq!(report.problems.len(), 1);
        assert_eq!(report.problems[0].field, None);
        assert_eq!(
            report.problems[0].message,
            "invalid pattern key 'unit-narow', did you mean: unit-narrow?"
        );
    }

    #[test]
    fn summaries_count_problems_per_locale() {
        let file = write_file(
            r#"{
                "de": { "or": { "two": "{0} oder {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} oder {1}" } },
                "fr": { "or": { "two": "{0} ou", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} ou {1}" } }
            }"#,
        );
        let report = check_file(file.path()).unwrap();
        let rows = summaries(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].locale.as_str(), rows[0].problems), ("de", 0));
        assert_eq!((rows[1].locale.as_str(), rows[1].problems), ("fr", 1));
    }
}
