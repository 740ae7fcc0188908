//! Implementation of the `conjoin format` command.

use std::path::PathBuf;

use conjoin::{
    extract_spans, Fallback, FormatError, ListFormat, ListFormatOptions, ListType, PatternStore,
    ResolvedOptions, Span, Style,
};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::data::{load_store, DataError};

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Items to join, in order
    pub items: Vec<String>,

    /// Locale tag (e.g., en, es-MX)
    #[arg(long, default_value = conjoin::DEFAULT_LOCALE, env = "CONJOIN_LOCALE")]
    pub locale: String,

    /// List type: conjunction, disjunction, or unit
    #[arg(long = "type", default_value = "conjunction")]
    pub list_type: ListType,

    /// Style: long, short, or narrow
    #[arg(long)]
    pub style: Option<Style>,

    /// JSON pattern file to use in addition to the builtin English patterns
    #[arg(long)]
    pub patterns: Option<PathBuf>,

    /// Print literal and element parts instead of the joined string
    #[arg(long)]
    pub parts: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for format results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Span>>,
    pub resolved_options: ResolvedOptions,
}

/// Builtin English patterns plus any from `--patterns`.
fn pattern_store(args: &FormatArgs) -> Result<PatternStore, DataError> {
    let mut store = PatternStore::with_english();
    if let Some(path) = &args.patterns {
        let loaded = load_store(path)?;
        debug!(path = %path.display(), tables = loaded.len(), "loaded pattern file");
        store.extend(loaded);
    }
    Ok(store)
}

/// Build the formatter described by `args`. Regional locales fall back to
/// their language (`en-AU` uses `en` patterns).
fn build_format(args: &FormatArgs, store: PatternStore) -> Result<ListFormat, FormatError> {
    let options = ListFormatOptions::builder()
        .locale(args.locale.clone())
        .list_type(args.list_type)
        .maybe_style(args.style)
        .build();
    ListFormat::try_new(options, &Fallback::new(store))
}

/// Format `items` into the command's output structure.
fn format_items(
    format: &ListFormat,
    items: &[String],
    parts: bool,
) -> Result<FormatResult, FormatError> {
    let joined = format.join(items);
    let parts = if parts {
        Some(extract_spans(&joined, items)?)
    } else {
        None
    };
    Ok(FormatResult {
        result: joined.into_text(),
        parts,
        resolved_options: format.resolved_options(),
    })
}

/// Render parts one per line, elements highlighted.
fn render_parts(parts: &[Span]) -> String {
    parts
        .iter()
        .map(|span| match span {
            Span::Element(text) => format!(
                "{:<8} {}",
                span.kind(),
                format!("{text:?}").if_supports_color(Stream::Stdout, |t| t.bold())
            ),
            Span::Literal(text) => format!(
                "{:<8} {}",
                span.kind(),
                format!("{text:?}").if_supports_color(Stream::Stdout, |t| t.dimmed())
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_error(json: bool, e: &FormatError) {
    if json {
        let output = serde_json::json!({
            "error": e.to_string()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        eprintln!("Format error: {}", e);
    }
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let store = match pattern_store(&args) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(e.exit_code());
        }
    };

    let format = match build_format(&args, store) {
        Ok(format) => format,
        Err(e) => {
            report_error(args.json, &e);
            return Ok(exitcode::USAGE);
        }
    };

    match format_items(&format, &args.items, args.parts) {
        Ok(output) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else if let Some(parts) = &output.parts {
                println!("{}", render_parts(parts));
            } else {
                println!("{}", output.result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            report_error(args.json, &e);
            Ok(exitcode::DATAERR)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn args(items: &[&str]) -> FormatArgs {
        FormatArgs {
            items: items.iter().map(ToString::to_string).collect(),
            locale: "en".to_string(),
            list_type: ListType::Conjunction,
            style: None,
            patterns: None,
            parts: false,
            json: false,
        }
    }

    #[test]
    fn formats_with_builtin_english() {
        let args = args(&["A", "B", "C"]);
        let format = build_format(&args, pattern_store(&args).unwrap()).unwrap();
        let output = format_items(&format, &args.items, false).unwrap();
        assert_eq!(output.result, "A, B, and C");
        assert!(output.parts.is_none());
    }

    #[test]
    fn regional_locale_falls_back_to_language() {
        let mut args = args(&["A", "B"]);
        args.locale = "en-AU".to_string();
        args.list_type = ListType::Disjunction;
        let format = build_format(&args, pattern_store(&args).unwrap()).unwrap();
        assert_eq!(format.resolved_options().locale, "en-AU");
        assert_eq!(format.format(&args.items), "A or B");
    }

    #[test]
    fn pattern_file_adds_locales() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "es": { "standard": { "two": "{0} y {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} y {1}" } } }"#,
        )
        .unwrap();
        let mut args = args(&["uno", "dos", "tres"]);
        args.locale = "es".to_string();
        args.patterns = Some(file.path().to_path_buf());
        let format = build_format(&args, pattern_store(&args).unwrap()).unwrap();
        let output = format_items(&format, &args.items, true).unwrap();
        assert_eq!(output.result, "uno, dos y tres");
        assert_eq!(output.parts.unwrap().len(), 5);
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let mut args = args(&["A"]);
        args.locale = "fr".to_string();
        let err = build_format(&args, pattern_store(&args).unwrap()).unwrap_err();
        assert!(matches!(err, FormatError::MissingPatterns { .. }));
    }

    #[test]
    fn json_output_includes_resolved_options() {
        let mut args = args(&["5 lb", "12 oz"]);
        args.list_type = ListType::Unit;
        args.style = Some(Style::Narrow);
        let format = build_format(&args, pattern_store(&args).unwrap()).unwrap();
        let output = format_items(&format, &args.items, true).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["result"], "5 lb 12 oz");
        assert_eq!(json["resolvedOptions"]["style"], "narrow");
        assert_eq!(json["parts"][1]["type"], "literal");
    }

    #[test]
    fn json_without_parts_skips_span_extraction() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "xx": { "standard": { "two": "{1} then {0}", "start": "{1}, {0}", "middle": "{1}, {0}", "end": "{1}, then {0}" } } }"#,
        )
        .unwrap();
        let mut args = args(&["A", "B"]);
        args.locale = "xx".to_string();
        args.patterns = Some(file.path().to_path_buf());
        args.json = true;
        let format = build_format(&args, pattern_store(&args).unwrap()).unwrap();

        let output = format_items(&format, &args.items, args.parts).unwrap();
        assert_eq!(output.result, "B then A");
        let json = serde_json::to_value(&output).unwrap();
        assert!(json.get("parts").is_none());

        let err = format_items(&format, &args.items, true).unwrap_err();
        assert!(matches!(err, FormatError::MalformedJoinResult { .. }));
    }

    #[test]
    fn parts_render_one_per_line() {
        owo_colors::set_override(false);
        let rendered = render_parts(&[
            Span::Element("A".into()),
            Span::Literal(" or ".into()),
        ]);
        assert_eq!(rendered, "element  \"A\"\nliteral  \" or \"");
    }
}
