//! Reading list pattern data files.
//!
//! Pattern files are JSON objects mapping locale to pattern key to the four
//! pattern strings:
//!
//! ```json
//! { "es": { "standard": { "two": "{0} y {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} y {1}" } } }
//! ```

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};

use conjoin::{PatternStore, RawPatternTable};
use thiserror::Error;

/// Locale -> key name -> pattern strings, before validation.
pub type RawPatternFile = BTreeMap<String, BTreeMap<String, RawPatternTable>>;

/// Errors that occur while reading a pattern file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl DataError {
    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DataError::Io { .. } => exitcode::NOINPUT,
            DataError::Parse { .. } => exitcode::DATAERR,
        }
    }
}

fn read(path: &Path) -> Result<String, DataError> {
    read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a pattern file without validating keys or patterns.
pub fn read_raw(path: &Path) -> Result<RawPatternFile, DataError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read and validate a pattern file into a store.
pub fn load_store(path: &Path) -> Result<PatternStore, DataError> {
    let content = read(path)?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use conjoin::PatternKey;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_store_reads_valid_file() {
        let file = write_file(
            r#"{ "es": { "or": { "two": "{0} o {1}", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} o {1}" } } }"#,
        );
        let store = load_store(file.path()).unwrap();
        assert_eq!(store.keys("es"), vec![PatternKey::Or]);
    }

    #[test]
    fn load_store_rejects_malformed_pattern() {
        let file = write_file(
            r#"{ "es": { "or": { "two": "{0} o", "start": "{0}, {1}", "middle": "{0}, {1}", "end": "{0} o {1}" } } }"#,
        );
        let err = load_store(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
        assert!(err.to_string().contains("malformed 'two' pattern"), "{err}");
    }

    #[test]
    fn missing_file_is_noinput() {
        let err = load_store(Path::new("/nonexistent/patterns.json")).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn read_raw_keeps_unknown_keys() {
        let file = write_file(
            r#"{ "es": { "sometimes": { "two": "{0}", "start": "", "middle": "", "end": "" } } }"#,
        );
        let raw = read_raw(file.path()).unwrap();
        assert!(raw["es"].contains_key("sometimes"));
    }
}
