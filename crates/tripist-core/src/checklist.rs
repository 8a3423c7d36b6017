//! Loader for tabular checklist templates.
//!
//! Each record holds three fields:
//!
//! ```text
//! template,indent,due expression
//! Pack for DAYS,1,2 days before start
//! ```
//!
//! Records are tab-separated when the first non-blank line contains a tab
//! and comma-separated otherwise. Fields may be double-quoted to embed
//! delimiters or line breaks; a doubled quote inside a quoted field stands
//! for one quote. Malformed records are collected and reported together,
//! numbered by the line they start on, while every valid record is still
//! returned.

use std::{fs, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::{
    error::{ChecklistLoadError, LineError, Result, TripistError},
    models::{ChecklistItem, MAX_INDENT, MIN_INDENT},
};

const FIELDS_PER_RECORD: usize = 3;

/// The outcome of loading a checklist: every valid item plus, when some
/// lines were malformed, an error describing each of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedChecklist {
    pub items: Vec<ChecklistItem>,
    pub error: Option<ChecklistLoadError>,
}

impl LoadedChecklist {
    /// Returns the items, or the aggregated error if any line was malformed.
    pub fn into_result(self) -> Result<Vec<ChecklistItem>> {
        match self.error {
            Some(error) => Err(error.into()),
            None => Ok(self.items),
        }
    }
}

/// Reads and parses a checklist file.
///
/// # Errors
///
/// Returns [`TripistError::FileSystem`] when the file cannot be read.
/// Malformed lines are not an error here; they are reported through
/// [`LoadedChecklist::error`].
pub fn load_checklist<P: AsRef<Path>>(path: P) -> Result<LoadedChecklist> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| TripistError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    let loaded = parse_checklist(&input);
    debug!(
        "Loaded {} checklist items from {}",
        loaded.items.len(),
        path.display()
    );
    if let Some(error) = &loaded.error {
        warn!("{}: {error}", path.display());
    }
    Ok(loaded)
}

/// Parses checklist records from text.
///
/// ```rust
/// use tripist_core::checklist::parse_checklist;
///
/// let loaded = parse_checklist("foo,1,1 day before start\nnot-enough-fields\nbar,3,2 hours after end");
/// assert_eq!(loaded.items.len(), 2);
/// assert!(loaded.error.is_some());
/// ```
pub fn parse_checklist(input: &str) -> LoadedChecklist {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(detect_delimiter(input))
        .from_reader(input.as_bytes());

    let mut items = Vec::new();
    let mut errors = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                if record.len() == 1 && record[0].is_empty() {
                    continue;
                }
                let line = record.position().map_or(0, |p| p.line() as usize);
                match parse_record(&record) {
                    Ok(item) => items.push(item),
                    Err(reason) => errors.push(LineError { line, reason }),
                }
            }
            Err(e) => errors.push(LineError {
                line: e.position().map_or(0, |p| p.line() as usize),
                reason: e.to_string(),
            }),
        }
    }

    let error = (!errors.is_empty()).then_some(ChecklistLoadError { lines: errors });
    LoadedChecklist { items, error }
}

fn detect_delimiter(input: &str) -> u8 {
    let tabbed = input
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.contains('\t'));
    if tabbed {
        b'\t'
    } else {
        b','
    }
}

fn parse_record(record: &StringRecord) -> std::result::Result<ChecklistItem, String> {
    if record.len() < FIELDS_PER_RECORD {
        return Err("not enough fields".to_string());
    }
    if record.len() > FIELDS_PER_RECORD {
        return Err(format!(
            "too many fields ({} found, {FIELDS_PER_RECORD} expected)",
            record.len()
        ));
    }

    let indent: i64 = record[1]
        .parse()
        .map_err(|e| format!("invalid indent {:?}: {e}", &record[1]))?;
    let indent = u8::try_from(indent)
        .ok()
        .filter(|i| (MIN_INDENT..=MAX_INDENT).contains(i))
        .ok_or_else(|| format!("indent out of range {indent} [{MIN_INDENT}-{MAX_INDENT}]"))?;

    Ok(ChecklistItem {
        template: record[0].to_string(),
        indent,
        due_expression: record[2].to_string(),
    })
}
