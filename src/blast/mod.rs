//! Records of a BLAST tabular report.
//!
//! The reports consumed here are tab-separated, one alignment per line,
//! with the subject accession in the second column and the e-value in the
//! eighth column. Any other column is carried along untouched.

use std::str::FromStr;

use crate::common::ShortString;
use crate::error::Error;
use crate::error::Result;

/// The column holding the subject (UniProt) accession.
pub const SUBJECT_FIELD: usize = 1;

/// The column holding the e-value of the alignment.
pub const EVALUE_FIELD: usize = 7;

// ---------------------------------------------------------------------------

/// A single line of a BLAST tabular report.
///
/// The line is borrowed; only the positions of the tab separators are
/// computed when the record is created.
#[derive(Debug, Clone)]
pub struct AlignmentRecord<'a> {
    line: &'a str,
    tabs: Vec<usize>,
}

impl<'a> AlignmentRecord<'a> {
    /// Split a report line into fields, ignoring its line terminator.
    pub fn new(line: &'a str) -> Self {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let tabs = memchr::memchr_iter(b'\t', line.as_bytes()).collect();
        Self { line, tabs }
    }

    /// Get the line this record was created from, without terminator.
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Get the number of fields in the record.
    pub fn len(&self) -> usize {
        self.tabs.len() + 1
    }

    /// Check whether the record was created from an empty line.
    ///
    /// An empty line still has a single empty field, so `len` is `1`.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Get the field at index `i`, if the record has that many fields.
    pub fn field(&self, i: usize) -> Option<&'a str> {
        if i > self.tabs.len() {
            return None;
        }
        let start = if i == 0 { 0 } else { self.tabs[i - 1] + 1 };
        let end = self.tabs.get(i).copied().unwrap_or_else(|| self.line.len());
        Some(&self.line[start..end])
    }

    /// Get the subject accession, trimmed of surrounding whitespace.
    pub fn subject(&self) -> Result<&'a str> {
        self.field(SUBJECT_FIELD)
            .map(str::trim)
            .ok_or_else(|| Error::MissingField(SUBJECT_FIELD, self.len()))
    }

    /// Get the e-value of the alignment.
    pub fn evalue(&self) -> Result<f64> {
        let field = self
            .field(EVALUE_FIELD)
            .ok_or_else(|| Error::MissingField(EVALUE_FIELD, self.len()))?;
        f64::from_str(field.trim()).map_err(Error::from)
    }

    /// Get the subject accession if the e-value is below `threshold`.
    pub fn identifier(&self, threshold: f64) -> Result<Option<ShortString>> {
        let evalue = self.evalue()?;
        let subject = self.subject()?;
        if evalue < threshold {
            Ok(Some(ShortString::from(subject)))
        } else {
            Ok(None)
        }
    }
}

/// Extract the subject accession of `line` if its e-value is below `threshold`.
///
/// Returns `None` for alignments that are not significant enough, so that
/// an empty accession is never confused with a filtered one.
pub fn extract_identifier(line: &str, threshold: f64) -> Result<Option<ShortString>> {
    AlignmentRecord::new(line).identifier(threshold)
}
