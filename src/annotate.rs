//! Annotation of a BLAST report with the resolved KEGG pathways.

use std::io::BufRead;
use std::io::Write;

use crate::blast::AlignmentRecord;
use crate::blast::SUBJECT_FIELD;
use crate::common::ShortString;
use crate::error::Error;
use crate::error::Result;
use crate::index::Indices;

/// Counters collected while annotating a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// The number of records read from the report.
    pub records: usize,
    /// The number of records with at least one pathway.
    pub annotated: usize,
    /// The number of lines written.
    pub lines: usize,
}

/// Writes report lines extended with their orthology and pathway.
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'i> {
    indices: &'i Indices,
}

impl<'i> Annotator<'i> {
    /// Create a new `Annotator` reading from the given tables.
    pub fn new(indices: &'i Indices) -> Self {
        Self { indices }
    }

    fn pathways(&self, record: &AlignmentRecord) -> &'i [ShortString] {
        record
            .field(SUBJECT_FIELD)
            .and_then(|id| self.indices.pathways(id.trim()))
            .unwrap_or(&[])
    }

    /// Annotate a single line, writing it to `writer`.
    ///
    /// A line whose accession reaches `k` pathways is written `k` times,
    /// each copy followed by the orthology group, the pathway and its title.
    /// Any other line is written unchanged. Returns the number of pathways
    /// the line was annotated with.
    pub fn annotate_line<W: Write>(&self, line: &str, mut writer: W) -> Result<usize> {
        let record = AlignmentRecord::new(line);
        let pathways = self.pathways(&record);

        if pathways.is_empty() {
            writer.write_all(line.as_bytes())?;
            return Ok(0);
        }

        for pathway in pathways {
            let (orthology, description) = self
                .indices
                .annotation(pathway)
                .ok_or_else(|| Error::MissingPathway(pathway.to_string()))?;
            writeln!(
                writer,
                "{}\t{}\t{}\t{}",
                record.line(),
                orthology,
                pathway,
                description
            )?;
        }
        Ok(pathways.len())
    }

    /// Annotate every line of `reader`, appending them to `writer`.
    pub fn annotate<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let n = self
                .annotate_line(&line, &mut writer)
                .map_err(|e| e.at_line(summary.records + 1))?;
            summary.records += 1;
            summary.lines += n.max(1);
            if n > 0 {
                summary.annotated += 1;
            }
        }
        writer.flush()?;
        log::info!(
            "annotated {} of {} records ({} lines written)",
            summary.annotated,
            summary.records,
            summary.lines
        );
        Ok(summary)
    }
}
