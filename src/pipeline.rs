//! The two passes over a BLAST report.
//!
//! The first pass extracts the accession of every significant alignment
//! and resolves it to KEGG pathways; the second pass re-reads the report
//! from the start and writes the annotated lines. No line is written
//! before every record has been resolved, since an accession appearing
//! on several lines is annotated with its last resolution.

use std::io::BufRead;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;

use crate::annotate::Annotator;
use crate::annotate::Summary;
use crate::blast::extract_identifier;
use crate::common::ShortString;
use crate::error::Result;
use crate::index::build_indices;
use crate::index::Indices;
use crate::resolver::Resolve;

/// A BLAST report annotation pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline<R: Resolve> {
    resolver: R,
    threshold: f64,
}

impl<R: Resolve> Pipeline<R> {
    /// Create a new pipeline keeping alignments with an e-value below `threshold`.
    pub fn new(resolver: R, threshold: f64) -> Self {
        Self {
            resolver,
            threshold,
        }
    }

    /// Get a reference to the underlying resolver.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Extract the accession of every record of `reader`.
    ///
    /// Records at or above the threshold yield `None`. A malformed record
    /// is an error, tagged with its line number.
    pub fn identifiers<B: BufRead>(&self, reader: B) -> Result<Vec<Option<ShortString>>> {
        let mut identifiers = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let id = extract_identifier(&line, self.threshold).map_err(|e| e.at_line(i + 1))?;
            identifiers.push(id);
        }
        Ok(identifiers)
    }

    /// Run the first pass over `reader`, building the annotation tables.
    pub fn index<B: BufRead>(&self, reader: B) -> Result<Indices> {
        let catalog = self.resolver.fetch_catalog()?;

        let identifiers = self.identifiers(reader)?;
        log::info!(
            "kept {} of {} records below the e-value threshold {:e}",
            identifiers.iter().filter(|id| id.is_some()).count(),
            identifiers.len(),
            self.threshold,
        );

        let resolutions = self.resolver.resolve_all(identifiers)?;
        log::info!(
            "resolved {} records to at least one pathway",
            resolutions.iter().filter(|r| !r.pathways().is_empty()).count(),
        );

        build_indices(&catalog, &resolutions)
    }

    /// Run both passes, appending the annotated report to `output`.
    pub fn run<B: BufRead + Seek, W: Write>(&self, mut input: B, output: W) -> Result<Summary> {
        let indices = self.index(&mut input)?;
        input.seek(SeekFrom::Start(0))?;
        Annotator::new(&indices).annotate(input, output)
    }
}
