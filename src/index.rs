//! Lookup tables built from the resolutions of a whole report.

use crate::common::HashMap;
use crate::common::ShortString;
use crate::error::Error;
use crate::error::Result;
use crate::kegg::PathwayCatalog;
use crate::resolver::Resolution;

/// The tables used to annotate a report.
///
/// Every pathway listed in `identifier_to_pathways` is a key of both
/// `pathway_to_orthology` and `pathway_to_description`.
#[derive(Debug, Clone, Default)]
pub struct Indices {
    /// The pathways reached from each accession, in response order.
    pub identifier_to_pathways: HashMap<ShortString, Vec<ShortString>>,
    /// The orthology group each pathway was reached through.
    pub pathway_to_orthology: HashMap<ShortString, ShortString>,
    /// The title of each pathway.
    pub pathway_to_description: HashMap<ShortString, String>,
}

impl Indices {
    /// Get the pathways reached from `identifier`, if it was resolved.
    pub fn pathways(&self, identifier: &str) -> Option<&[ShortString]> {
        self.identifier_to_pathways
            .get(identifier)
            .map(Vec::as_slice)
    }

    /// Get the orthology group and title of `pathway`.
    pub fn annotation(&self, pathway: &str) -> Option<(&str, &str)> {
        let orthology = self.pathway_to_orthology.get(pathway)?;
        let description = self.pathway_to_description.get(pathway)?;
        Some((orthology.as_str(), description.as_str()))
    }
}

/// Build the annotation tables from the resolutions of every record.
///
/// When an accession appears on several records, the resolution of the
/// last one is kept. Filtered records (without an accession) are not
/// indexed. Fails if a pathway is missing from the `catalog`.
pub fn build_indices(catalog: &PathwayCatalog, resolutions: &[Resolution]) -> Result<Indices> {
    let mut indices = Indices::default();

    for resolution in resolutions {
        let identifier = match &resolution.identifier {
            Some(id) => id,
            None => continue,
        };
        if let Some(orthology) = &resolution.orthology {
            for pathway in &orthology.pathways {
                let description = catalog
                    .get(pathway)
                    .ok_or_else(|| Error::MissingPathway(pathway.to_string()))?;
                indices
                    .pathway_to_description
                    .insert(pathway.clone(), description.to_string());
                indices
                    .pathway_to_orthology
                    .insert(pathway.clone(), orthology.id.clone());
            }
        }
        indices
            .identifier_to_pathways
            .insert(identifier.clone(), resolution.pathways().to_vec());
    }

    log::info!(
        "indexed {} identifiers and {} pathways",
        indices.identifier_to_pathways.len(),
        indices.pathway_to_orthology.len()
    );
    Ok(indices)
}
