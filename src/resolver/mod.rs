//! Resolution of UniProt accessions to KEGG pathways.
//!
//! Each accession goes through three hops against the KEGG REST API:
//!
//! 1. `conv/genes`: UniProt accession to KEGG gene (first match),
//! 2. `link/ko`: KEGG gene to orthology group (first match),
//! 3. `link/pathway`: orthology group to reference pathways (all matches).
//!
//! A hop that fails, either because the request failed or because KEGG
//! has no link for the token, ends the chain for that accession without
//! an error: the record will simply not be annotated.
//!
//! This module provides two resolvers, one performing every request in
//! the main thread, and another one (with the `threading` feature)
//! spreading the accessions over a pool of worker threads. Both yield the
//! resolutions in input order.

#[cfg(feature = "threading")]
mod threaded;

use crate::common::ShortString;
use crate::error::Result;
use crate::kegg::response;
use crate::kegg::Endpoint;
use crate::kegg::Lookup;
use crate::kegg::PathwayCatalog;

#[cfg(feature = "threading")]
pub use self::threaded::ThreadedResolver;

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
/// An orthology group reached from an accession, with its pathways.
pub struct Orthology {
    pub id: ShortString,
    pub pathways: Vec<ShortString>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The outcome of the resolution chain for a single record.
pub struct Resolution {
    /// The accession of the record, `None` if it was filtered out.
    pub identifier: Option<ShortString>,
    pub gene: Option<ShortString>,
    pub orthology: Option<Orthology>,
}

impl Resolution {
    /// Get the pathways reached by this resolution, if any.
    pub fn pathways(&self) -> &[ShortString] {
        self.orthology
            .as_ref()
            .map(|o| o.pathways.as_slice())
            .unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------

/// A trait for types that resolve a batch of accessions.
pub trait Resolve {
    /// Resolve every accession, preserving the input order.
    fn resolve_all(&self, identifiers: Vec<Option<ShortString>>) -> Result<Vec<Resolution>>;

    /// Retrieve the catalog of pathway titles.
    fn fetch_catalog(&self) -> Result<PathwayCatalog>;
}

// ---------------------------------------------------------------------------

/// A resolver performing every request sequentially.
#[derive(Debug, Clone)]
pub struct Resolver<L: Lookup> {
    lookup: L,
}

impl<L: Lookup> Resolver<L> {
    /// Create a new `Resolver` sending requests to `lookup`.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Get a reference to the underlying lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Perform a single hop, turning any failure into a missing response.
    fn hop(&self, endpoint: &Endpoint) -> Option<String> {
        match self.lookup.fetch(endpoint) {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!("request to `{}` failed: {}", endpoint, e);
                None
            }
        }
    }

    /// Get the KEGG gene of a UniProt accession.
    pub fn resolve_gene(&self, identifier: &str) -> Option<ShortString> {
        let text = self.hop(&Endpoint::ConvGenes(identifier))?;
        let gene = response::first_match(&text).map(ShortString::from);
        log::debug!("{} -> {:?}", identifier, gene);
        gene
    }

    /// Get the orthology group of a KEGG gene.
    pub fn resolve_orthology(&self, gene: &str) -> Option<ShortString> {
        let text = self.hop(&Endpoint::LinkOrthology(gene))?;
        let orthology = response::first_match(&text).map(ShortString::from);
        log::debug!("{} -> {:?}", gene, orthology);
        orthology
    }

    /// Get the reference pathways of an orthology group.
    pub fn resolve_pathways(&self, orthology: &str) -> Vec<ShortString> {
        let pathways = match self.hop(&Endpoint::LinkPathway(orthology)) {
            Some(text) => response::all_matches(&text)
                .into_iter()
                .map(ShortString::from)
                .collect(),
            None => Vec::new(),
        };
        log::debug!("{} -> {:?}", orthology, pathways);
        pathways
    }

    /// Run the whole chain for a single accession.
    ///
    /// No request is sent for a filtered record (`None`).
    pub fn resolve(&self, identifier: Option<&str>) -> Resolution {
        let identifier = match identifier {
            Some(id) => id,
            None => return Resolution::default(),
        };
        let gene = self.resolve_gene(identifier);
        let orthology = gene
            .as_ref()
            .and_then(|g| self.resolve_orthology(g))
            .map(|id| {
                let pathways = self.resolve_pathways(&id);
                Orthology { id, pathways }
            });
        Resolution {
            identifier: Some(ShortString::from(identifier)),
            gene,
            orthology,
        }
    }
}

impl<L: Lookup> Resolve for Resolver<L> {
    fn resolve_all(&self, identifiers: Vec<Option<ShortString>>) -> Result<Vec<Resolution>> {
        Ok(identifiers
            .iter()
            .map(|id| self.resolve(id.as_deref()))
            .collect())
    }

    /// Retrieve the catalog with a single `list/pathway/ko` request.
    ///
    /// Like the other hops, a failed or empty listing yields an empty
    /// catalog; describing a resolved pathway will then fail instead.
    fn fetch_catalog(&self) -> Result<PathwayCatalog> {
        let catalog = self
            .hop(&Endpoint::ListPathways)
            .map(|text| PathwayCatalog::from_response(&text))
            .unwrap_or_default();
        if catalog.is_empty() {
            log::warn!("pathway catalog is empty");
        } else {
            log::info!("loaded {} pathways from the catalog", catalog.len());
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::kegg::testing::CannedLookup;

    fn ss(s: &str) -> ShortString {
        ShortString::from(s)
    }

    #[test]
    fn resolve_gene() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        assert_eq!(resolver.resolve_gene("Q5ZL74"), Some(ss("gga:422297")));
    }

    #[test]
    fn resolve_orthology() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        assert_eq!(resolver.resolve_orthology("gga:422297"), Some(ss("ko:K08515")));
    }

    #[test]
    fn resolve_pathways() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        assert_eq!(resolver.resolve_pathways("ko:K08515"), vec![ss("path:ko04130")]);
    }

    #[test]
    fn resolve_chain() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        let resolution = resolver.resolve(Some("Q5ZL74"));
        assert_eq!(resolution.identifier, Some(ss("Q5ZL74")));
        assert_eq!(resolution.gene, Some(ss("gga:422297")));
        assert_eq!(
            resolution.orthology,
            Some(Orthology {
                id: ss("ko:K08515"),
                pathways: vec![ss("path:ko04130")],
            })
        );
        assert_eq!(resolver.lookup().requests(), 3);
    }

    #[test]
    fn resolve_idempotent() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        assert_eq!(resolver.resolve(Some("Q5ZL74")), resolver.resolve(Some("Q5ZL74")));
        assert_eq!(resolver.resolve_gene("Q5ZL74"), resolver.resolve_gene("Q5ZL74"));
        assert_eq!(
            resolver.resolve_pathways("ko:K08515"),
            resolver.resolve_pathways("ko:K08515")
        );
    }

    #[test]
    fn resolve_absent_sends_nothing() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        assert_eq!(resolver.resolve(None), Resolution::default());
        assert_eq!(resolver.lookup().requests(), 0);
    }

    #[test]
    fn resolve_failed_gene() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        let resolution = resolver.resolve(Some("P00000"));
        assert_eq!(resolution.identifier, Some(ss("P00000")));
        assert_eq!(resolution.gene, None);
        assert_eq!(resolution.orthology, None);
        assert!(resolution.pathways().is_empty());
        assert_eq!(resolver.lookup().requests(), 1);
    }

    #[test]
    fn resolve_empty_response() {
        let lookup = CannedLookup::new()
            .with(Endpoint::ConvGenes("P11111"), "up:P11111\thsa:7\n")
            .with(Endpoint::LinkOrthology("hsa:7"), "\n");
        let resolver = Resolver::new(lookup);
        let resolution = resolver.resolve(Some("P11111"));
        assert_eq!(resolution.gene, Some(ss("hsa:7")));
        assert_eq!(resolution.orthology, None);
        assert_eq!(resolver.lookup().requests(), 2);
    }

    #[test]
    fn resolve_orthology_without_pathways() {
        let lookup = CannedLookup::new()
            .with(Endpoint::ConvGenes("P22222"), "up:P22222\thsa:8\n")
            .with(Endpoint::LinkOrthology("hsa:8"), "hsa:8\tko:K00001\n");
        let resolver = Resolver::new(lookup);
        let resolution = resolver.resolve(Some("P22222"));
        assert_eq!(
            resolution.orthology,
            Some(Orthology {
                id: ss("ko:K00001"),
                pathways: Vec::new(),
            })
        );
    }

    #[test]
    fn resolve_all_preserves_order() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        let ids = vec![Some(ss("P00000")), None, Some(ss("Q5ZL74"))];
        let resolutions = resolver.resolve_all(ids).unwrap();
        assert_eq!(resolutions.len(), 3);
        assert!(resolutions[0].pathways().is_empty());
        assert_eq!(resolutions[1], Resolution::default());
        assert_eq!(resolutions[2].pathways(), &[ss("path:ko04130")]);
    }

    #[test]
    fn fetch_catalog() {
        let resolver = Resolver::new(CannedLookup::q5zl74());
        let catalog = resolver.fetch_catalog().unwrap();
        assert_eq!(
            catalog.get("path:ko04130"),
            Some("SNARE interactions in vesicular transport")
        );
        assert_eq!(resolver.lookup().requests(), 1);
    }

    #[test]
    fn fetch_catalog_failed() {
        let resolver = Resolver::new(CannedLookup::new());
        let catalog = resolver.fetch_catalog().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(resolver.lookup().requests(), 1);
    }

    #[test]
    fn fetch_catalog_empty() {
        let resolver = Resolver::new(CannedLookup::new().with(Endpoint::ListPathways, ""));
        let catalog = resolver.fetch_catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
