//! Client for the [KEGG REST API](https://www.kegg.jp/kegg/rest/keggapi.html).
//!
//! Only the four read-only operations used to walk from a UniProt accession
//! to a KEGG pathway are exposed, through the [`Endpoint`] enum. Responses
//! are returned as plain text and interpreted by the [`response`] module.

pub mod catalog;
pub mod response;

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::time::Duration;

use url::Url;

use crate::error::Error;
use crate::error::Result;

#[doc(inline)]
pub use self::catalog::PathwayCatalog;

/// The default location of the KEGG REST API.
pub const DEFAULT_BASE_URL: &str = "https://rest.kegg.jp/";

/// The default timeout of a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------

/// A KEGG REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// Convert a UniProt accession to KEGG genes (`conv/genes/uniprot:<id>`).
    ConvGenes(&'a str),
    /// Link a KEGG gene to orthology groups (`link/ko/<gene>`).
    LinkOrthology(&'a str),
    /// Link an orthology group to pathways (`link/pathway/<ko>`).
    LinkPathway(&'a str),
    /// List every reference pathway with its title (`list/pathway/ko`).
    ListPathways,
}

impl<'a> Endpoint<'a> {
    /// Get the path segments of the endpoint, relative to the API root.
    pub fn segments(&self) -> [String; 3] {
        match self {
            Endpoint::ConvGenes(id) => [
                String::from("conv"),
                String::from("genes"),
                format!("uniprot:{}", id),
            ],
            Endpoint::LinkOrthology(gene) => [
                String::from("link"),
                String::from("ko"),
                gene.to_string(),
            ],
            Endpoint::LinkPathway(ko) => [
                String::from("link"),
                String::from("pathway"),
                ko.to_string(),
            ],
            Endpoint::ListPathways => [
                String::from("list"),
                String::from("pathway"),
                String::from("ko"),
            ],
        }
    }
}

impl<'a> Display for Endpoint<'a> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let [a, b, c] = self.segments();
        write!(f, "{}/{}/{}", a, b, c)
    }
}

// ---------------------------------------------------------------------------

/// A source of KEGG REST responses.
pub trait Lookup {
    /// Retrieve the raw text returned by `endpoint`.
    fn fetch(&self, endpoint: &Endpoint) -> Result<String>;
}

impl<'a, L: Lookup + ?Sized> Lookup for &'a L {
    fn fetch(&self, endpoint: &Endpoint) -> Result<String> {
        (**self).fetch(endpoint)
    }
}

// ---------------------------------------------------------------------------

/// A blocking HTTP client for the KEGG REST API.
#[derive(Debug, Clone)]
pub struct Kegg {
    base: Url,
    agent: ureq::Agent,
}

impl Kegg {
    /// Create a new client for the public KEGG API.
    pub fn new() -> Self {
        // the default URL is a constant known to be valid
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
            .unwrap_or_else(|e| unreachable!("invalid default URL: {}", e))
    }

    /// Create a new client for a KEGG API mirror at `base`.
    ///
    /// The `timeout` bounds every request, from connection to the end of
    /// the response body.
    pub fn with_base_url(base: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::CannotBeABase(base.into()));
        }
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Ok(Self { base, agent })
    }

    /// Get the full URL of `endpoint`.
    ///
    /// Tokens are inserted as single path segments, so characters such as
    /// `/` or `?` in an accession are percent-encoded.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::CannotBeABase(self.base.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments().iter());
        Ok(url)
    }
}

impl Default for Kegg {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup for Kegg {
    fn fetch(&self, endpoint: &Endpoint) -> Result<String> {
        let url = self.url(endpoint)?;
        log::debug!("GET {}", url);
        let response = self.agent.request_url("GET", &url).call()?;
        response.into_string().map_err(Error::from)
    }
}
