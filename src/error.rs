//! Ubiquitous types for error management.

use std::io::Error as IoError;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;
use url::ParseError as ParseUrlError;

#[derive(Debug, Error)]
/// The main error type for the `blast_kegg` crate.
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] IoError),
    #[error("{}: {}", .0.display(), .1)]
    File(PathBuf, #[source] IoError),
    #[error("http error: {0}")]
    Http(#[source] Box<ureq::Error>),
    #[error("url error: {0}")]
    ParseUrl(#[from] ParseUrlError),
    #[error("base url `{0}` cannot hold path segments")]
    CannotBeABase(String),
    #[error("parser error: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("missing field {0} in alignment record ({1} fields found)")]
    MissingField(usize, usize),
    #[error("line {0}: {1}")]
    Line(usize, #[source] Box<Error>),
    #[error("pathway `{0}` is missing from the pathway catalog")]
    MissingPathway(String),

    #[cfg(feature = "threading")]
    #[error("unexpected threading channel disconnection")]
    DisconnectedChannel,
}

impl Error {
    /// Attach the 1-based number of the input line that caused `self`.
    pub fn at_line(self, line: usize) -> Self {
        Error::Line(line, Box::new(self))
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Error::Http(Box::new(e))
    }
}

/// The main result type for the `blast_kegg` crate.
pub type Result<T> = std::result::Result<T, Error>;
