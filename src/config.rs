//! Run configuration.

#[cfg(feature = "threading")]
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::kegg::DEFAULT_BASE_URL;
use crate::kegg::DEFAULT_TIMEOUT;

/// The default e-value threshold.
pub const DEFAULT_THRESHOLD: f64 = 1e-5;

/// The default path of the BLAST report to annotate.
pub const DEFAULT_INPUT: &str = "./data/alignPredicted.txt";

/// The default path of the annotated report.
pub const DEFAULT_OUTPUT: &str = "./data/alignPredicted_new.txt";

/// The settings of a single annotation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Alignments with an e-value at or above this are not annotated.
    pub threshold: f64,
    /// The BLAST tabular report to annotate.
    pub input: PathBuf,
    /// The file annotated lines are appended to.
    pub output: PathBuf,
    /// The root of the KEGG REST API.
    pub base_url: String,
    /// The timeout of every request to the KEGG REST API.
    pub timeout: Duration,
    /// The number of worker threads; `None` to resolve sequentially.
    #[cfg(feature = "threading")]
    pub threads: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
            #[cfg(feature = "threading")]
            threads: None,
        }
    }
}
