//! *Annotate BLAST tabular reports with [KEGG] orthology and pathways.*
//!
//! [KEGG]: https://www.kegg.jp/
//!
//! # 🔌 Usage
//!
//! The `blast_kegg::annotate` function reads a BLAST report in tabular
//! format, resolves the UniProt accession of every significant hit to
//! the KEGG pathways of its orthology group, and appends the report to
//! the output file with three extra columns per pathway: the orthology
//! group, the pathway identifier, and the pathway title.
//!
//! ```rust,no_run
//! let config = blast_kegg::Config {
//!     input: "alignPredicted.txt".into(),
//!     output: "alignPredicted_kegg.txt".into(),
//!     ..Default::default()
//! };
//! let summary = blast_kegg::annotate(&config).unwrap();
//! println!("{} records annotated", summary.annotated);
//! ```
//!
//! Each accession is resolved with three requests to the KEGG REST API
//! (`conv/genes`, `link/ko` and `link/pathway`), and the pathway titles
//! are fetched once for the whole report with `list/pathway/ko`. A request
//! that fails or times out leaves the corresponding record unannotated.
//!
//! The stages of the pipeline are exposed separately, and the remote
//! service can be replaced by any [`Lookup`] implementor:
//!
//! ```rust
//! use blast_kegg::kegg::{Endpoint, Lookup};
//!
//! struct Offline;
//!
//! impl Lookup for Offline {
//!     fn fetch(&self, endpoint: &Endpoint) -> blast_kegg::error::Result<String> {
//!         Ok(match endpoint {
//!             Endpoint::ListPathways => "path:ko04130\tSNARE interactions\n".into(),
//!             _ => String::new(),
//!         })
//!     }
//! }
//!
//! let pipeline = blast_kegg::Pipeline::new(blast_kegg::Resolver::new(Offline), 1e-5);
//! let report = "q\tQ5ZL74\t1\t1\t1\t1\t1\t1e-30\tVAMP7\n";
//! let mut out = Vec::new();
//! pipeline.run(std::io::Cursor::new(report), &mut out).unwrap();
//! assert_eq!(out, report.as_bytes());
//! ```
//!
//! # 📝 Features
//!
//! ## `smartstring`
//!
//! _**enabled** by default_.
//!
//! Store accessions and KEGG identifiers as [`smartstring`] strings,
//! which avoid a heap allocation for short values.
//!
//! ## `threading`
//!
//! _**disabled** by default_.
//!
//! Compile the [`ThreadedResolver`], which resolves several accessions in
//! parallel while preserving the order of the report. The public KEGG
//! server is shared, so keep the number of threads low.
//!
//! [`Lookup`]: ./kegg/trait.Lookup.html
//! [`ThreadedResolver`]: ./resolver/struct.ThreadedResolver.html
//! [`smartstring`]: https://docs.rs/smartstring

#![allow(unused_imports)]

#[cfg(feature = "threading")]
extern crate crossbeam_channel;
extern crate fnv;
#[macro_use]
#[cfg(feature = "threading")]
extern crate lazy_static;
extern crate log;
extern crate memchr;
#[cfg(feature = "threading")]
extern crate num_cpus;
#[cfg(feature = "smartstring")]
extern crate smartstring;
extern crate thiserror;
extern crate ureq;
extern crate url;

pub mod annotate;
pub mod blast;
pub mod common;
pub mod config;
pub mod error;
pub mod index;
pub mod kegg;
pub mod pipeline;
pub mod resolver;

#[doc(inline)]
pub use self::config::Config;
#[doc(inline)]
pub use self::pipeline::Pipeline;
#[doc(inline)]
pub use self::resolver::Resolver;

use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufReader;
use std::io::BufWriter;

use self::annotate::Summary;
use self::error::Error;
use self::error::Result;
use self::kegg::Kegg;
use self::resolver::Resolve;

/// Annotate the report at `config.input`, appending it to `config.output`.
///
/// The output file is created if needed, but never truncated: running
/// twice on the same output duplicates the report.
pub fn annotate(config: &Config) -> Result<Summary> {
    let kegg = Kegg::with_base_url(&config.base_url, config.timeout)?;
    let resolver = Resolver::new(kegg);

    #[cfg(feature = "threading")]
    {
        if let Some(threads) = config.threads {
            let threaded = self::resolver::ThreadedResolver::with_threads(&resolver, threads);
            log::info!("resolving with {} threads", threaded.threads());
            return run(Pipeline::new(threaded, config.threshold), config);
        }
    }

    run(Pipeline::new(resolver, config.threshold), config)
}

fn run<R: Resolve>(pipeline: Pipeline<R>, config: &Config) -> Result<Summary> {
    let input = File::open(&config.input)
        .map(BufReader::new)
        .map_err(|e| Error::File(config.input.clone(), e))?;
    let output = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.output)
        .map(BufWriter::new)
        .map_err(|e| Error::File(config.output.clone(), e))?;
    pipeline.run(input, output)
}
