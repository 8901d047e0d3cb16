#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Error as IoError;
use std::io::ErrorKind;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use blast_kegg::error::Error;
use blast_kegg::error::Result;
use blast_kegg::kegg::Endpoint;
use blast_kegg::kegg::Lookup;

pub const REPORT: &str = "tests/data/align_predicted.txt";

/// A lookup replaying KEGG responses recorded for `REPORT`.
#[derive(Debug, Default)]
pub struct Recorded {
    responses: HashMap<String, &'static str>,
    requests: AtomicUsize,
}

impl Recorded {
    pub fn new() -> Self {
        let mut responses = HashMap::new();
        let mut add = |endpoint: Endpoint, text: &'static str| {
            responses.insert(endpoint.to_string(), text);
        };
        add(Endpoint::ConvGenes("Q5ZL74"), "up:Q5ZL74\tgga:422297\n");
        add(Endpoint::LinkOrthology("gga:422297"), "gga:422297\tko:K08515\n");
        add(
            Endpoint::LinkPathway("ko:K08515"),
            "ko:K08515\tpath:map04130\nko:K08515\tpath:ko04130\n",
        );
        add(Endpoint::ConvGenes("P62258"), "up:P62258\thsa:7531\n");
        add(Endpoint::LinkOrthology("hsa:7531"), "hsa:7531\tko:K06630\n");
        add(
            Endpoint::LinkPathway("ko:K06630"),
            concat!(
                "ko:K06630\tpath:map04110\n",
                "ko:K06630\tpath:ko04110\n",
                "ko:K06630\tpath:map04114\n",
                "ko:K06630\tpath:ko04114\n",
                "ko:K06630\tpath:map04151\n",
                "ko:K06630\tpath:ko04151\n",
            ),
        );
        add(
            Endpoint::ListPathways,
            concat!(
                "path:ko01100\tMetabolic pathways\n",
                "path:ko04110\tCell cycle\n",
                "path:ko04114\tOocyte meiosis\n",
                "path:ko04130\tSNARE interactions in vesicular transport\n",
                "path:ko04151\tPI3K-Akt signaling pathway\n",
            ),
        );
        Self {
            responses,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Lookup for Recorded {
    fn fetch(&self, endpoint: &Endpoint) -> Result<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(&endpoint.to_string())
            .map(|text| text.to_string())
            .ok_or_else(|| Error::from(IoError::new(ErrorKind::TimedOut, "timed out")))
    }
}
