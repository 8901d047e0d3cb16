use std::num::NonZeroUsize;

use crate::common::ShortString;
use crate::error::Error;
use crate::error::Result;
use crate::kegg::Lookup;
use crate::kegg::PathwayCatalog;

use super::Resolution;
use super::Resolve;
use super::Resolver;

/// A resolver spreading accessions over a pool of worker threads.
///
/// Each worker runs the whole chain for one accession at a time, so at
/// most one request per worker is in flight. The catalog is still fetched
/// with a single request from the calling thread.
#[derive(Debug)]
pub struct ThreadedResolver<'r, L: Lookup> {
    resolver: &'r Resolver<L>,
    threads: usize,
}

impl<'r, L: Lookup + Sync> ThreadedResolver<'r, L> {
    /// Create a new `ThreadedResolver` using all available CPUs.
    ///
    /// This number of threads is extracted at runtime using the
    /// [`num_cpus::get`] function.
    ///
    /// [`num_cpus::get`]: https://docs.rs/num_cpus/1.12.0/num_cpus/fn.get.html
    pub fn new(resolver: &'r Resolver<L>) -> Self {
        lazy_static! {
            static ref THREADS: usize = num_cpus::get();
        }
        let threads = NonZeroUsize::new(*THREADS).unwrap_or(NonZeroUsize::MIN);
        Self::with_threads(resolver, threads)
    }

    /// Create a new `ThreadedResolver` with the requested number of threads.
    ///
    /// Since every thread keeps a request open against the remote service,
    /// keep this number small when targeting the public KEGG server.
    pub fn with_threads(resolver: &'r Resolver<L>, threads: NonZeroUsize) -> Self {
        Self {
            resolver,
            threads: threads.get(),
        }
    }

    /// Get the number of worker threads.
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl<'r, L: Lookup + Sync> Resolve for ThreadedResolver<'r, L> {
    fn resolve_all(&self, identifiers: Vec<Option<ShortString>>) -> Result<Vec<Resolution>> {
        let n = identifiers.len();
        let resolver = self.resolver;

        // create the communication channels
        let (s_job, r_job) = crossbeam_channel::bounded::<(usize, Option<ShortString>)>(self.threads);
        let (s_item, r_item) = crossbeam_channel::unbounded::<(usize, Resolution)>();

        let mut slots: Vec<Option<Resolution>> = vec![None; n];
        std::thread::scope(|scope| -> Result<()> {
            // create the worker threads
            let mut workers = Vec::with_capacity(self.threads);
            for _ in 0..self.threads {
                let r_job = r_job.clone();
                let s_item = s_item.clone();
                workers.push(scope.spawn(move || {
                    for (i, id) in r_job.iter() {
                        let resolution = resolver.resolve(id.as_deref());
                        if s_item.send((i, resolution)).is_err() {
                            return;
                        }
                    }
                }));
            }
            drop(r_job);
            drop(s_item);

            // feed the accessions, then close the queue so workers stop
            for job in identifiers.into_iter().enumerate() {
                s_job.send(job).map_err(|_| Error::DisconnectedChannel)?;
            }
            drop(s_job);

            for (i, resolution) in r_item.iter() {
                slots[i] = Some(resolution);
            }
            for worker in workers {
                worker.join().map_err(|_| Error::DisconnectedChannel)?;
            }
            Ok(())
        })?;

        slots
            .into_iter()
            .map(|slot| slot.ok_or(Error::DisconnectedChannel))
            .collect()
    }

    fn fetch_catalog(&self) -> Result<PathwayCatalog> {
        self.resolver.fetch_catalog()
    }
}
