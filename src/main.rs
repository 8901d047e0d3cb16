#[cfg(feature = "threading")]
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use blast_kegg::config::DEFAULT_INPUT;
use blast_kegg::config::DEFAULT_OUTPUT;
use blast_kegg::config::DEFAULT_THRESHOLD;
use blast_kegg::kegg::DEFAULT_BASE_URL;
use blast_kegg::Config;

#[derive(Parser)]
#[command(name = "blast-kegg")]
#[command(about = "Append KEGG orthology and pathway information to a BLAST tabular report", long_about = None)]
#[command(version)]
struct Cli {
    /// E-value threshold; hits at or above it are not annotated
    #[arg(short = 'e', long, value_name = "FLOAT", default_value_t = DEFAULT_THRESHOLD)]
    evalue: f64,

    /// BLAST tabular report to annotate
    #[arg(short = 'i', long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    infile: PathBuf,

    /// File to append the annotated report to
    #[arg(short = 'o', long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    outfile: PathBuf,

    /// Root URL of the KEGG REST API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout of each KEGG request, in seconds
    #[arg(long, value_name = "SECS", default_value = "5")]
    timeout: f64,

    /// Number of accessions resolved in parallel
    #[cfg(feature = "threading")]
    #[arg(short = 'j', long, value_name = "INT")]
    jobs: Option<NonZeroUsize>,

    /// Verbosity level (repeat for more: -v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Get the request timeout, if it is a positive and representable duration.
    fn timeout(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.timeout)
            .ok()
            .filter(|d| !d.is_zero())
    }

    fn config(&self, timeout: Duration) -> Config {
        Config {
            threshold: self.evalue,
            input: self.infile.clone(),
            output: self.outfile.clone(),
            base_url: self.base_url.clone(),
            timeout,
            #[cfg(feature = "threading")]
            threads: self.jobs,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let timeout = match cli.timeout() {
        Some(timeout) => timeout,
        None => {
            log::error!("invalid timeout: {}", cli.timeout);
            std::process::exit(2);
        }
    };

    let config = cli.config(timeout);
    log::info!("Annotating {}", config.input.display());
    match blast_kegg::annotate(&config) {
        Ok(summary) => {
            log::info!(
                "Wrote {} lines to {}",
                summary.lines,
                config.output.display()
            );
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
