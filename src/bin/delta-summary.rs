//! A binary that summarizes the alignments within a MUMmer delta file.
//!
//! ```shell
//! cargo run --release --bin=delta-summary --features=binaries genome.delta
//! ```
//!
//! By default, the aligned lengths on both axes are reported alongside the
//! total alignment length and the number of similarity errors. Pass
//! `--identity` to report the average identity instead.

use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use deltafile::Options;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Summarizes the alignments within a MUMmer delta file.
#[derive(Parser)]
struct Args {
    /// The delta file to read (optionally gzip-compressed).
    path: PathBuf,

    /// Sum fragment lengths without merging overlapping fragments.
    #[arg(long, default_value_t = false, conflicts_with = "identity")]
    naive: bool,

    /// Report the merged aligned lengths and the average identity.
    #[arg(short, long, default_value_t = false)]
    identity: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Prints the aligned lengths and average identity.
fn identity(args: &Args) -> Result<()> {
    let summary = deltafile::parse(&args.path)
        .with_context(|| format!("summarizing `{}`", args.path.display()))?;

    info!(
        reference = summary.reference_aligned_length,
        query = summary.query_aligned_length,
        "merged aligned lengths"
    );

    println!("reference_aligned_length\t{}", summary.reference_aligned_length);
    println!("query_aligned_length\t{}", summary.query_aligned_length);
    println!("average_identity\t{:.6}", summary.average_identity);

    Ok(())
}

/// Prints the aligned lengths, total alignment length, and similarity errors.
fn totals(args: &Args) -> Result<()> {
    let options = Options::default().use_merge(!args.naive);
    info!(strategy = ?options.strategy(), "computing totals");

    let totals = deltafile::parse_with_totals(&args.path, options)
        .with_context(|| format!("computing totals for `{}`", args.path.display()))?;

    println!("query_aligned_length\t{}", totals.query_aligned_length);
    println!("reference_aligned_length\t{}", totals.reference_aligned_length);
    println!("total_alignment_length\t{}", totals.total_alignment_length);
    println!("similarity_errors\t{}", totals.similarity_errors);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(std::io::stderr)
            .init(),
    };

    match args.identity {
        true => identity(&args),
        false => totals(&args),
    }
}
