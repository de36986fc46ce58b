/// memdigest command-line tool — hash files into an in-memory
/// content-addressable store and check them back out by location.
///
/// # Command overview
///
/// ```text
/// memdigest <COMMAND> [OPTIONS]
///
/// Commands:
///   digest     Store files and print their digests and locations
///   verify     Store files, reopen each by location, compare, unmount
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log store operations (debug level)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                    |
/// |------|--------------------------------------------|
/// | 0    | Success                                    |
/// | 1    | Error (unreadable file, mismatch, etc.)    |
///
/// All error details and logs are written to stderr so stdout can be piped
/// cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use memdigest_store::{MemoryDigestStore, StoreConfig};
use memdigest_types::Algorithm;
use tracing_subscriber::EnvFilter;

mod cmd_digest;
mod cmd_verify;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "memdigest", version, about = "In-memory content-addressable store")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log store operations at debug level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Store files and print their digests and locations.
    Digest(DigestArgs),
    /// Store files, reopen each through its location, and compare.
    Verify(VerifyArgs),
}

/// Parse an algorithm slug (`sha-1`, `blake3`) given on the command line.
fn parse_algorithm(slug: &str) -> Result<Algorithm, String> {
    Algorithm::from_slug(slug).ok_or_else(|| {
        let known: Vec<_> = Algorithm::ALL.iter().map(|a| a.slug()).collect();
        format!("unknown algorithm {slug:?} (expected one of: {})", known.join(", "))
    })
}

/// An empty store for the selected algorithm.
pub fn store_for(algorithm: Algorithm) -> MemoryDigestStore {
    MemoryDigestStore::with_config(StoreConfig::new(algorithm))
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `memdigest digest`.
///
/// ```text
/// ┌─────────────┬───────────────────────────────────────────────┐
/// │ Flag        │ Effect                                        │
/// ├─────────────┼───────────────────────────────────────────────┤
/// │ --algorithm │ `sha-1` (default) or `blake3`                 │
/// │ --json      │ Emit a JSON array instead of a text table     │
/// └─────────────┴───────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DigestArgs {
    /// Files to store.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, value_parser = parse_algorithm, default_value = "sha-1")]
    pub algorithm: Algorithm,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `memdigest verify`.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Files to store and verify.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[arg(long, value_parser = parse_algorithm, default_value = "sha-1")]
    pub algorithm: Algorithm,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose {
        "memdigest=debug,memdigest_store=debug"
    } else {
        "memdigest=info,memdigest_store=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Digest(args) => cmd_digest::run(&args),
        Commands::Verify(args) => cmd_verify::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
