/// Implementation of `memdigest digest`.
///
/// Reads each file, stores its bytes, and prints one line per file.
///
/// # Example output
///
/// ```text
/// hello.txt  12 bytes  d3486ae9136e7856bc42212385ea797094475802
///   memdigest:sha-1:hexadecimal(d3486ae9136e7856bc42212385ea797094475802)/0
/// ```
///
/// With `--json` the same information is emitted as an array of objects
/// with `file`, `size`, `algorithm`, `digest` and `location` keys.
use std::fs;

use anyhow::{Context, Result};
use memdigest_types::MountPoint;
use serde::Serialize;

use crate::DigestArgs;

#[derive(Serialize)]
struct Record {
    file: String,
    size: usize,
    algorithm: &'static str,
    digest: String,
    location: String,
}

/// Run the `memdigest digest` command.
///
/// # Errors
///
/// Returns an error if any file cannot be read.
pub fn run(args: &DigestArgs) -> Result<()> {
    let store = crate::store_for(args.algorithm);
    let mut records = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let digest = store
            .store(&bytes)
            .with_context(|| format!("cannot store {}", path.display()))?;
        records.push(Record {
            file: path.display().to_string(),
            size: bytes.len(),
            algorithm: digest.algorithm().name(),
            location: store.location_of(&digest),
            digest: digest.to_hex(),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}  {} bytes  {}", record.file, record.size, record.digest);
            println!("  {}", record.location);
        }
    }

    tracing::info!(files = records.len(), entries = store.len(), "digested");
    Ok(())
}
