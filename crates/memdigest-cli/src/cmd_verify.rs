/// Implementation of `memdigest verify`.
///
/// Exercises the full store lifecycle on real files:
///
/// ```text
/// 1. store       — every file goes into a fresh store
/// 2. reopen      — each file comes back through its location string
/// 3. compare     — reopened bytes must equal the file bytes
/// 4. unmount     — afterwards no digest may resolve any more
/// ```
///
/// Prints `✓`/`✗` per file; any `✗` makes the command exit with code 1.
use std::fs;

use anyhow::{Context, Result, bail};
use memdigest_types::MountPoint;

use crate::VerifyArgs;

/// Run the `memdigest verify` command.
///
/// # Errors
///
/// Returns an error if a file cannot be read, if any reopened content
/// differs from the file, or if content survives the unmount.
pub fn run(args: &VerifyArgs) -> Result<()> {
    let store = crate::store_for(args.algorithm);
    let mut stored = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
        let digest = store.store(&bytes)?;
        stored.push((path, bytes, digest));
    }

    let mut failures = 0usize;
    for (path, bytes, digest) in &stored {
        let location = store.location_of(digest);
        match store.open_location(&location) {
            Ok(content) if content.as_bytes() == bytes.as_slice() => {
                println!("✓ {}  {digest}", path.display());
            }
            Ok(content) => {
                failures += 1;
                println!(
                    "✗ {}  content differs ({} bytes stored, {} read back)",
                    path.display(),
                    bytes.len(),
                    content.len()
                );
            }
            Err(e) => {
                failures += 1;
                println!("✗ {}  {e}", path.display());
            }
        }
    }

    store.unmount()?;
    let survivors = stored
        .iter()
        .filter(|(_, _, digest)| store.load(digest.as_bytes()).is_some())
        .count();
    if survivors > 0 {
        bail!("{survivors} digest(s) still resolve after unmount");
    }
    println!("✓ Unmount: all {} digest(s) released", stored.len());

    if failures > 0 {
        bail!("{failures} of {} file(s) failed verification", stored.len());
    }
    Ok(())
}
