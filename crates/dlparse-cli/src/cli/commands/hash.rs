//! Checksum extraction and verification commands.

use anyhow::{Context, Result};
use dlparse_core::hash::verify_path;
use dlparse_core::Toolkit;
use std::path::Path;

/// Print the extracted record as JSON.
pub fn run_hash(kit: &Toolkit, text: &str) -> Result<()> {
    let record = kit.hash(text);
    println!("{}", serde_json::to_string(&record)?);
    Ok(())
}

/// Verify `path` against the checksum found in `checksum`; mismatch is an error.
pub fn run_verify(kit: &Toolkit, path: &Path, checksum: &str) -> Result<()> {
    let record = kit.hash(checksum);
    let ok = verify_path(path, &record)
        .with_context(|| format!("verify {}", path.display()))?;
    if !ok {
        anyhow::bail!("checksum mismatch for {}", path.display());
    }
    println!("OK  {}", path.display());
    Ok(())
}
