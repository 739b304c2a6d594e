//! Single-track copy step.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Copy one track to its destination, overwriting any existing file there and
/// creating intermediate destination directories as needed.
pub fn copy_track(source: &Path, dest: &Path) -> Result<()> {
    if !source.exists() {
        bail!("source file does not exist: {}", source.display());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }

    fs::copy(source, dest)
        .with_context(|| format!("copy {} to {}", source.display(), dest.display()))?;
    Ok(())
}
