//! Static asset copying.

use log::debug;
use pagesmith_core::{PagesmithError, Result};
use std::fs;
use std::path::Path;

/// Remove `dir` if it exists and create it again, empty.
pub fn clean_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("Removing {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Replace `dest` with a recursive copy of `src`.
///
/// Returns the number of files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if !src.exists() {
        return Err(PagesmithError::Site(format!(
            "Source path {} not found",
            src.display()
        )));
    }

    clean_dir(dest)?;
    copy_tree(src, dest)
}

fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&to)?;
            copied += copy_tree(&from, &to)?;
        } else {
            debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to)?;
            copied += 1;
        }
    }

    Ok(copied)
}
