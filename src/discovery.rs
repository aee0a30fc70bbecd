//! Input discovery
//!
//! Collects the `.wav` files under a directory tree in a reproducible order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, WavcatError};

/// File name suffix of candidate inputs (case-sensitive)
pub const WAV_SUFFIX: &str = ".wav";

/// Find every `.wav` file under `root`, recursively.
///
/// Entries are visited sorted by file name within each directory, so the
/// concatenation order is stable across runs and platforms.
pub fn find_wav_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut wav_files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| WavcatError::Discovery {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: e,
        })?;

        if entry.file_type().is_file() && is_wav_name(entry.file_name().to_string_lossy().as_ref())
        {
            wav_files.push(entry.into_path());
        }
    }

    Ok(wav_files)
}

fn is_wav_name(name: &str) -> bool {
    name.ends_with(WAV_SUFFIX)
}
