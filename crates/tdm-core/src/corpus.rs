//! Input directory listing.

use std::fs;
use std::path::Path;

use tracing::debug;

use tdm_types::TdmError;

/// List the entries of `input_dir` by file name, sorted lexicographically.
///
/// This order fixes the matrix column order and the document manifest.
/// Every entry is listed, including subdirectories.
pub fn read_directory(input_dir: &Path) -> Result<Vec<String>, TdmError> {
    let entries = fs::read_dir(input_dir).map_err(|e| TdmError::io(input_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TdmError::io(input_dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| TdmError::InvalidFileName(entry.path()))?;
        names.push(name);
    }

    names.sort_unstable();
    debug!(dir = %input_dir.display(), count = names.len(), "Listed input directory");
    Ok(names)
}
