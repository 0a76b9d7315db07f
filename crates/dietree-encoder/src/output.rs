//! Writing rendered output to disk.

use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `contents` to `path` without ever leaving a partial file.
///
/// The data goes to a temporary file in the destination directory, which
/// replaces `path` only once every byte has been written and flushed. On
/// failure the temporary file is removed and `path` is left as it was.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}
