//! Convenience loader for a bundled index data file.
//!
//! This is packaging-layer behavior: it decides *where* a `timezones.lltz`
//! file may live and reads it into memory. The core reader's contract is
//! unaffected; `IndexReader::open` never touches the filesystem.

use crate::error::{LookupError, LookupResult};
use crate::reader::IndexReader;
use std::path::PathBuf;

/// File name probed at each search location.
pub const DATA_FILE_NAME: &str = "timezones.lltz";

/// Environment variable naming an exact index file path; checked first.
pub const DATA_PATH_ENV: &str = "LLTZ_DATA";

/// The paths `open_default` probes, in order:
///
/// 1. `$LLTZ_DATA` (taken as a file path, not a directory)
/// 2. `timezones.lltz` next to the current executable
/// 3. `timezones.lltz` in the working directory
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = std::env::var_os(DATA_PATH_ENV) {
        paths.push(PathBuf::from(p));
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
    {
        paths.push(dir.join(DATA_FILE_NAME));
    }
    paths.push(PathBuf::from(DATA_FILE_NAME));
    paths
}

/// Locate, read, and open a bundled index file.
///
/// The first existing candidate path wins. Fails with `DataFileNotFound`
/// (listing every searched path) when no candidate exists; read and header
/// errors from the chosen file propagate as `Io` / `InvalidHeader` /
/// `Corrupt`.
pub fn open_default() -> LookupResult<IndexReader<Vec<u8>>> {
    let searched = candidate_paths();
    for path in &searched {
        if path.is_file() {
            let data = std::fs::read(path)?;
            return IndexReader::open(data);
        }
    }
    Err(LookupError::DataFileNotFound { searched })
}
