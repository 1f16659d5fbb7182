//! Saving the CSV export to disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::Result;

/// Write `csv` to `transactions.csv` inside `dir`, creating `dir` if needed.
///
/// The bytes go to a temp file in the same directory which is then renamed
/// over the destination, so an interrupted write never leaves a partial
/// export behind.
pub fn save_csv(dir: &Path, csv: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let dest = dir.join(config::EXPORT_FILE_NAME);

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(csv)?;
    tmp.flush()?;
    tmp.persist(&dest).map_err(|e| e.error)?;

    tracing::info!(path = %dest.display(), bytes = csv.len(), "saved transaction export");
    Ok(dest)
}
