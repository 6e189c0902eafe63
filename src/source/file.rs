//! Local file source.

use crate::error::BlocklistError;
use std::path::Path;

/// Read the whole list file into memory.
pub fn read_file(path: &Path) -> Result<String, BlocklistError> {
    log::info!("Reading IPv4 addresses from {}...", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| BlocklistError::io(format!("Failed to read {}", path.display()), e))?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
