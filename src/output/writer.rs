//! Output file persistence.

use crate::error::BlocklistError;
use colored::Colorize;
use std::path::Path;

/// Write `content` to `path`, creating missing parent directories.
///
/// An existing file is overwritten.
pub fn write_output(path: &Path, content: &str) -> Result<(), BlocklistError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            BlocklistError::io(format!("Failed to create directory {}", dir.display()), e)
        })?;
    }
    std::fs::write(path, content)
        .map_err(|e| BlocklistError::io(format!("Failed to write {}", path.display()), e))?;
    log::info!(
        "Saved {} bytes to {}",
        content.len(),
        path.display().to_string().green()
    );
    Ok(())
}
