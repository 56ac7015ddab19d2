// src/file.rs

use std::{fs, path::Path};

use crate::error::ScrapeError;
use crate::schedule::OutputDocument;

/// Serialize and write the output document. Pretty-printed UTF-8 with
/// non-ASCII kept literal; the previous file is overwritten in one call.
/// Parent directories are created as needed.
pub fn write_output(path: &Path, document: &OutputDocument) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut contents = serde_json::to_string_pretty(document).map_err(ScrapeError::Encode)?;
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
