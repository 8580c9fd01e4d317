//! JSON output for the normalized weapon document
//!
//! Serializes the document to disk, creating missing parent directories.
//! The document shape itself is fixed by the model types; this writer only
//! decides formatting and destination.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::models::Document;
use crate::{Error, Result};

/// Outcome of a document write
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Path the document was written to
    pub path: PathBuf,

    /// Bytes written
    pub bytes_written: u64,
}

/// Write a document as JSON to the given path
///
/// Pretty-printed by default; `compact` emits minified JSON.
pub fn write_document(document: &Document, path: &Path, compact: bool) -> Result<WriteSummary> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create output directory '{}'", parent.display()),
                    e,
                )
            })?;
        }
    }

    let json = if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    }
    .map_err(|e| Error::json_writing("Failed to serialize document", e))?;

    fs::write(path, &json)
        .map_err(|e| Error::io(format!("Failed to write '{}'", path.display()), e))?;

    info!(
        "Wrote {} weapons across {} categories to {}",
        document.weapon_count(),
        document.categories.len(),
        path.display()
    );

    Ok(WriteSummary {
        path: path.to_path_buf(),
        bytes_written: json.len() as u64,
    })
}
