//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read standard input as UTF-8 text, at most `limit` bytes
    pub fn read_stdin(limit: usize) -> Result<String> {
        Self::read_from(io::stdin().lock(), limit).context("Failed to read standard input")
    }

    /// Read a reader to the end as UTF-8 text, failing past `limit` bytes
    pub fn read_from<R: Read>(reader: R, limit: usize) -> Result<String> {
        let mut bytes = Vec::new();
        reader
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut bytes)?;

        if bytes.len() > limit {
            return Err(CliError::TranslationError(format!(
                "input exceeds the limit of {limit} bytes"
            ))
            .into());
        }
        let content = String::from_utf8(bytes).context("Input is not valid UTF-8")?;
        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
