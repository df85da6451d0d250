//! Input abstraction for unified API

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input (must be UTF-8)
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Convert input to bytes, reading at most `limit` bytes.
    ///
    /// Files are checked against the limit before they are opened; readers
    /// are cut off one byte past it.
    pub(crate) fn into_bytes(self, limit: usize) -> Result<Vec<u8>, Error> {
        let bytes = match self {
            Input::Text(text) => text.into_bytes(),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => {
                let file_error = |e: std::io::Error| {
                    Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
                };
                let size = fs::metadata(&path).map_err(file_error)?.len();
                if size > limit as u64 {
                    return Err(too_large(size, limit));
                }
                read_bounded(File::open(&path).map_err(file_error)?, limit).map_err(file_error)?
            }
            Input::Reader(reader) => read_bounded(reader, limit).map_err(|e| {
                Error::Infrastructure(format!("Failed to read from reader: {e}"))
            })?,
        };

        if bytes.len() > limit {
            return Err(too_large(bytes.len() as u64, limit));
        }
        Ok(bytes)
    }

    /// Get text content from input, at most `limit` bytes of it
    pub(crate) fn into_text(self, limit: usize) -> Result<String, Error> {
        match self {
            Input::Text(text) if text.len() > limit => Err(too_large(text.len() as u64, limit)),
            Input::Text(text) => Ok(text),
            other => {
                let bytes = other.into_bytes(limit)?;
                String::from_utf8(bytes)
                    .map_err(|e| Error::Infrastructure(format!("Invalid UTF-8 encoding: {e}")))
            }
        }
    }
}

/// Read to the end, stopping one byte past `limit`
fn read_bounded(reader: impl Read, limit: usize) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buffer)?;
    Ok(buffer)
}

fn too_large(size: u64, limit: usize) -> Error {
    Error::InvalidInput(format!(
        "input is {size} bytes or more, limit is {limit} bytes"
    ))
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    const NO_LIMIT: usize = usize::MAX;

    #[test]
    fn test_text_input() {
        let input = Input::from_text("Hola");
        assert_eq!(input.into_text(NO_LIMIT).unwrap(), "Hola");
    }

    #[test]
    fn test_bytes_input() {
        let input = Input::from_bytes("año".as_bytes().to_vec());
        assert_eq!(input.into_text(NO_LIMIT).unwrap(), "año");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let input = Input::from_bytes(vec![0x61, 0xFF, 0x62]);
        let err = input.into_text(NO_LIMIT).unwrap_err();
        assert!(err.to_string().contains("Invalid UTF-8 encoding"));
    }

    #[test]
    fn test_reader_input() {
        let input = Input::from_reader(Cursor::new("¿Qué tal?".as_bytes().to_vec()));
        assert_eq!(input.into_text(NO_LIMIT).unwrap(), "¿Qué tal?");
    }

    #[test]
    fn test_file_input() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "Niño 42".as_bytes()).unwrap();

        let input = Input::from_file(file.path());
        assert_eq!(input.into_text(NO_LIMIT).unwrap(), "Niño 42");
    }

    #[test]
    fn test_missing_file() {
        let input = Input::from_file("/nonexistent/sixdot/input.txt");
        let err = input.into_text(NO_LIMIT).unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_reader_stops_past_limit() {
        // An endless reader must not be drained
        let input = Input::from_reader(std::io::repeat(b'a'));
        let err = input.into_text(16).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_file_over_limit_is_not_read() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, "mañana".as_bytes()).unwrap();

        let err = Input::from_file(file.path()).into_text(4).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("limit is 4 bytes"));

        assert_eq!(
            Input::from_file(file.path()).into_text(7).unwrap(),
            "mañana"
        );
    }

    #[test]
    fn test_text_and_bytes_over_limit() {
        assert!(Input::from_text("hola").into_text(4).is_ok());
        assert!(matches!(
            Input::from_text("holas").into_text(4),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            Input::from_bytes(b"holas".to_vec()).into_text(4),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
