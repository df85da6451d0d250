//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::fmt;
use std::path::PathBuf;

/// Where a text to translate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Text given on the command line
    Inline(String),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Read the full text of this source; standard input stops at `limit` bytes
    pub fn read(&self, limit: usize) -> anyhow::Result<String> {
        match self {
            InputSource::File(path) => FileReader::read_text(path),
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::Stdin => FileReader::read_stdin(limit),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Inline(_) => write!(f, "<text>"),
            InputSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(InputSource::File(PathBuf::from("a.txt")).to_string(), "a.txt");
        assert_eq!(InputSource::Inline("hola".into()).to_string(), "<text>");
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_inline_read() {
        let source = InputSource::Inline("¡Olé!".into());
        assert_eq!(source.read(64).unwrap(), "¡Olé!");
    }
}
