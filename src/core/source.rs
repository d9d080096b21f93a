//! Input sources
//!
//! Each source yields one block of text that is tokenized on its own:
//! - standard input: every line followed by a single space
//! - files: the whole content as-is
//!
//! Non-UTF-8 bytes are replaced rather than rejected.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Could not find file: {}!", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read standard input")]
    Stdin(#[source] io::Error),
}

/// Where text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Human-readable name for diagnostics
    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Text read from one source
#[derive(Debug, Clone)]
pub struct SourceText {
    pub text: String,
    /// Whether invalid UTF-8 had to be replaced
    pub lossy: bool,
}

impl SourceText {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self { text, lossy: false },
            Err(e) => Self {
                text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                lossy: true,
            },
        }
    }
}

/// Read all of `reader`, appending a space after every line
pub fn read_lines_joined<R: Read>(mut reader: R) -> io::Result<SourceText> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let raw = SourceText::from_bytes(bytes);
    let mut text = String::with_capacity(raw.text.len() + 1);
    for line in raw.text.lines() {
        text.push_str(line);
        text.push(' ');
    }

    Ok(SourceText {
        text,
        lossy: raw.lossy,
    })
}

/// Read a whole file
pub fn read_file(path: &Path) -> Result<SourceText, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceText::from_bytes(bytes))
}

/// Read one source
pub fn read_source(source: &InputSource) -> Result<SourceText, SourceError> {
    match source {
        InputSource::Stdin => read_lines_joined(io::stdin().lock()).map_err(SourceError::Stdin),
        InputSource::File(path) => read_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lines_joined_with_trailing_space() {
        let input = "I love\nsandwiches\n";
        let read = read_lines_joined(input.as_bytes()).unwrap();
        assert_eq!(read.text, "I love sandwiches ");
        assert!(!read.lossy);
    }

    #[test]
    fn test_lines_joined_without_final_newline() {
        let read = read_lines_joined("a\r\nb".as_bytes()).unwrap();
        assert_eq!(read.text, "a b ");
    }

    #[test]
    fn test_empty_reader() {
        let read = read_lines_joined(io::empty()).unwrap();
        assert_eq!(read.text, "");
    }

    #[test]
    fn test_read_file_whole_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "Prince Vasíli\nKurágin").unwrap();

        let read = read_file(&path).unwrap();
        assert_eq!(read.text, "Prince Vasíli\nKurágin");
        assert!(!read.lossy);
    }

    #[test]
    fn test_read_file_invalid_utf8_is_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, b"one \xff two").unwrap();

        let read = read_file(&path).unwrap();
        assert!(read.lossy);
        assert_eq!(read.text, "one \u{FFFD} two");
    }

    #[test]
    fn test_missing_file_message() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_source(&InputSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, SourceError::Unreadable { .. }));
        assert_eq!(
            err.to_string(),
            format!("Could not find file: {}!", path.display())
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(InputSource::Stdin.label(), "<stdin>");
        assert_eq!(
            InputSource::File(PathBuf::from("a/b.txt")).label(),
            "a/b.txt"
        );
    }
}
