use std::io::{self, Read};
use std::path::Path;

use log::{info, warn};

use crate::error::InputError;

/// Source name that selects standard input instead of a file.
pub const STDIN_SOURCE: &str = "-";

/// Reads the full text to analyze from `source`, a file path or `-` for stdin.
///
/// A missing or unreadable file is reported as an error, never treated as
/// empty text.
pub fn read_text(source: &str) -> Result<String, InputError> {
    if source == STDIN_SOURCE {
        return read_stdin();
    }
    read_file(Path::new(source))
}

/// Reads a whole text file. Directories and unreadable paths are `Unavailable`.
pub fn read_file(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    info!("read {} bytes from {}", bytes.len(), path.display());

    Ok(decode(bytes, &path.display().to_string()))
}

fn read_stdin() -> Result<String, InputError> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(InputError::Stdin)?;
    info!("read {} bytes from standard input", bytes.len());

    Ok(decode(bytes, "standard input"))
}

fn decode(bytes: Vec<u8>, origin: &str) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        warn!("{} is not valid UTF-8; invalid sequences were replaced", origin);
        String::from_utf8_lossy(e.as_bytes()).into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wordfreq-input-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let path = temp_path("does-not-exist.txt");
        let err = read_text(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, InputError::Unavailable { .. }));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = std::env::temp_dir();
        let err = read_file(&dir).unwrap_err();
        match err {
            InputError::Unavailable { path, .. } => assert_eq!(path, dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reads_file_contents() {
        let path = temp_path("book.txt");
        std::fs::write(&path, "It was a dark and stormy night.").unwrap();
        let text = read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(text, "It was a dark and stormy night.");
    }

    #[test]
    fn test_empty_file_is_empty_text() {
        let path = temp_path("empty.txt");
        std::fs::write(&path, "").unwrap();
        let text = read_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        assert_eq!(decode(b"caf\xff ok".to_vec(), "test"), "caf\u{fffd} ok");
    }
}
