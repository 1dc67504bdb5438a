use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// The text to analyze could not be obtained.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input unavailable: {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read text from standard input")]
    Stdin(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
