use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the course list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be opened at all.
    #[error("Unable to open file {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A menu number with no matching option.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{value} is not a valid {what} choice")]
pub struct InvalidChoice {
    pub what: &'static str,
    pub value: i32,
}

/// Failures while asking the operator for a choice.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended before a valid answer was given.
    #[error("input closed before a valid answer was given")]
    InputClosed,

    #[error(transparent)]
    InvalidChoice(#[from] InvalidChoice),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
