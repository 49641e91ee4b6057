use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading an INI document.
#[derive(Error, Debug)]
pub enum IniError {
    /// The file could not be read.
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be understood. `line` is 1-based.
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
}
