use std::path::PathBuf;
use thiserror::Error;

use crate::ini::IniError;

/// Errors produced while constructing a [`Locator`](super::Locator).
#[derive(Error, Debug)]
pub enum LocatorError {
    /// A required key is absent from the `locations` section.
    #[error("Option '{key}' missing in file {}", file.display())]
    MissingConfigurationOption { key: &'static str, file: PathBuf },

    /// The locations file could not be read or parsed.
    #[error("invalid locations file `{}`: {source}", file.display())]
    Ini {
        file: PathBuf,
        #[source]
        source: IniError,
    },

    /// A resolved path cannot be written to a locations file and read
    /// back unchanged.
    #[error("cannot write '{key}' = `{}` to a locations file: {reason}", path.display())]
    Unrepresentable {
        key: &'static str,
        path: PathBuf,
        reason: &'static str,
    },
}

impl LocatorError {
    /// The missing key, for `MissingConfigurationOption`.
    pub fn missing_key(&self) -> Option<&'static str> {
        match self {
            LocatorError::MissingConfigurationOption { key, .. } => Some(*key),
            LocatorError::Ini { .. } | LocatorError::Unrepresentable { .. } => None,
        }
    }
}
