//! Error types for typed setting extraction.

use thiserror::Error;

use crate::path::SettingPath;
use crate::value::ValueKind;

/// Errors that can occur when extracting a typed value from a [`crate::Settings`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// The value at `path` is not of the requested type. A missing key and a
    /// key holding the wrong type both land here; `found` is
    /// [`ValueKind::Absent`] for the former.
    #[error("invalid setting at path: {path}")]
    InvalidSetting {
        path: SettingPath,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl SettingsError {
    /// The navigation path of the accessor that failed.
    pub fn path(&self) -> &SettingPath {
        match self {
            SettingsError::InvalidSetting { path, .. } => path,
        }
    }
}

/// Convenience alias used throughout settings-core.
pub type Result<T> = std::result::Result<T, SettingsError>;
