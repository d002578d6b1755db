//! Error type for settings access, writes and persistence.

use std::path::PathBuf;

use crate::descriptor::SettingKey;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownField(String),

    #[error("setting {key:?} expects a {expected} value, got {found}")]
    TypeMismatch {
        key: SettingKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid scene `{0}` (expected Terrain or Skull)")]
    InvalidScene(String),

    #[error("setting {0:?} cannot take a zero-length direction")]
    DegenerateDirection(SettingKey),

    #[error("setting {0:?} cannot hold a NaN or infinite value")]
    NonFinite(SettingKey),

    #[error("settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings document: {0}")]
    Parse(#[from] serde_json::Error),
}
