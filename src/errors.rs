use std::path::PathBuf;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Snapshot file could not be opened or read
    #[error("failed to read snapshot {}: {source}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not a valid gzip stream
    #[error("failed to decompress snapshot {}: {source}", .path.display())]
    Decompression {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON does not match the expected shape
    #[error("failed to decode snapshot {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A forward references a channel missing from both channel snapshots
    #[error("channel '{channel}' was not in the channel directory")]
    UnknownChannel { channel: String },

    /// Reporting month is not a valid YYYY-MM value
    #[error("invalid month '{month}': {reason}")]
    InvalidMonth { month: String, reason: String },

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(format!("TOML export failed: {}", err))
    }
}
