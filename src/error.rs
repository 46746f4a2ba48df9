use thiserror::Error;

/// Failures while loading site configuration.
///
/// The numeric routines never fail; degenerate geometry comes back as NaN.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid site '{id}': {reason}")]
    InvalidSite { id: String, reason: String },
}
