use thiserror::Error;

/// Errors raised while building a logger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No configuration was supplied.
    #[error("configuration required")]
    MissingConfiguration,

    /// The numeric level is outside `0..=4`.
    #[error("invalid level: {0}")]
    InvalidLevel(u8),

    /// The level name could not be parsed.
    #[error("unknown level name: {0:?}")]
    UnknownLevelName(String),
}
