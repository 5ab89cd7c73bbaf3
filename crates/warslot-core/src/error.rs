use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Illegal army: {placed} special units placed but only {fits} can be seated")]
    IllegalArmy { placed: u64, fits: u64 },
}
