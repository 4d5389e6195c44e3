use std::result;

use thiserror::Error;

/// A type alias for handling errors related to batwatch.
pub type Result<T> = result::Result<T, MonitorError>;

/// An error that can occur while batwatch runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    /// An error when there is an IO exception.
    #[error("IO exception, {0}")]
    InvalidIo(String),
    /// An error with the config file or the passed arguments. The reason
    /// should tell the user what to fix, so phrase it as an instruction.
    #[error("Invalid config or arguments, please {0}")]
    ConfigError(String),
    /// An error to represent generic errors.
    #[error("Error, {0}")]
    GenericError(String),
}

impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        MonitorError::InvalidIo(err.to_string())
    }
}

impl From<toml_edit::de::Error> for MonitorError {
    fn from(err: toml_edit::de::Error) -> Self {
        MonitorError::ConfigError(format!("check your config file: {err}"))
    }
}

impl From<std::num::ParseIntError> for MonitorError {
    fn from(err: std::num::ParseIntError) -> Self {
        MonitorError::ConfigError(format!("make sure the value is a valid number ({err})."))
    }
}
