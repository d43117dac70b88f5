use std::io;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum FoldError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Logger error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

pub type FoldResult<T> = Result<T, FoldError>;
