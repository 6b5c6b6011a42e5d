use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The form refused the input before anything was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backend refused to save; the details were already reported
    #[error("{0}")]
    SaveFailed(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
