use mav_core::error::StateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("scenario file not found: {}", .0.display())]
    MissingScenario(PathBuf),

    #[error("failed to load scenario: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid scenario: {0}")]
    State(#[from] StateError),

    #[error("failed to encode trajectory message: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("failed to render trajectory: {0}")]
    Format(#[from] std::fmt::Error),
}
