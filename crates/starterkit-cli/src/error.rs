use starterkit_core::StarterKitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] StarterKitError),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("{0} has no request example")]
    NoRequestExample(String),
}
