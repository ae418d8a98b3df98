use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarterKitError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0} is not supported in this environment")]
    Unsupported(&'static str),

    #[error("system appearance query failed: {0}")]
    Appearance(String),

    #[error("presentation update failed: {0}")]
    Presentation(String),

    #[error("invalid theme {0:?}, expected \"light\" or \"dark\"")]
    InvalidTheme(String),

    #[error("unsupported locale {0:?}")]
    InvalidLocale(String),

    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("unknown component: {0}")]
    UnknownComponent(String),
}

impl StarterKitError {
    /// Whether the failure means "not available here" rather than "tried and broke".
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
