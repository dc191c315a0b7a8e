use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("URL must not be empty")]
    EmptyUrl,

    #[error("invalid video URL \"{url}\": {reason}")]
    InvalidVideoUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
