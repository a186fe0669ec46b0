use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("unknown option \"{0}\"")]
    UnknownOption(String),
    #[error("invalid value for option \"{option}\": expected {expected}, got {actual}")]
    TypeMismatch {
        option: &'static str,
        expected: String,
        actual: &'static str,
    },
    #[error("no channel exists with code \"{0}\"")]
    UnknownChannel(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
