use thiserror::Error;

#[derive(Debug, Error)]
pub enum AskiError {
    #[error("unknown interview variable: {0}")]
    UnknownVariable(String),
}
