use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimerError {
    #[error("unknown profile {0:?}")]
    UnknownProfile(String),
}

pub type TimerResult<T> = Result<T, TimerError>;
