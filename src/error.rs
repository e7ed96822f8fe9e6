use thiserror::Error;

use crate::config::MatcherKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("Empty pattern for {kind} matcher")]
    EmptyPattern { kind: MatcherKind },
    #[error("Config error: {0}")]
    Config(String),
    // a port was closed while the network still needed it
    #[error("Channel closed: {stage}")]
    ChannelClosed { stage: &'static str },
    #[error("Scan stalled at position {pos}")]
    Stalled { pos: usize },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ScanResult<T> = Result<T, ScanError>;

impl ScanError {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ScanError::Internal(message.into())
    }
}
