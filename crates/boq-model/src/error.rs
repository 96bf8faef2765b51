use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown audit label: {0}")]
    UnknownAuditLabel(String),
    #[error("unknown skip reason: {0}")]
    UnknownSkipReason(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
