use thiserror::Error;

/// Errors raised while building library values from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BslError {
    /// The string is not a `Kind.Name[.Kind.Name...]` reference to a metadata object.
    #[error("Incorrect full name {0}")]
    IncorrectFullName(String),

    #[error("Unknown metadata type {0}")]
    UnknownMdoType(String),
}

pub type Result<T> = std::result::Result<T, BslError>;
