use thiserror::Error;

/// Result type alias for relay operations
pub type Result<T, E = RelayError> = std::result::Result<T, E>;

/// Errors that fail a contact submission outright.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by a [`crate::LeadStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered with an error payload; carries its message.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),
}

/// Errors raised by the mail and messaging collaborators. These are only
/// ever logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),

    #[error("could not build message: {0}")]
    Message(String),
}
