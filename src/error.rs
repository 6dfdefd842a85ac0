use thiserror::Error;

/// Crate-wide error type.
///
/// `InvalidConfiguration` and `SessionNotStarted` are contract violations and
/// should surface to the caller immediately; `StoreIo` covers any underlying
/// file failure in the win ledger or team store.
#[derive(Debug, Error)]
pub enum Error {
    /// `create_table` was called with an empty team list.
    #[error("a tournament needs at least one team")]
    InvalidConfiguration,

    /// A cursor or scoring operation was invoked outside an active session.
    #[error("session not started; call create_table first")]
    SessionNotStarted,

    /// A read or write against the win ledger or team store failed.
    #[error("store I/O failure: {0}")]
    StoreIo(#[from] std::io::Error),

    /// The persisted team blob could not be decoded.
    #[error("malformed team store: {0}")]
    StoreFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
