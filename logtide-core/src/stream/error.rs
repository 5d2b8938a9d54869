use thiserror::Error;

/// A transport message that does not fit the expected envelope.
///
/// Never fatal: the session drops the message and keeps its state.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("empty wire message")]
    Empty,

    #[error("malformed wire message: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("session driver has stopped")]
    Stopped,
}
