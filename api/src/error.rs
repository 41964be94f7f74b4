//! Error and result type for sinks.
use std::error::Error;

/// Type alias for `Result` with default error [`SinkError`].
pub type SinkResult<T = (), E = SinkError> = std::result::Result<T, E>;

/// An error raised while delivering an event to a sink.
///
/// Sinks that merely relay events never build this error themselves:
/// they hand back, unchanged, whatever their children or wrapped sink returned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SinkError {
    /// An IO error, typically raised by an output destination.
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// The event required a resource that has already been released by `close`.
    #[error("sink is already closed")]
    Closed,
    /// Any other error, raised by a terminal sink.
    #[error("{0}")]
    Custom(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl SinkError {
    /// Wrap any error (or message) into a [`SinkError::Custom`].
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        SinkError::Custom(err.into())
    }

    /// Checks if this error was raised by an IO operation.
    pub fn is_io(&self) -> bool {
        matches!(self, SinkError::Io(_))
    }
}
