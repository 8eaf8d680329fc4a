/// Errors that can occur while pulling bytes from the controller stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The stream ended before the requested number of bytes arrived.
    #[error("stream truncated (requested {requested} bytes, got {available})")]
    Truncated { requested: u64, available: u64 },

    /// The underlying transport failed (reset, broken pipe, timeout, ...).
    #[error("stream I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),

    /// Failed to connect to the controller.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        source: std::io::Error,
    },

    /// The controller address resolved to nothing.
    #[error("no addresses resolved for {addr}")]
    Resolve { addr: String },
}

impl StreamError {
    /// Whether this error was caused by an expired read or connect timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            StreamError::IoFailure(err) | StreamError::Connect { source: err, .. } => matches!(
                err.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            ),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, StreamError>;
