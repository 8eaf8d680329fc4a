use urcalib_transport::StreamError;

/// Violations of the primary interface framing rules.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A sub-message claims more bytes than its container has left.
    #[error("frame overrun: sub-message of {declared} bytes exceeds the {remaining} bytes left in its container")]
    FrameOverrun { declared: u32, remaining: u32 },

    /// A header declares a length smaller than the header itself.
    #[error("invalid header length {length} for message type {message_type} (minimum 5)")]
    InvalidHeaderLength { length: u32, message_type: u8 },
}

/// Errors that abort a calibration scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Stream-level error (truncation, I/O failure, connect failure).
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    /// Framing error; the stream is misaligned and cannot be resynchronized.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = std::result::Result<T, ScanError>;
