use std::fmt;
use std::io;

use urcalib_frame::ScanError;
use urcalib_transport::StreamError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::NotFound
        | io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn stream_error(context: &str, err: StreamError) -> CliError {
    if err.is_timeout() {
        return CliError::new(TIMEOUT, format!("{context}: {err}"));
    }
    match err {
        StreamError::IoFailure(source) => io_error(context, source),
        StreamError::Truncated { .. } => CliError::new(FAILURE, format!("{context}: {err}")),
        StreamError::Connect { .. } | StreamError::Resolve { .. } => {
            CliError::new(TRANSPORT_ERROR, format!("{context}: {err}"))
        }
    }
}

pub fn scan_error(context: &str, err: ScanError) -> CliError {
    match err {
        ScanError::Stream(err) => stream_error(context, err),
        ScanError::Protocol(err) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}
