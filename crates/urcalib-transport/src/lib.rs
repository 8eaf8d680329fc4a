//! Blocking byte-stream sources for the robot controller primary interface.
//!
//! This is the lowest layer of urcalib. It knows nothing about message
//! framing: it hands out exact byte counts and discards exact byte counts,
//! and reports a short stream as [`StreamError::Truncated`].
//!
//! - [`ByteSource`] — the exact-read / skip contract the frame decoder uses
//! - [`StreamSource`] — a buffered [`ByteSource`] over any [`std::io::Read`]
//! - [`ControllerStream`] — a TCP connection to the controller

pub mod config;
pub mod error;
pub mod source;
pub mod tcp;

pub use config::{ConnectConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_HOST, DEFAULT_PORT};
pub use error::{Result, StreamError};
pub use source::{ByteSource, StreamSource};
pub use tcp::ControllerStream;
