use std::io::Read;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use tracing::{debug, info};

use crate::config::ConnectConfig;
use crate::error::{Result, StreamError};

/// A read-only TCP connection to the controller's primary interface.
///
/// The socket is released when the stream is dropped, so every exit path
/// closes it. [`ControllerStream::close`] additionally shuts down both
/// directions and reports a failure to do so.
pub struct ControllerStream {
    stream: TcpStream,
    addr: String,
}

impl ControllerStream {
    /// Connect to the controller (blocking).
    ///
    /// Each resolved address is tried in turn with the configured connect
    /// timeout; the error of the last attempt is returned if none succeed.
    pub fn connect(config: &ConnectConfig) -> Result<Self> {
        let addr = config.addr();
        let candidates = (config.host.as_str(), config.port)
            .to_socket_addrs()
            .map_err(|source| StreamError::Connect {
                addr: addr.clone(),
                source,
            })?;

        let mut last_err = None;
        for candidate in candidates {
            match TcpStream::connect_timeout(&candidate, config.connect_timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(config.read_timeout)?;
                    info!(%addr, peer = %candidate, "connected to controller");
                    return Ok(Self { stream, addr });
                }
                Err(err) => {
                    debug!(%addr, peer = %candidate, error = %err, "connect attempt failed");
                    last_err = Some(err);
                }
            }
        }

        match last_err {
            Some(source) => Err(StreamError::Connect { addr, source }),
            None => Err(StreamError::Resolve { addr }),
        }
    }

    /// The `host:port` this stream was opened against.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Shut down the connection in both directions and release the socket.
    pub fn close(self) -> Result<()> {
        debug!(addr = %self.addr, "closing controller connection");
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The controller already hung up; nothing left to release.
            Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(err) => Err(StreamError::IoFailure(err)),
        }
    }
}

impl Read for ControllerStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.stream.read(buf)
    }
}

impl std::fmt::Debug for ControllerStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerStream")
            .field("addr", &self.addr)
            .finish()
    }
}
