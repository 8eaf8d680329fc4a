use std::io::{BufRead, BufReader, ErrorKind, Read};

use bytes::{Bytes, BytesMut};

use crate::error::{Result, StreamError};

const READ_BUFFER_CAPACITY: usize = 8 * 1024;

/// An ordered, blocking byte stream with exact-count reads and skips.
///
/// Every call either completes in full or fails; there are no partial
/// results. A stream that ends early yields [`StreamError::Truncated`].
pub trait ByteSource {
    /// Read exactly `n` bytes.
    fn read_exact(&mut self, n: usize) -> Result<Bytes>;

    /// Discard exactly `n` bytes without retaining them.
    fn skip(&mut self, n: u64) -> Result<()>;

    /// Total bytes consumed so far, read or skipped.
    fn consumed(&self) -> u64;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, n: usize) -> Result<Bytes> {
        (**self).read_exact(n)
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        (**self).skip(n)
    }

    fn consumed(&self) -> u64 {
        (**self).consumed()
    }
}

/// A buffered [`ByteSource`] over any blocking `Read` stream.
///
/// Handles short reads and `Interrupted` internally. Skipped bytes are
/// consumed straight out of the read buffer and never copied.
pub struct StreamSource<R> {
    inner: BufReader<R>,
    consumed: u64,
}

impl<R: Read> StreamSource<R> {
    /// Wrap a reader with the default buffer capacity.
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::with_capacity(READ_BUFFER_CAPACITY, inner),
            consumed: 0,
        }
    }

    /// Consume the source and return the inner stream.
    ///
    /// Bytes already buffered but not yet handed out are dropped.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read_exact(&mut self, n: usize) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(n);
        let mut filled = 0usize;

        while filled < n {
            let read = match self.inner.read(&mut buf[filled..]) {
                Ok(read) => read,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::IoFailure(err)),
            };

            if read == 0 {
                self.consumed += filled as u64;
                return Err(StreamError::Truncated {
                    requested: n as u64,
                    available: filled as u64,
                });
            }

            filled += read;
        }

        self.consumed += n as u64;
        Ok(buf.freeze())
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        let mut remaining = n;

        while remaining > 0 {
            let buffered = match self.inner.fill_buf() {
                Ok(buf) => buf.len(),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(StreamError::IoFailure(err)),
            };

            if buffered == 0 {
                return Err(StreamError::Truncated {
                    requested: n,
                    available: n - remaining,
                });
            }

            let step = remaining.min(buffered as u64);
            self.inner.consume(step as usize);
            self.consumed += step;
            remaining -= step;
        }

        Ok(())
    }

    fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl<R> std::fmt::Debug for StreamSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSource")
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}
