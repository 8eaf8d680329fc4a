use bytes::Buf;
use urcalib_transport::{ByteSource, Result};

use crate::codec::{FrameHeader, F64_SIZE, HEADER_SIZE, U32_SIZE};

/// Decodes headers and fixed-width big-endian fields from a [`ByteSource`].
///
/// Knows field widths and byte order only; what the fields mean is up to
/// the caller. Arrays carry no length prefix on the wire, so their element
/// count is a compile-time constant.
pub struct FrameDecoder<S> {
    source: S,
}

impl<S: ByteSource> FrameDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Read a 4-byte length followed by a 1-byte type.
    pub fn read_header(&mut self) -> Result<FrameHeader> {
        let mut buf = self.source.read_exact(HEADER_SIZE)?;
        let mut raw = [0u8; HEADER_SIZE];
        buf.copy_to_slice(&mut raw);
        Ok(FrameHeader::parse(&raw))
    }

    /// Read an unsigned 32-bit integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = self.source.read_exact(U32_SIZE)?;
        Ok(buf.get_u32())
    }

    /// Read an IEEE-754 double. NaN and infinities pass through untouched.
    pub fn read_f64(&mut self) -> Result<f64> {
        let mut buf = self.source.read_exact(F64_SIZE)?;
        Ok(buf.get_f64())
    }

    /// Read `N` consecutive unsigned 32-bit integers.
    pub fn read_u32_array<const N: usize>(&mut self) -> Result<[u32; N]> {
        let mut buf = self.source.read_exact(N * U32_SIZE)?;
        Ok(std::array::from_fn(|_| buf.get_u32()))
    }

    /// Read `N` consecutive doubles.
    pub fn read_f64_array<const N: usize>(&mut self) -> Result<[f64; N]> {
        let mut buf = self.source.read_exact(N * F64_SIZE)?;
        Ok(std::array::from_fn(|_| buf.get_f64()))
    }

    /// Discard `n` bytes.
    pub fn skip(&mut self, n: u64) -> Result<()> {
        self.source.skip(n)
    }

    /// Total bytes consumed from the source.
    pub fn consumed(&self) -> u64 {
        self.source.consumed()
    }
}
