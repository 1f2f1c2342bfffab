//! Endian-aware primitive reads over a seekable byte stream.
//!
//! [`ByteReader`] is the only place that touches the underlying stream.
//! Every read either yields the full field width or fails with
//! [`Seg2Error::TruncatedStream`], carrying the offset at which the field
//! started.

use std::io::{Read, Seek, SeekFrom};

use crate::types::ByteOrder;
use crate::{Result, Seg2Error};

/// Reader over one exclusively-owned SEG-2 stream.
///
/// Offsets are absolute from the start of the stream, matching the trace
/// pointers stored in the file.
pub struct ByteReader<R> {
    inner: R,
    order: ByteOrder,
    pos: u64,
}

impl<R: Read + Seek> ByteReader<R> {
    /// Wrap a stream. The byte order defaults to little-endian until
    /// [`set_byte_order`](Self::set_byte_order) is called.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            order: ByteOrder::Little,
            pos: 0,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Current absolute offset.
    pub fn position(&self) -> u64 {
        self.pos
    }

    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.pos = self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Skip `n` bytes. The skipped bytes must exist.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let start = self.pos;
        let mut buf = Vec::new();
        let got = (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;
        self.pos += got as u64;
        if got < n {
            return Err(Seg2Error::TruncatedStream {
                offset: start,
                expected: n,
                actual: got,
            });
        }
        Ok(buf)
    }

    /// Read a fixed-size array of bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let start = self.pos;
        let mut buf = [0u8; N];
        let mut filled = 0;
        while filled < N {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.pos += filled as u64;
        if filled < N {
            return Err(Seg2Error::TruncatedStream {
                offset: start,
                expected: N,
                actual: filled,
            });
        }
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(u16_at(&bytes, 0, self.order))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(u32_at(&bytes, 0, self.order))
    }
}

/// Decode a `u16` at `offset` in an already-read block.
///
/// The caller guarantees `data.len() >= offset + 2`.
pub(crate) fn u16_at(data: &[u8], offset: usize, order: ByteOrder) -> u16 {
    let bytes = [data[offset], data[offset + 1]];
    match order {
        ByteOrder::Big => u16::from_be_bytes(bytes),
        ByteOrder::Little => u16::from_le_bytes(bytes),
    }
}

/// Decode a `u32` at `offset` in an already-read block.
///
/// The caller guarantees `data.len() >= offset + 4`.
pub(crate) fn u32_at(data: &[u8], offset: usize, order: ByteOrder) -> u32 {
    let bytes = [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ];
    match order {
        ByteOrder::Big => u32::from_be_bytes(bytes),
        ByteOrder::Little => u32::from_le_bytes(bytes),
    }
}
