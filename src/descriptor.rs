//! File descriptor block: the fixed 32 bytes at the start of every SEG-2 file.
//!
//! ```text
//! 0      magic (0x55 little-endian, 0x3A big-endian)
//! 1      unused
//! 2..4   revision
//! 4..6   M, size of the trace pointer sub-block in bytes
//! 6..8   N, number of traces
//! 8..11  string terminator: size, byte 1, byte 2
//! 11..14 line terminator: size, byte 1, byte 2
//! 14..32 reserved
//! ```

use std::io::{Read, Seek};

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::io::{ByteReader, u16_at};
use crate::types::{ByteOrder, Terminator};
use crate::{Result, Seg2Error};

/// Size of the file descriptor block.
pub const FILE_DESCRIPTOR_LEN: usize = 32;

/// The only SEG-2 revision this crate understands.
pub const SUPPORTED_REVISION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub byte_order: ByteOrder,
    pub revision: u16,
    /// Declared size of the trace pointer sub-block (M).
    pub pointer_subblock_size: u16,
    /// Number of traces (N).
    pub trace_count: u16,
    pub string_terminator: Terminator,
    pub line_terminator: Terminator,
}

impl FileDescriptor {
    /// Parse the descriptor from the start of the stream.
    ///
    /// Sets the reader's byte order and leaves it at offset 32. An
    /// unrecognized magic byte fails before anything else is read.
    pub fn parse<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        reader.seek_to(0)?;
        let magic = reader.read_u8()?;
        let byte_order =
            ByteOrder::from_magic(magic).ok_or(Seg2Error::UnrecognizedFormat { found: magic })?;
        reader.set_byte_order(byte_order);

        let rest = reader.read_array::<{ FILE_DESCRIPTOR_LEN - 1 }>()?;
        // `rest` starts at file offset 1
        let revision = u16_at(&rest, 1, byte_order);
        let pointer_subblock_size = u16_at(&rest, 3, byte_order);
        let trace_count = u16_at(&rest, 5, byte_order);
        let string_terminator = Terminator::new(rest[7], rest[8], rest[9]);
        let line_terminator = Terminator::new(rest[10], rest[11], rest[12]);

        if revision != SUPPORTED_REVISION {
            diagnostics.push(Diagnostic::UnsupportedRevision { revision });
        }

        log::debug!(
            "SEG-2 rev {revision}, {byte_order}, {trace_count} traces, \
             pointer sub-block {pointer_subblock_size} bytes"
        );

        Ok(Self {
            byte_order,
            revision,
            pointer_subblock_size,
            trace_count,
            string_terminator,
            line_terminator,
        })
    }
}
