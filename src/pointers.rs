//! Trace pointer sub-block: N absolute trace offsets packed into M bytes.

use std::io::{Read, Seek};

use crate::descriptor::FileDescriptor;
use crate::io::{ByteReader, u32_at};
use crate::{Result, Seg2Error};

/// Read the trace pointer sub-block that follows the file descriptor.
///
/// Consumes exactly M bytes; only the first N×4 hold pointers, the rest is
/// slack reserved by the producer.
pub fn read_trace_pointers<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    descriptor: &FileDescriptor,
) -> Result<Vec<u32>> {
    let declared = descriptor.pointer_subblock_size;
    let count = descriptor.trace_count as usize;
    let required = count * 4;
    if (declared as usize) < required {
        return Err(Seg2Error::TruncatedPointerTable { declared, required });
    }

    let block = reader.read_bytes(declared as usize)?;
    let order = reader.byte_order();
    Ok((0..count).map(|i| u32_at(&block, i * 4, order)).collect())
}
