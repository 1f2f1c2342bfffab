//! Trace blocks: descriptor, free-format header, and sample payload.
//!
//! Each trace pointer locates a 32-byte descriptor:
//!
//! ```text
//! 0..2   block id, always 0x4422
//! 2..4   descriptor block size (X)
//! 4..8   data block size (Y)
//! 8..12  number of samples (NS)
//! 12     data format code
//! 13..32 reserved
//! ```
//!
//! The trace header follows at pointer+32, then the post-header padding,
//! then NS samples.

use std::io::{Read, Seek};

use crate::descriptor::FileDescriptor;
use crate::diagnostic::{BlockScope, Diagnostics};
use crate::free_format::{FreeFormBlock, parse_free_format};
use crate::io::{ByteReader, u16_at, u32_at};
use crate::options::DecodeOptions;
use crate::samples::{Samples, decode_samples};
use crate::types::DataFormat;
use crate::{Result, Seg2Error};

/// Block id every trace descriptor starts with.
pub const TRACE_BLOCK_ID: u16 = 0x4422;

/// Size of the trace descriptor block.
pub const TRACE_DESCRIPTOR_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceDescriptor {
    /// Declared size of the descriptor block (X). Not used for navigation.
    pub block_size: u16,
    /// Declared size of the sample block (Y). Not used for navigation.
    pub data_size: u32,
    /// Number of samples (NS).
    pub sample_count: u32,
    pub data_format: DataFormat,
}

impl TraceDescriptor {
    /// Bytes occupied by the sample payload.
    pub fn payload_len(&self) -> usize {
        self.sample_count as usize * self.data_format.width()
    }
}

/// One decoded trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Absolute offset of the trace descriptor.
    pub offset: u32,
    pub descriptor: TraceDescriptor,
    pub header: FreeFormBlock,
    pub samples: Samples,
}

/// Decode the trace at `pointer`. `index` is its position in pointer order.
pub fn read_trace<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    index: usize,
    pointer: u32,
    file: &FileDescriptor,
    options: &DecodeOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Trace> {
    reader.seek_to(pointer as u64)?;
    let block_id = reader.read_u16()?;
    if block_id != TRACE_BLOCK_ID {
        return Err(Seg2Error::InvalidTraceMagic {
            trace: index,
            offset: pointer,
            found: block_id,
        });
    }

    // `rest` starts at descriptor offset 2
    let rest = reader.read_array::<{ TRACE_DESCRIPTOR_LEN - 2 }>()?;
    let order = reader.byte_order();
    let code = rest[10];
    let data_format = DataFormat::from_code(code).ok_or(Seg2Error::UnsupportedDataFormat {
        trace: index,
        offset: pointer,
        code,
    })?;
    let descriptor = TraceDescriptor {
        block_size: u16_at(&rest, 0, order),
        data_size: u32_at(&rest, 2, order),
        sample_count: u32_at(&rest, 6, order),
        data_format,
    };

    let header = parse_free_format(reader, BlockScope::Trace(index), diagnostics)?;
    reader.skip(options.padding.bytes(file))?;

    log::debug!(
        "trace {index} at {pointer}: {} x {}, payload at {}",
        descriptor.sample_count,
        descriptor.data_format,
        reader.position()
    );

    let payload = reader.read_bytes(descriptor.payload_len())?;
    let samples = decode_samples(&payload, data_format, order);

    Ok(Trace {
        offset: pointer,
        descriptor,
        header,
        samples,
    })
}
