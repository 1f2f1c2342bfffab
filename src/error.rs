//! Error types for SEG-2 decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Seg2Error {
    #[error("unrecognized file format: first byte {found:#04X} is not a SEG-2 marker")]
    UnrecognizedFormat { found: u8 },

    #[error("stream truncated at offset {offset}: expected {expected} bytes, got {actual}")]
    TruncatedStream {
        offset: u64,
        expected: usize,
        actual: usize,
    },

    #[error(
        "trace pointer sub-block too small: {declared} bytes declared, {required} required"
    )]
    TruncatedPointerTable { declared: u16, required: usize },

    #[error("trace {trace} at offset {offset}: block id {found:#06X}, expected 0x4422")]
    InvalidTraceMagic { trace: usize, offset: u32, found: u16 },

    #[error("trace {trace} at offset {offset}: unsupported data format code {code}")]
    UnsupportedDataFormat { trace: usize, offset: u32, code: u8 },

    #[error("trace {trace} has {actual} samples, expected {expected}")]
    RaggedTraces {
        trace: usize,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Seg2Error>;
