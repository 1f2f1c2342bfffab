//! Shared types: [`ByteOrder`], [`DataFormat`], and [`Terminator`].

use std::fmt;

/// Magic byte of a little-endian SEG-2 file.
pub const MAGIC_LITTLE: u8 = 0x55;
/// Magic byte of a big-endian SEG-2 file.
pub const MAGIC_BIG: u8 = 0x3A;

/// Byte order of every multi-byte field in a SEG-2 file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// Detect the byte order from the first byte of the file.
    pub fn from_magic(byte: u8) -> Option<Self> {
        match byte {
            MAGIC_LITTLE => Some(Self::Little),
            MAGIC_BIG => Some(Self::Big),
            _ => None,
        }
    }

    pub fn magic(self) -> u8 {
        match self {
            Self::Little => MAGIC_LITTLE,
            Self::Big => MAGIC_BIG,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

/// Numeric encoding of the samples in one trace.
///
/// Code 3 (20-bit packed float) is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// 16-bit signed integer (code 1).
    Int16,
    /// 32-bit signed integer (code 2).
    Int32,
    /// 32-bit IEEE float (code 4).
    Float32,
    /// 64-bit IEEE double (code 5).
    Float64,
}

impl DataFormat {
    /// Convert a raw data format code from a trace descriptor.
    ///
    /// Returns `None` for any code outside {1, 2, 4, 5}; the caller
    /// attaches the trace index to the error.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Int16),
            2 => Some(Self::Int32),
            4 => Some(Self::Float32),
            5 => Some(Self::Float64),
            _ => None,
        }
    }

    pub fn to_code(self) -> u8 {
        match self {
            Self::Int16 => 1,
            Self::Int32 => 2,
            Self::Float32 => 4,
            Self::Float64 => 5,
        }
    }

    /// Size of one sample in bytes.
    pub fn width(self) -> usize {
        match self {
            Self::Int16 => 2,
            Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int16 => write!(f, "INT16"),
            Self::Int32 => write!(f, "INT32"),
            Self::Float32 => write!(f, "FLOAT32"),
            Self::Float64 => write!(f, "FLOAT64"),
        }
    }
}

/// A 1- or 2-byte string or line terminator declared in the file descriptor.
///
/// Terminators are advisory: free-format chunks are delimited by their
/// length prefixes, never by scanning for these bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminator {
    bytes: [u8; 2],
    len: u8,
}

impl Terminator {
    /// Build a terminator from its declared size and two candidate bytes.
    ///
    /// A declared size of 2 keeps both bytes; anything else keeps only the
    /// first.
    pub fn new(size: u8, first: u8, second: u8) -> Self {
        let len = if size == 2 { 2 } else { 1 };
        Self {
            bytes: [first, second],
            len,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of terminator bytes (1 or 2).
    pub fn size(&self) -> usize {
        self.len as usize
    }
}
