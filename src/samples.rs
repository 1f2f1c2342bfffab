//! Trace sample payloads.

use crate::types::{ByteOrder, DataFormat};

/// Decoded sample data, one variant per supported data format.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Int16(v) => v.len(),
            Samples::Int32(v) => v.len(),
            Samples::Float32(v) => v.len(),
            Samples::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn format(&self) -> DataFormat {
        match self {
            Samples::Int16(_) => DataFormat::Int16,
            Samples::Int32(_) => DataFormat::Int32,
            Samples::Float32(_) => DataFormat::Float32,
            Samples::Float64(_) => DataFormat::Float64,
        }
    }

    /// Widen every sample to `f64`. Lossless for all four formats.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Samples::Int16(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::Int32(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::Float32(v) => v.iter().map(|&s| s as f64).collect(),
            Samples::Float64(v) => v.clone(),
        }
    }
}

/// Decode a payload of exactly `ns * format.width()` bytes.
///
/// The caller reads the payload, so length is already checked.
pub(crate) fn decode_samples(data: &[u8], format: DataFormat, byte_order: ByteOrder) -> Samples {
    debug_assert_eq!(data.len() % format.width(), 0);
    match format {
        DataFormat::Int16 => Samples::Int16(
            data.chunks_exact(2)
                .map(|c| {
                    let bytes = [c[0], c[1]];
                    match byte_order {
                        ByteOrder::Big => i16::from_be_bytes(bytes),
                        ByteOrder::Little => i16::from_le_bytes(bytes),
                    }
                })
                .collect(),
        ),
        DataFormat::Int32 => Samples::Int32(
            data.chunks_exact(4)
                .map(|c| {
                    let bytes = [c[0], c[1], c[2], c[3]];
                    match byte_order {
                        ByteOrder::Big => i32::from_be_bytes(bytes),
                        ByteOrder::Little => i32::from_le_bytes(bytes),
                    }
                })
                .collect(),
        ),
        DataFormat::Float32 => Samples::Float32(
            data.chunks_exact(4)
                .map(|c| {
                    let bytes = [c[0], c[1], c[2], c[3]];
                    match byte_order {
                        ByteOrder::Big => f32::from_be_bytes(bytes),
                        ByteOrder::Little => f32::from_le_bytes(bytes),
                    }
                })
                .collect(),
        ),
        DataFormat::Float64 => Samples::Float64(
            data.chunks_exact(8)
                .map(|c| {
                    let bytes = [c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]];
                    match byte_order {
                        ByteOrder::Big => f64::from_be_bytes(bytes),
                        ByteOrder::Little => f64::from_le_bytes(bytes),
                    }
                })
                .collect(),
        ),
    }
}
