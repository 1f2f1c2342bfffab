//! Decode whole SEG-2 files.
//!
//! [`decode_from`] walks a stream in one forward pass: file descriptor,
//! trace pointer sub-block, file header, then every trace in pointer order.
//! [`decode_header_from`] stops after the file header and never touches
//! trace data. The byte-slice and path variants wrap these two.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::Result;
use crate::array::TraceArray;
use crate::descriptor::FileDescriptor;
use crate::diagnostic::{BlockScope, Diagnostics};
use crate::free_format::{FreeFormBlock, parse_free_format};
use crate::io::ByteReader;
use crate::options::DecodeOptions;
use crate::pointers::read_trace_pointers;
use crate::trace::{Trace, read_trace};

/// File-level information, without any trace data.
#[derive(Debug, Clone, PartialEq)]
pub struct Seg2Header {
    pub descriptor: FileDescriptor,
    /// Absolute trace offsets in pointer order.
    pub trace_pointers: Vec<u32>,
    pub file_header: FreeFormBlock,
    pub diagnostics: Diagnostics,
}

/// A fully decoded SEG-2 file.
#[derive(Debug, Clone, PartialEq)]
pub struct Seg2File {
    pub descriptor: FileDescriptor,
    pub file_header: FreeFormBlock,
    /// Traces in pointer order, which need not match storage order.
    pub traces: Vec<Trace>,
    pub diagnostics: Diagnostics,
}

impl Seg2File {
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Per-trace header mappings in pointer order.
    pub fn trace_headers(&self) -> Vec<&FreeFormBlock> {
        self.traces.iter().map(|t| &t.header).collect()
    }

    /// Stack all traces into a `[N × NS]` array.
    ///
    /// Fails with [`RaggedTraces`](crate::Seg2Error::RaggedTraces) if the
    /// traces do not share one sample count.
    pub fn to_array(&self) -> Result<TraceArray> {
        TraceArray::from_traces(&self.traces)
    }
}

impl fmt::Display for Seg2File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SEG-2 rev {} | {} | {} traces | {} header entries",
            self.descriptor.revision,
            self.descriptor.byte_order,
            self.traces.len(),
            self.file_header.len(),
        )?;
        if !self.diagnostics.is_empty() {
            write!(f, " | {} warnings", self.diagnostics.len())?;
        }
        Ok(())
    }
}

/// Descriptor, pointer table, and file header: everything up to the traces.
fn read_preamble<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    diagnostics: &mut Diagnostics,
) -> Result<(FileDescriptor, Vec<u32>, FreeFormBlock)> {
    let descriptor = FileDescriptor::parse(reader, diagnostics)?;
    let pointers = read_trace_pointers(reader, &descriptor)?;
    let file_header = parse_free_format(reader, BlockScope::File, diagnostics)?;
    Ok((descriptor, pointers, file_header))
}

/// Read only the file-level header from a seekable stream.
///
/// The stream must start at the first byte of the SEG-2 file.
pub fn decode_header_from<R: Read + Seek>(reader: R) -> Result<Seg2Header> {
    let mut reader = ByteReader::new(reader);
    let mut diagnostics = Diagnostics::new();
    let (descriptor, trace_pointers, file_header) = read_preamble(&mut reader, &mut diagnostics)?;
    Ok(Seg2Header {
        descriptor,
        trace_pointers,
        file_header,
        diagnostics,
    })
}

/// Decode a whole SEG-2 file from a seekable stream.
///
/// The stream must start at the first byte of the SEG-2 file. Any
/// structural error aborts the decode; no partial result is returned.
pub fn decode_from<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Seg2File> {
    let mut reader = ByteReader::new(reader);
    let mut diagnostics = Diagnostics::new();
    let (descriptor, pointers, file_header) = read_preamble(&mut reader, &mut diagnostics)?;

    let mut traces = Vec::with_capacity(pointers.len());
    for (index, &pointer) in pointers.iter().enumerate() {
        traces.push(read_trace(
            &mut reader,
            index,
            pointer,
            &descriptor,
            options,
            &mut diagnostics,
        )?);
    }

    Ok(Seg2File {
        descriptor,
        file_header,
        traces,
        diagnostics,
    })
}

/// Decode a whole SEG-2 file held in memory, with default options.
pub fn decode(data: &[u8]) -> Result<Seg2File> {
    decode_from(Cursor::new(data), &DecodeOptions::default())
}

/// Read only the file-level header of a SEG-2 file held in memory.
pub fn decode_header(data: &[u8]) -> Result<Seg2Header> {
    decode_header_from(Cursor::new(data))
}

/// Open and decode a SEG-2 file with default options.
///
/// The file is closed before this returns, on success or failure.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Seg2File> {
    open_with(path, &DecodeOptions::default())
}

pub fn open_with<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Seg2File> {
    let file = File::open(path)?;
    decode_from(BufReader::new(file), options)
}

/// Open a SEG-2 file and read only its file-level header.
pub fn open_header<P: AsRef<Path>>(path: P) -> Result<Seg2Header> {
    let file = File::open(path)?;
    decode_header_from(BufReader::new(file))
}
