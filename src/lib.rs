//! Pure Rust reader for SEG-2 seismic trace files.
//!
//! Zero `unsafe`. Detects byte order from the file's magic byte, reads the
//! trace pointer table, the free-format file and trace headers, and
//! INT16/INT32/FLOAT32/FLOAT64 sample payloads. Only revision 1 of the
//! format is documented; other revisions are read the same way and
//! flagged with a [`Diagnostic`].
//!
//! # Decoding a file
//!
//! ```no_run
//! let file = seg2_rs::open("shot_0042.sg2")?;
//!
//! println!("{file}");
//! for (key, value) in file.file_header.iter() {
//!     println!("{key} = {value}");
//! }
//!
//! let array = file.to_array()?;
//! let (traces, samples) = array.shape();
//! assert_eq!(traces, file.trace_headers().len());
//! # let _ = samples;
//! # Ok::<(), seg2_rs::Seg2Error>(())
//! ```
//!
//! # Reading only the file header
//!
//! ```no_run
//! let header = seg2_rs::open_header("shot_0042.sg2")?;
//! println!(
//!     "{} traces, acquired {}",
//!     header.trace_pointers.len(),
//!     header.file_header.get("ACQUISITION_DATE").unwrap_or("?"),
//! );
//! # Ok::<(), seg2_rs::Seg2Error>(())
//! ```
//!
//! # Content problems are not errors
//!
//! Structural damage (bad magic, bad trace block id, unsupported data
//! format, truncation) fails the decode with a [`Seg2Error`]. Header text
//! that does not parse as `KEY VALUE` is dropped and reported in
//! [`Seg2File::diagnostics`], and logged through the `log` facade.
//!
//! ```no_run
//! use seg2_rs::{DecodeOptions, PaddingPolicy};
//!
//! let options = DecodeOptions::new().with_padding(PaddingPolicy::StringTerminator);
//! let file = seg2_rs::open_with("shot_0042.sg2", &options)?;
//! if file.diagnostics.malformed_entries() > 0 {
//!     for d in &file.diagnostics {
//!         eprintln!("{d}");
//!     }
//! }
//! # Ok::<(), seg2_rs::Seg2Error>(())
//! ```

pub mod array;
pub mod decode;
pub mod descriptor;
pub mod diagnostic;
pub mod error;
pub mod free_format;
pub mod io;
pub mod options;
pub mod pointers;
pub mod samples;
pub mod trace;
pub mod types;

#[cfg(test)]
mod testutil;

pub use array::TraceArray;
pub use descriptor::FileDescriptor;
pub use diagnostic::{BlockScope, Diagnostic, Diagnostics};
pub use error::{Result, Seg2Error};
pub use free_format::FreeFormBlock;
pub use options::{DecodeOptions, PaddingPolicy};
pub use samples::Samples;
pub use trace::{Trace, TraceDescriptor};
pub use types::{ByteOrder, DataFormat, Terminator};

pub use decode::{
    Seg2File, Seg2Header, decode, decode_from, decode_header, decode_header_from, open,
    open_header, open_with,
};
