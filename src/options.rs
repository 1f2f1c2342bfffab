//! Decode configuration.

use crate::descriptor::FileDescriptor;

/// How many bytes to skip between a trace header's zero-length marker and
/// the first sample.
///
/// The SEG-2 rev1 document places the samples directly after the trace
/// header, but files seen in the field carry one extra byte there. Whether
/// that byte is always exactly one or tracks the string terminator size is
/// not settled, so both readings are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Skip a fixed number of bytes.
    Fixed(u8),
    /// Skip as many bytes as the declared string terminator.
    StringTerminator,
}

impl PaddingPolicy {
    pub fn bytes(self, descriptor: &FileDescriptor) -> usize {
        match self {
            Self::Fixed(n) => n as usize,
            Self::StringTerminator => descriptor.string_terminator.size(),
        }
    }
}

impl Default for PaddingPolicy {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

/// Options for [`decode_from`](crate::decode_from) and friends.
///
/// ```
/// use seg2_rs::{DecodeOptions, PaddingPolicy};
///
/// let options = DecodeOptions::new().with_padding(PaddingPolicy::Fixed(0));
/// assert_eq!(options.padding, PaddingPolicy::Fixed(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub padding: PaddingPolicy,
}

impl DecodeOptions {
    /// Defaults: one padding byte after each trace header.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }
}
