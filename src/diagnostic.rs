//! Non-fatal findings collected during a decode.
//!
//! Structural problems abort with a [`Seg2Error`](crate::Seg2Error).
//! Content problems do not: they are recorded here, logged with
//! `log::warn!`, and decoding continues.

use std::fmt;

/// Where a free-format block lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockScope {
    /// The file-level header following the trace pointer sub-block.
    File,
    /// The header of the trace at this index in pointer order.
    Trace(usize),
}

impl fmt::Display for BlockScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file header"),
            Self::Trace(i) => write!(f, "trace {i} header"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file declares a revision other than 1.
    UnsupportedRevision { revision: u16 },
    /// A free-format chunk that could not be read as `KEY VALUE` was discarded.
    MalformedHeaderEntry {
        /// Offset of the chunk's length prefix.
        offset: u64,
        scope: BlockScope,
        /// Chunk text, lossily decoded.
        raw: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedRevision { revision } => {
                write!(f, "SEG-2 revision {revision} is not supported, reading as revision 1")
            }
            Self::MalformedHeaderEntry { offset, scope, raw } => {
                write!(f, "{scope}: discarded malformed entry at offset {offset}: {raw:?}")
            }
        }
    }
}

/// Ordered list of diagnostics for one decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a warning.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of discarded free-format entries.
    pub fn malformed_entries(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedHeaderEntry { .. }))
            .count()
    }

    /// Revision warning, if the file declared an unexpected revision.
    pub fn unsupported_revision(&self) -> Option<u16> {
        self.items.iter().find_map(|d| match d {
            Diagnostic::UnsupportedRevision { revision } => Some(*revision),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
