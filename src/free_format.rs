//! Free-format text blocks.
//!
//! Both the file header and every trace header are stored as a run of
//! length-prefixed chunks, each holding `KEY VALUE` text followed by a
//! string terminator, closed by a chunk of length zero:
//!
//! ```text
//! u16 L | L-2 bytes "KEY VALUE\0" | u16 L | ... | u16 0
//! ```
//!
//! Real producers emit plenty of text that does not fit this shape, so a
//! bad chunk is dropped and reported rather than failing the decode.

use std::io::{Read, Seek};

use indexmap::IndexMap;

use crate::Result;
use crate::diagnostic::{BlockScope, Diagnostic, Diagnostics};
use crate::io::ByteReader;

/// Ordered key/value text from one free-format block.
///
/// Keys keep the position of their first appearance; a repeated key
/// replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeFormBlock {
    entries: IndexMap<String, String>,
}

impl FreeFormBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    pub fn into_map(self) -> IndexMap<String, String> {
        self.entries
    }

    fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FreeFormBlock {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut block = Self::new();
        for (k, v) in iter {
            block.insert(k.into(), v.into());
        }
        block
    }
}

/// Parse one free-format block starting at the reader's position.
///
/// Stops after the zero-length marker. Running out of stream before the
/// marker is a [`TruncatedStream`](crate::Seg2Error::TruncatedStream);
/// anything wrong inside a chunk only costs that chunk.
pub fn parse_free_format<R: Read + Seek>(
    reader: &mut ByteReader<R>,
    scope: BlockScope,
    diagnostics: &mut Diagnostics,
) -> Result<FreeFormBlock> {
    let mut block = FreeFormBlock::new();
    loop {
        let offset = reader.position();
        let len = reader.read_u16()? as usize;
        if len == 0 {
            break;
        }
        if len < 2 {
            // the length covers its own two bytes, so 1 is meaningless
            diagnostics.push(Diagnostic::MalformedHeaderEntry {
                offset,
                scope,
                raw: String::new(),
            });
            continue;
        }

        let text = reader.read_bytes(len - 2)?;
        match split_entry(&text) {
            Some((key, value)) => block.insert(key, value),
            None => diagnostics.push(Diagnostic::MalformedHeaderEntry {
                offset,
                scope,
                raw: String::from_utf8_lossy(&text).into_owned(),
            }),
        }
    }
    Ok(block)
}

/// Split chunk text into key and value at the first whitespace run and
/// drop the value's trailing terminator byte.
///
/// Returns `None` when either side is missing or is not UTF-8.
fn split_entry(text: &[u8]) -> Option<(String, String)> {
    let start = text.iter().position(|b| !b.is_ascii_whitespace())?;
    let text = &text[start..];
    let key_end = text.iter().position(u8::is_ascii_whitespace)?;
    let (key, rest) = text.split_at(key_end);
    let value_start = rest.iter().position(|b| !b.is_ascii_whitespace())?;
    let value = &rest[value_start..];
    let value = &value[..value.len() - 1];

    let key = std::str::from_utf8(key).ok()?;
    let value = std::str::from_utf8(value).ok()?;
    Some((key.to_string(), value.to_string()))
}
