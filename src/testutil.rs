//! Synthetic SEG-2 fixtures for unit tests.

use crate::types::ByteOrder;

pub(crate) fn put_u16(out: &mut Vec<u8>, v: u16, order: ByteOrder) {
    match order {
        ByteOrder::Big => out.extend_from_slice(&v.to_be_bytes()),
        ByteOrder::Little => out.extend_from_slice(&v.to_le_bytes()),
    }
}

pub(crate) fn put_u32(out: &mut Vec<u8>, v: u32, order: ByteOrder) {
    match order {
        ByteOrder::Big => out.extend_from_slice(&v.to_be_bytes()),
        ByteOrder::Little => out.extend_from_slice(&v.to_le_bytes()),
    }
}

/// One length-prefixed chunk holding `text` verbatim.
pub(crate) fn chunk(text: &[u8], order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::new();
    put_u16(&mut out, (text.len() + 2) as u16, order);
    out.extend_from_slice(text);
    out
}

/// A `KEY VALUE` chunk with a NUL string terminator.
pub(crate) fn entry(key: &str, value: &str, order: ByteOrder) -> Vec<u8> {
    chunk(format!("{key} {value}\0").as_bytes(), order)
}

/// A free-format block: the given chunks followed by the zero-length marker.
pub(crate) fn block(chunks: &[Vec<u8>], order: ByteOrder) -> Vec<u8> {
    let mut out: Vec<u8> = chunks.concat();
    put_u16(&mut out, 0, order);
    out
}

pub(crate) fn pairs_block(pairs: &[(&str, &str)], order: ByteOrder) -> Vec<u8> {
    let chunks: Vec<Vec<u8>> = pairs.iter().map(|(k, v)| entry(k, v, order)).collect();
    block(&chunks, order)
}

/// 32-byte file descriptor block.
pub(crate) fn file_descriptor(order: ByteOrder, revision: u16, m: u16, n: u16) -> Vec<u8> {
    let mut out = vec![order.magic(), 0x00];
    put_u16(&mut out, revision, order);
    put_u16(&mut out, m, order);
    put_u16(&mut out, n, order);
    // string terminator: 1 byte NUL; line terminator: 1 byte LF
    out.extend_from_slice(&[1, 0x00, 0x00, 1, b'\n', 0x00]);
    out.resize(32, 0);
    out
}

/// 32-byte trace descriptor block.
pub(crate) fn trace_descriptor(order: ByteOrder, block_id: u16, ns: u32, code: u8) -> Vec<u8> {
    let mut out = Vec::new();
    put_u16(&mut out, block_id, order);
    put_u16(&mut out, 32, order);
    put_u32(&mut out, 0, order);
    put_u32(&mut out, ns, order);
    out.push(code);
    out.resize(32, 0);
    out
}

pub(crate) fn f32_payload(samples: &[f32], order: ByteOrder) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| match order {
            ByteOrder::Big => s.to_be_bytes(),
            ByteOrder::Little => s.to_le_bytes(),
        })
        .collect()
}

pub(crate) fn i16_payload(samples: &[i16], order: ByteOrder) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| match order {
            ByteOrder::Big => s.to_be_bytes(),
            ByteOrder::Little => s.to_le_bytes(),
        })
        .collect()
}

/// Trace descriptor, header block, one padding byte, payload.
pub(crate) fn trace_block(
    order: ByteOrder,
    code: u8,
    ns: u32,
    header: &[(&str, &str)],
    payload: &[u8],
) -> Vec<u8> {
    let mut out = trace_descriptor(order, 0x4422, ns, code);
    out.extend(pairs_block(header, order));
    out.push(0x00);
    out.extend_from_slice(payload);
    out
}

/// A complete file: descriptor, pointer table, file header, traces laid out
/// back to back in the given order.
pub(crate) fn build_file(
    order: ByteOrder,
    revision: u16,
    file_header: &[(&str, &str)],
    traces: &[Vec<u8>],
) -> Vec<u8> {
    let n = traces.len() as u16;
    let m = n * 4;
    let header = pairs_block(file_header, order);

    let mut out = file_descriptor(order, revision, m, n);
    let mut next = (32 + m as usize + header.len()) as u32;
    for trace in traces {
        put_u32(&mut out, next, order);
        next += trace.len() as u32;
    }
    out.extend(header);
    for trace in traces {
        out.extend_from_slice(trace);
    }
    out
}
