// src/cc2/pack.rs
#![forbid(unsafe_code)]

/*!
The byte-level compression wrapped around packed map payloads.

Framing: a u16 little-endian decompressed length, then a token stream.
A token `t < 0x80` is a literal run of `t` bytes. A token `t >= 0x80`
is a back-reference copying `t - 0x80` bytes from `offset` bytes back
in the output, where `offset` is the following byte; copies may overlap
their own output.
*/

use crate::bytes::{Reader, Writer};
use crate::error::{Error, Result};
use crate::MAX_SECTION_LEN;

/// Longest copy a single back-reference token can express.
const MAX_REF_LEN: usize = 0x7F;

/// Longest literal run a single token can express.
const MAX_LITERAL_RUN: usize = 0x7F;

/// How far back a reference can reach (one offset byte).
const WINDOW: usize = 0xFF;

/// Matches shorter than this are cheaper left as literals.
const MIN_MATCH: usize = 4;

/// Decompress a packed section.
pub fn unpack(packed: &[u8]) -> Result<Vec<u8>> {
    let mut r = Reader::new(packed);
    let out_len = r.u16("unpacked length")? as usize;
    if out_len > MAX_SECTION_LEN {
        return Err(Error::LayerTooLarge {
            len: out_len,
            max: MAX_SECTION_LEN,
        });
    }
    let mut out = Vec::with_capacity(out_len);
    while out.len() < out_len {
        let token = r.u8("pack token")?;
        if token < 0x80 {
            out.extend_from_slice(r.take(token as usize, "literal run")?);
        } else {
            let count = (token - 0x80) as usize;
            let offset = r.u8("back-reference offset")? as usize;
            if offset == 0 || offset > out.len() {
                return Err(Error::BadRle("back-reference reaches before start of output"));
            }
            let mut pos = out.len() - offset;
            for _ in 0..count {
                let byte = out[pos];
                out.push(byte);
                pos += 1;
            }
        }
    }
    if out.len() != out_len {
        return Err(Error::BadRle("output overruns declared length"));
    }
    Ok(out)
}

/// Compress a section; inverse of [`unpack`] for any input that fits
/// the u16 length frame.
pub fn pack(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() > u16::MAX as usize {
        return Err(Error::LayerTooLarge {
            len: data.len(),
            max: u16::MAX as usize,
        });
    }
    let mut w = Writer::new();
    w.u16(data.len() as u16);

    let mut literal_start = 0;
    let mut i = 0;
    while i < data.len() {
        let (len, offset) = longest_match(data, i);
        if len >= MIN_MATCH {
            flush_literals(&mut w, &data[literal_start..i]);
            w.u8(0x80 | len as u8);
            w.u8(offset as u8);
            i += len;
            literal_start = i;
        } else {
            i += 1;
        }
    }
    flush_literals(&mut w, &data[literal_start..]);
    Ok(w.into_bytes())
}

/// Greedy search for the longest match starting at `i`, looking back
/// through the offset window. Returns `(length, offset)`.
fn longest_match(data: &[u8], i: usize) -> (usize, usize) {
    let max_len = MAX_REF_LEN.min(data.len() - i);
    if max_len < MIN_MATCH {
        return (0, 0);
    }
    let window_start = i.saturating_sub(WINDOW);
    let mut best = (0, 0);
    for j in window_start..i {
        let mut len = 0;
        while len < max_len && data[j + len] == data[i + len] {
            len += 1;
        }
        if len > best.0 {
            best = (len, i - j);
        }
    }
    best
}

fn flush_literals(w: &mut Writer, mut run: &[u8]) {
    while !run.is_empty() {
        let chunk = run.len().min(MAX_LITERAL_RUN);
        w.u8(chunk as u8);
        w.bytes(&run[..chunk]);
        run = &run[chunk..];
    }
}
