// src/dat/rle.rs
#![forbid(unsafe_code)]

use crate::bytes::Reader;
use crate::cc1::LAYER_LEN;
use crate::error::{Error, Result};

/// Expand one run-length-encoded map layer to exactly [`LAYER_LEN`]
/// bytes. `0xFF` marks a run: the next byte is the count, the byte
/// after it the value. Anything else is a literal.
pub fn decode_layer(data: &[u8]) -> Result<Vec<u8>> {
    let mut r = Reader::new(data);
    let mut out = Vec::with_capacity(LAYER_LEN);
    while out.len() < LAYER_LEN {
        let byte = r.u8("map layer")?;
        if byte == 0xFF {
            let count = r.u8("run length")? as usize;
            let value = r.u8("run value")?;
            if out.len() + count > LAYER_LEN {
                return Err(Error::BadRle("run overflows the 1024-byte layer"));
            }
            out.resize(out.len() + count, value);
        } else {
            out.push(byte);
        }
    }
    if !r.is_empty() {
        log::warn!("{} unconsumed bytes after map layer", r.remaining());
    }
    Ok(out)
}

/// Compress one 1024-byte layer. Runs shorter than four bytes are
/// cheaper written out as literals, so only longer runs get the
/// three-byte `0xFF, count, value` form.
pub fn encode_layer(layer: &[u8]) -> Vec<u8> {
    debug_assert_eq!(layer.len(), LAYER_LEN);
    let mut out = Vec::new();
    let mut i = 0;
    while i < layer.len() {
        let value = layer[i];
        let mut run = 1;
        while i + run < layer.len() && layer[i + run] == value && run < 255 {
            run += 1;
        }
        if run <= 3 {
            out.resize(out.len() + run, value);
        } else {
            out.push(0xFF);
            out.push(run as u8);
            out.push(value);
        }
        i += run;
    }
    out
}
