// src/bytes.rs
#![forbid(unsafe_code)]

use std::io::Cursor;

use byteorder::{ReadBytesExt, LE};

use crate::error::{Error, Result};

/// Little-endian slice reader that turns premature EOF into
/// [`Error::Truncated`] with a short context string.
pub(crate) struct Reader<'a> {
    cur: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            cur: Cursor::new(data),
        }
    }

    pub(crate) fn u8(&mut self, what: &'static str) -> Result<u8> {
        self.cur.read_u8().map_err(|_| Error::Truncated(what))
    }

    pub(crate) fn u16(&mut self, what: &'static str) -> Result<u16> {
        self.cur.read_u16::<LE>().map_err(|_| Error::Truncated(what))
    }

    pub(crate) fn u32(&mut self, what: &'static str) -> Result<u32> {
        self.cur.read_u32::<LE>().map_err(|_| Error::Truncated(what))
    }

    /// Borrow the next `n` bytes without copying.
    pub(crate) fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8]> {
        let start = self.cur.position() as usize;
        let data = *self.cur.get_ref();
        let end = start.checked_add(n).ok_or(Error::Truncated(what))?;
        if end > data.len() {
            return Err(Error::Truncated(what));
        }
        self.cur.set_position(end as u64);
        Ok(&data[start..end])
    }

    pub(crate) fn skip(&mut self, n: usize, what: &'static str) -> Result<()> {
        self.take(n, what).map(|_| ())
    }

    pub(crate) fn remaining(&self) -> usize {
        let data = *self.cur.get_ref();
        data.len().saturating_sub(self.cur.position() as usize)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// Append-only little-endian writer. Writing to a `Vec` cannot fail, so
/// every method is infallible.
#[derive(Default)]
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub(crate) fn u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn bytes(&mut self, v: &[u8]) {
        self.buf.extend_from_slice(v);
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
