// src/dat/write.rs
#![forbid(unsafe_code)]

use crate::bytes::Writer;
use crate::cc1::{Level, Levelset};
use crate::dat::rle;
use crate::dat::{
    DAT_MAGIC, FIELD_AUTHOR, FIELD_CLONERS, FIELD_HINT, FIELD_MOVEMENT, FIELD_PASSWORD,
    FIELD_TITLE, FIELD_TRAPS, PASSWORD_XOR,
};
use crate::error::{Error, Result};

// A one-byte field length caps what a record can carry.
const MAX_TEXT_LEN: usize = 63;
const MAX_TRAPS: usize = 25;
const MAX_CLONERS: usize = 31;

/// Serialize a [`Levelset`] into the canonical DAT byte layout.
///
/// Every level must pass [`Level::is_valid`]; the writer is the gate
/// that keeps unserializable state out of the container.
pub fn write(set: &Levelset) -> Result<Vec<u8>> {
    if set.levels.len() > u16::MAX as usize {
        return Err(Error::InvariantViolated("level count exceeds u16"));
    }
    let mut w = Writer::new();
    w.u32(DAT_MAGIC);
    w.u16(set.levels.len() as u16);
    for (i, level) in set.levels.iter().enumerate() {
        let record = write_level(level, (i + 1) as u16)?;
        w.u16(record.len() as u16);
        w.bytes(&record);
    }
    Ok(w.into_bytes())
}

fn write_level(level: &Level, number: u16) -> Result<Vec<u8>> {
    if !level.is_valid() {
        return Err(Error::InvariantViolated("level failed is_valid"));
    }
    if level.title.chars().count() > MAX_TEXT_LEN {
        return Err(Error::InvariantViolated("title longer than 63 bytes"));
    }
    if level.hint.chars().count() > 254 {
        return Err(Error::InvariantViolated("hint longer than 254 bytes"));
    }
    if level.traps().len() > MAX_TRAPS {
        return Err(Error::InvariantViolated("more than 25 trap connections"));
    }
    if level.cloners().len() > MAX_CLONERS {
        return Err(Error::InvariantViolated("more than 31 clone connections"));
    }

    let mut w = Writer::new();
    w.u16(number);
    w.u16(level.time);
    w.u16(level.chips);
    w.u16(1); // map detail

    let mut top = Vec::with_capacity(level.cells().len());
    let mut bottom = Vec::with_capacity(level.cells().len());
    for cell in level.cells() {
        top.push(cell.top.code());
        bottom.push(cell.bottom.code());
    }
    for layer in [top, bottom] {
        let packed = rle::encode_layer(&layer);
        w.u16(packed.len() as u16);
        w.bytes(&packed);
    }

    let mut fields = Writer::new();
    if !level.title.is_empty() {
        write_text_field(&mut fields, FIELD_TITLE, &level.title);
    }
    if !level.traps().is_empty() {
        fields.u8(FIELD_TRAPS);
        fields.u8((10 * level.traps().len()) as u8);
        for (button, trap) in level.traps() {
            for v in [button.x, button.y, trap.x, trap.y] {
                fields.u16(v as u16);
            }
            fields.u16(0); // open/shut flag
        }
    }
    if !level.cloners().is_empty() {
        fields.u8(FIELD_CLONERS);
        fields.u8((8 * level.cloners().len()) as u8);
        for (button, cloner) in level.cloners() {
            for v in [button.x, button.y, cloner.x, cloner.y] {
                fields.u16(v as u16);
            }
        }
    }
    if !level.password.is_empty() {
        fields.u8(FIELD_PASSWORD);
        fields.u8((level.password.len() + 1) as u8);
        for b in level.password.bytes() {
            fields.u8(b ^ PASSWORD_XOR);
        }
        fields.u8(0);
    }
    if !level.hint.is_empty() {
        write_text_field(&mut fields, FIELD_HINT, &level.hint);
    }
    if !level.movement().is_empty() {
        fields.u8(FIELD_MOVEMENT);
        fields.u8((2 * level.movement().len()) as u8);
        for pos in level.movement() {
            fields.u8(pos.x);
            fields.u8(pos.y);
        }
    }
    if !level.author.is_empty() {
        write_text_field(&mut fields, FIELD_AUTHOR, &level.author);
    }

    let fields = fields.into_bytes();
    w.u16(fields.len() as u16);
    w.bytes(&fields);
    Ok(w.into_bytes())
}

/// NUL-terminated latin-1 text field. Characters above 0xFF are
/// narrowed; DAT text is latin-1 by definition.
fn write_text_field(w: &mut Writer, id: u8, text: &str) {
    let bytes: Vec<u8> = text.chars().map(|c| c as u8).collect();
    w.u8(id);
    w.u8((bytes.len() + 1) as u8);
    w.bytes(&bytes);
    w.u8(0);
}
