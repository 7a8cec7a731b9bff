// src/cc2/map.rs
#![forbid(unsafe_code)]

/*!
Streaming codec for the (unpacked) map payload: a 1-byte width, a
1-byte height, then every cell row-major as a run of `(opcode,
payload...)` tile specifications per `modifiers`.

A modifier-prefix opcode (0x76/0x77/0x78) carries 1/2/4 payload bytes
and applies to the tile specification that follows it; prefixes may
stack, innermost applied first.
*/

use crate::bytes::{Reader, Writer};
use crate::cc2::cell::Cell;
use crate::cc2::element::Element;
use crate::cc2::modifiers;
use crate::cc2::tiles::TileId;
use crate::error::{Error, Result};

/// A decoded map payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapData {
    pub width: u8,
    pub height: u8,
    /// `width * height` cells, row-major.
    pub cells: Vec<Cell>,
}

/// Decode an unpacked map payload.
pub fn decode(data: &[u8]) -> Result<MapData> {
    let mut r = Reader::new(data);
    let width = r.u8("map width")?;
    let height = r.u8("map height")?;
    let count = width as usize * height as usize;
    let mut cells = Vec::with_capacity(count);
    for _ in 0..count {
        cells.push(read_cell(&mut r)?);
    }
    if !r.is_empty() {
        log::warn!("{} trailing bytes after map cells", r.remaining());
    }
    Ok(MapData {
        width,
        height,
        cells,
    })
}

/// Encode a map payload; inverse of [`decode`].
pub fn encode(map: &MapData) -> Result<Vec<u8>> {
    if map.cells.len() != map.width as usize * map.height as usize {
        return Err(Error::InvariantViolated("cell count does not match map size"));
    }
    let mut w = Writer::new();
    w.u8(map.width);
    w.u8(map.height);
    for cell in &map.cells {
        write_cell(&mut w, cell)?;
    }
    Ok(w.into_bytes())
}

/// Decode a single cell from the front of `data`. Returns the cell and
/// the number of bytes consumed.
pub fn decode_cell(data: &[u8]) -> Result<(Cell, usize)> {
    let mut r = Reader::new(data);
    let cell = read_cell(&mut r)?;
    Ok((cell, data.len() - r.remaining()))
}

/// Encode a single cell; inverse of [`decode_cell`].
pub fn encode_cell(cell: &Cell) -> Result<Vec<u8>> {
    let mut w = Writer::new();
    write_cell(&mut w, cell)?;
    Ok(w.into_bytes())
}

fn read_cell(r: &mut Reader<'_>) -> Result<Cell> {
    let mut cell = Cell::default();
    while cell.terrain.is_none() {
        let elem = read_element(r)?;
        if elem.id.is_panel() {
            cell.panel = Some(elem);
        } else if elem.id.is_any_mob() {
            cell.mob = Some(elem);
        } else if elem.id == TileId::NotAllowedMarker {
            cell.not_allowed = Some(elem);
        } else if elem.id.is_pickup() {
            cell.pickup = Some(elem);
        } else {
            cell.terrain = Some(elem);
        }
    }
    Ok(cell)
}

fn write_cell(w: &mut Writer, cell: &Cell) -> Result<()> {
    if cell.terrain.is_none() {
        return Err(Error::InvariantViolated("cell has no terrain layer"));
    }
    for elem in cell.layers() {
        write_element(w, elem)?;
    }
    Ok(())
}

fn read_element<'a>(r: &mut Reader<'a>) -> Result<Element> {
    // Modifier prefixes may stack; collect payloads outside-in, apply
    // them to the final tile innermost-first.
    let mut payloads: Vec<&'a [u8]> = Vec::new();
    loop {
        let code = r.u8("tile opcode")?;
        let id = TileId::from_code(code).ok_or(Error::UnknownOpcode(code))?;

        if id.is_modifier() {
            let len = match id {
                TileId::Modifier8Bit => 1,
                TileId::Modifier16Bit => 2,
                _ => 4,
            };
            payloads.push(r.take(len, "modifier payload")?);
            continue;
        }

        let mut elem = Element::new(id);
        if id.is_any_mob() {
            modifiers::parse_direction(&mut elem, r.u8("mob direction")?)?;
            if id == TileId::DirectionalBlock {
                modifiers::parse_arrows(&mut elem, r.u8("block arrows")?);
            }
        } else if id == TileId::ThinWallCanopy {
            modifiers::parse_thin_wall(&mut elem, r.u8("thin wall bits")?);
        }
        for payload in payloads.iter().rev() {
            modifiers::parse_modifier(&mut elem, payload)?;
        }
        return Ok(elem);
    }
}

fn write_element(w: &mut Writer, elem: &Element) -> Result<()> {
    let id = elem.id;
    if id.is_any_mob() {
        w.u8(id.code());
        w.u8(modifiers::build_direction(elem));
        if id == TileId::DirectionalBlock {
            w.u8(modifiers::build_arrows(elem));
        }
        return Ok(());
    }
    if id == TileId::ThinWallCanopy {
        w.u8(id.code());
        w.u8(modifiers::build_thin_wall(elem));
        return Ok(());
    }
    if id.is_modified_tile() {
        let payload = modifiers::build_modifier(elem)?;
        let mut value: u32 = 0;
        for (i, &b) in payload.iter().enumerate() {
            value |= (b as u32) << (8 * i);
        }
        // A zero modifier is the family default and is omitted entirely.
        if value == 0 {
            w.u8(id.code());
            return Ok(());
        }
        if value <= 0xFF {
            w.u8(TileId::Modifier8Bit.code());
            w.u8(value as u8);
        } else if value <= 0xFFFF {
            w.u8(TileId::Modifier16Bit.code());
            w.u16(value as u16);
        } else {
            w.u8(TileId::Modifier32Bit.code());
            w.u32(value);
        }
        w.u8(id.code());
        return Ok(());
    }
    w.u8(id.code());
    Ok(())
}
