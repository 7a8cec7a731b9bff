// src/cc2/modifiers.rs
#![forbid(unsafe_code)]

/*!
Per-family modifier payload codec.

A handful of opcodes are followed by payload bytes whose meaning depends
on the opcode family: wire bitmasks, letter glyphs, clone arrows,
editor colors, logic-gate subtypes, and the two-byte railroad pack.
`parse_modifier` fills the matching [`Element`] attributes in place;
`build_modifier` is its inverse and supplies family defaults for
attributes that were never set.
*/

use crate::cc2::element::{
    Direction, DirSet, Element, Gate, GateKind, TileColor, TrackSegment, TrackSet,
};
use crate::cc2::tiles::TileId;
use crate::error::{Error, Result};

/// Letter-tile values 0x1C..=0x1F are the four arrow glyphs.
const ARROWS: [(u8, char); 4] = [(0x1C, '↑'), (0x1D, '→'), (0x1E, '↓'), (0x1F, '←')];

const THIN_WALL_CANOPY_BIT: u8 = 0x10;

fn bad(opcode: TileId, reason: &'static str) -> Error {
    Error::UnsupportedModifier {
        opcode: opcode.code(),
        reason,
    }
}

/// Apply a modifier payload to the element it precedes.
pub fn parse_modifier(elem: &mut Element, value: &[u8]) -> Result<()> {
    let id = elem.id;
    if id == TileId::RailroadTrack {
        if value.is_empty() || value.len() > 2 {
            return Err(bad(id, "railroad modifier must be 1 or 2 bytes"));
        }
    } else if value.len() != 1 {
        return Err(bad(id, "modifier must be exactly 1 byte"));
    }

    if id.is_wired() {
        let byte = value[0];
        elem.wires = DirSet::from_bits(byte & 0x0F);
        elem.wire_tunnels = DirSet::from_bits(byte >> 4);
    } else if id == TileId::LetterTileSpace {
        let byte = value[0];
        elem.letter = ARROWS
            .iter()
            .find(|&&(v, _)| v == byte)
            .map(|&(_, glyph)| glyph)
            .or_else(|| (0x20..=0x5F).contains(&byte).then(|| byte as char));
    } else if id == TileId::CloneMachine {
        elem.directions = DirSet::from_bits(value[0]);
    } else if id.is_custom_tile() {
        elem.color =
            TileColor::from_index(value[0]).ok_or_else(|| bad(id, "unknown custom tile color"))?;
    } else if id == TileId::LogicGate {
        elem.gate = Some(parse_gate(value[0]));
    } else if id == TileId::RailroadTrack {
        let low = value[0];
        let high = value.get(1).copied().unwrap_or(0);
        elem.tracks = TrackSet::from_bits(low);
        // Nibbles outside the defined ranges keep the defaults; real
        // files do not produce them but damaged ones might.
        if let Some(active) = TrackSegment::from_active_index(high & 0x0F) {
            elem.active_track = active;
        }
        if let Some(entry) = Direction::from_index(high >> 4) {
            elem.initial_entry = entry;
        }
    } else {
        return Err(bad(id, "opcode does not take a modifier"));
    }
    Ok(())
}

/// Build the modifier payload for an element; inverse of
/// [`parse_modifier`].
pub fn build_modifier(elem: &Element) -> Result<Vec<u8>> {
    let id = elem.id;
    if id.is_wired() {
        Ok(vec![elem.wires.bits() | (elem.wire_tunnels.bits() << 4)])
    } else if id == TileId::LetterTileSpace {
        let byte = match elem.letter {
            None => 0,
            Some(glyph) => ARROWS
                .iter()
                .find(|&&(_, g)| g == glyph)
                .map(|&(v, _)| v)
                .unwrap_or(match glyph as u32 {
                    v @ 0x20..=0x5F => v as u8,
                    _ => 0,
                }),
        };
        Ok(vec![byte])
    } else if id == TileId::CloneMachine {
        Ok(vec![elem.directions.bits()])
    } else if id.is_custom_tile() {
        Ok(vec![elem.color.index()])
    } else if id == TileId::LogicGate {
        build_gate(id, elem.gate.unwrap_or(Gate::Oriented(GateKind::Inverter, Direction::N)))
            .map(|v| vec![v])
    } else if id == TileId::RailroadTrack {
        let high = (elem.initial_entry.index() << 4) | elem.active_track.active_index();
        Ok(vec![elem.tracks.bits(), high])
    } else {
        Err(bad(id, "opcode does not take a modifier"))
    }
}

fn parse_gate(value: u8) -> Gate {
    if (0x1E..=0x27).contains(&value) {
        return Gate::Counter(value - 0x1E);
    }
    let dir = Direction::ALL[(value & 0x03) as usize];
    let kind = match value {
        0x00..=0x03 => GateKind::Inverter,
        0x04..=0x07 => GateKind::And,
        0x08..=0x0B => GateKind::Or,
        0x0C..=0x0F => GateKind::Xor,
        0x10..=0x13 => GateKind::LatchCw,
        0x14..=0x17 => GateKind::Nand,
        0x40..=0x43 => GateKind::LatchCcw,
        _ => return Gate::Raw(value),
    };
    Gate::Oriented(kind, dir)
}

fn build_gate(id: TileId, gate: Gate) -> Result<u8> {
    match gate {
        Gate::Oriented(kind, dir) => Ok(kind.base() + dir.index()),
        Gate::Counter(digit) => {
            if digit > 9 {
                return Err(bad(id, "counter digit out of range"));
            }
            Ok(0x1E + digit)
        }
        Gate::Raw(value) => Ok(value),
    }
}

/// Parse the direction byte every mob opcode carries.
pub fn parse_direction(elem: &mut Element, byte: u8) -> Result<()> {
    elem.direction =
        Direction::from_index(byte).ok_or_else(|| bad(elem.id, "direction byte out of range"))?;
    Ok(())
}

pub fn build_direction(elem: &Element) -> u8 {
    elem.direction.index()
}

/// Parse the thin-wall/canopy bitmask: N/E/S/W edges plus the canopy
/// overlay bit.
pub fn parse_thin_wall(elem: &mut Element, byte: u8) {
    elem.directions = DirSet::from_bits(byte);
    elem.canopy = byte & THIN_WALL_CANOPY_BIT != 0;
}

pub fn build_thin_wall(elem: &Element) -> u8 {
    elem.directions.bits() | if elem.canopy { THIN_WALL_CANOPY_BIT } else { 0 }
}

/// Parse the arrow bitmask of a directional block.
pub fn parse_arrows(elem: &mut Element, byte: u8) {
    elem.directions = DirSet::from_bits(byte);
}

pub fn build_arrows(elem: &Element) -> u8 {
    elem.directions.bits()
}
