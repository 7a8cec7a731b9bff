// src/dat/read.rs
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use crate::bytes::Reader;
use crate::cc1::{Cell, Coord, Level, Levelset, Tile, LAYER_LEN, MAP_SIZE};
use crate::dat::rle;
use crate::dat::{
    DAT_MAGIC, DAT_MAGIC_VARIANT, FIELD_AUTHOR, FIELD_CLONERS, FIELD_HINT, FIELD_MOVEMENT,
    FIELD_PASSWORD, FIELD_PASSWORD_PLAIN, FIELD_TITLE, FIELD_TRAPS, PASSWORD_XOR,
};
use crate::error::{Error, Result};

/// Parse a DAT container into a [`Levelset`].
///
/// Both observed magic values are accepted. Side tables are taken as
/// stored; no consistency repair is applied, so files written by other
/// tools stay inspectable even when their tables disagree with the map.
pub fn read(data: &[u8]) -> Result<Levelset> {
    let mut r = Reader::new(data);
    let magic = r.u32("file magic")?;
    if magic != DAT_MAGIC && magic != DAT_MAGIC_VARIANT {
        return Err(Error::BadMagic(magic));
    }
    let count = r.u16("level count")?;
    let mut levels = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let record_len = r.u16("level record length")? as usize;
        let record = r.take(record_len, "level record")?;
        levels.push(read_level(record)?);
    }
    if !r.is_empty() {
        log::warn!("{} trailing bytes after the last level record", r.remaining());
    }
    Ok(Levelset { levels })
}

fn read_level(record: &[u8]) -> Result<Level> {
    let mut r = Reader::new(record);
    let _number = r.u16("level number")?;
    let time = r.u16("level time")?;
    let chips = r.u16("chip count")?;
    let _map_detail = r.u16("map detail")?;

    let top_len = r.u16("top layer length")? as usize;
    let top = rle::decode_layer(r.take(top_len, "top layer")?)?;
    let bottom_len = r.u16("bottom layer length")? as usize;
    let bottom = rle::decode_layer(r.take(bottom_len, "bottom layer")?)?;

    let mut map = Vec::with_capacity(LAYER_LEN);
    for i in 0..LAYER_LEN {
        let t = Tile::from_code(top[i]).ok_or(Error::InvalidTileCode(top[i]))?;
        let b = Tile::from_code(bottom[i]).ok_or(Error::InvalidTileCode(bottom[i]))?;
        map.push(Cell::new(t, b));
    }

    let fields_len = r.u16("optional fields length")? as usize;
    let mut fields = Reader::new(r.take(fields_len, "optional fields")?);

    let mut title = String::new();
    let mut password = String::new();
    let mut hint = String::new();
    let mut author = String::new();
    let mut traps = BTreeMap::new();
    let mut cloners = BTreeMap::new();
    let mut movement = Vec::new();

    while !fields.is_empty() {
        let id = fields.u8("field id")?;
        let len = fields.u8("field length")? as usize;
        let content = fields.take(len, "field payload")?;
        match id {
            FIELD_TITLE => title = latin1_z(content),
            FIELD_TRAPS => {
                if len % 10 != 0 {
                    return Err(Error::BadFieldLength { id, len });
                }
                let mut fr = Reader::new(content);
                for _ in 0..len / 10 {
                    let bx = fr.u16("trap button x")?;
                    let by = fr.u16("trap button y")?;
                    let tx = fr.u16("trap x")?;
                    let ty = fr.u16("trap y")?;
                    let _open = fr.u16("trap state")?;
                    match (coord_from(bx, by), coord_from(tx, ty)) {
                        (Some(button), Some(trap)) => {
                            traps.insert(button, trap);
                        }
                        _ => log::warn!("trap wire ({bx},{by})->({tx},{ty}) is off the map"),
                    }
                }
            }
            FIELD_CLONERS => {
                if len % 8 != 0 {
                    return Err(Error::BadFieldLength { id, len });
                }
                let mut fr = Reader::new(content);
                for _ in 0..len / 8 {
                    let bx = fr.u16("clone button x")?;
                    let by = fr.u16("clone button y")?;
                    let cx = fr.u16("cloner x")?;
                    let cy = fr.u16("cloner y")?;
                    match (coord_from(bx, by), coord_from(cx, cy)) {
                        (Some(button), Some(cloner)) => {
                            cloners.insert(button, cloner);
                        }
                        _ => log::warn!("clone wire ({bx},{by})->({cx},{cy}) is off the map"),
                    }
                }
            }
            FIELD_PASSWORD => {
                password = strip_z(content).iter().map(|&b| (b ^ PASSWORD_XOR) as char).collect();
            }
            FIELD_PASSWORD_PLAIN => {
                if password.is_empty() {
                    password = latin1_z(content);
                }
            }
            FIELD_HINT => hint = latin1_z(content),
            FIELD_MOVEMENT => {
                if len % 2 != 0 {
                    return Err(Error::BadFieldLength { id, len });
                }
                for pair in content.chunks_exact(2) {
                    match coord_from(pair[0] as u16, pair[1] as u16) {
                        Some(pos) => movement.push(pos),
                        None => log::warn!(
                            "movement entry ({},{}) is off the map",
                            pair[0],
                            pair[1]
                        ),
                    }
                }
            }
            FIELD_AUTHOR => author = latin1_z(content),
            _ => log::warn!("skipping unknown optional field {id} ({len} bytes)"),
        }
    }

    let mut level = Level::from_parts(map, movement, traps, cloners);
    level.title = title;
    level.time = time;
    level.chips = chips;
    level.password = password;
    level.hint = hint;
    level.author = author;
    Ok(level)
}

fn coord_from(x: u16, y: u16) -> Option<Coord> {
    ((x as usize) < MAP_SIZE && (y as usize) < MAP_SIZE).then(|| Coord::new(x as u8, y as u8))
}

fn strip_z(content: &[u8]) -> &[u8] {
    match content.split_last() {
        Some((&0, rest)) => rest,
        _ => content,
    }
}

/// Latin-1 text with a trailing NUL.
fn latin1_z(content: &[u8]) -> String {
    strip_z(content).iter().map(|&b| b as char).collect()
}
