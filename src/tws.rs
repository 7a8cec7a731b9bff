// src/tws.rs
#![forbid(unsafe_code)]

/*!
Decoder for TWS solution-replay files.

A file holds one header, an optional level-set name record, and one
record per solved level. Solution moves are packed in five token
formats from one to five bytes; tokens the decoder cannot complete
(truncated tails) are kept as [`Move::Unknown`] instead of aborting
the record.
*/

use crate::bytes::Reader;
use crate::error::{Error, Result};

/// File magic.
pub const TWS_MAGIC: u32 = 0x999B_3335;

/// Ruleset a solution was recorded under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ruleset {
    Lynx,
    Ms,
    Unknown(u16),
}

impl Ruleset {
    fn from_raw(raw: u16) -> Self {
        match raw {
            1 => Ruleset::Lynx,
            2 => Ruleset::Ms,
            other => Ruleset::Unknown(other),
        }
    }
}

/// Decoded file header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub ruleset: Ruleset,
    pub last_visited_level: u8,
}

/// One decoded solution move, or a token the decoder could not finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Step {
        /// Absolute tick the move happens on.
        time: u32,
        direction: u16,
    },
    Unknown {
        byte: u8,
    },
}

/// One level's solution record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub level_number: u16,
    pub password: String,
    pub flags: u8,
    /// Initial random-slide direction and stepping parity, packed as
    /// stored.
    pub slide_and_step: u8,
    pub rng_seed: u32,
    /// Total solution time in ticks.
    pub ticks: u32,
    pub moves: Vec<Move>,
}

/// A decoded TWS file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplaySet {
    pub header: Header,
    pub levelset_name: String,
    pub records: Vec<Replay>,
}

/// Decode a TWS file.
pub fn decode(data: &[u8]) -> Result<ReplaySet> {
    let mut r = Reader::new(data);
    let magic = r.u32("file magic")?;
    if magic != TWS_MAGIC {
        return Err(Error::BadMagic(magic));
    }
    let ruleset = Ruleset::from_raw(r.u16("ruleset")?);
    let last_visited_level = r.u8("last visited level")?;
    let extra = r.u8("header extension length")? as usize;
    r.skip(extra, "header extension")?;

    let mut levelset_name = String::new();
    let mut records = Vec::new();
    let mut first = true;
    while !r.is_empty() {
        let size = r.u32("record length")? as usize;
        let payload = r.take(size, "solution record")?;

        // An all-zero prologue on the first record marks the level-set
        // name record instead of a solution.
        if first && payload.len() >= 6 && payload[..6].iter().all(|&b| b == 0) {
            levelset_name = read_name(payload);
            first = false;
            continue;
        }
        first = false;

        if let Some(replay) = read_record(payload)? {
            records.push(replay);
        }
    }

    Ok(ReplaySet {
        header: Header {
            ruleset,
            last_visited_level,
        },
        levelset_name,
        records,
    })
}

fn read_name(payload: &[u8]) -> String {
    let name = payload.get(16..).unwrap_or(&[]);
    let end = name.iter().position(|&b| b == 0).unwrap_or(name.len());
    name[..end].iter().map(|&b| b as char).collect()
}

/// Parse one solution record. Records that carry only the level number
/// and password (padding entries) yield `None`.
fn read_record(payload: &[u8]) -> Result<Option<Replay>> {
    let mut r = Reader::new(payload);
    let level_number = r.u16("record level number")?;
    let password = r
        .take(4, "record password")?
        .iter()
        .map(|&b| b as char)
        .collect();
    if payload.len() <= 6 {
        return Ok(None);
    }
    let flags = r.u8("record flags")?;
    let slide_and_step = r.u8("record slide/step byte")?;
    let rng_seed = r.u32("record rng seed")?;
    let ticks = r.u32("record solution time")?;
    let moves = decode_moves(r.take(r.remaining(), "move stream")?);
    Ok(Some(Replay {
        level_number,
        password,
        flags,
        slide_and_step,
        rng_seed,
        ticks,
        moves,
    }))
}

/// Decode the packed move stream. The low bits of the first byte pick
/// the token format:
///
/// - `..01`: 1 byte, `TTTDDD01`: 3-bit time delta, 3-bit direction.
/// - `..10`: 2 bytes, `TTTTTTTT TTTDDD10`: 11-bit time delta.
/// - `.0011`: 4 bytes, `0000TTTT TTTTTTTT TTTTTTTT TTT0DD11`: 23-bit
///   time delta, 2-bit direction.
/// - `..00`: 1 byte, `FFEEDD00`: three consecutive moves of 4 ticks
///   each.
/// - `.1NN11`: 2 to 5 bytes: 9-bit direction, up to 23-bit time delta,
///   `NN`+1 continuation bytes.
///
/// Time deltas are relative; emitted `time` values are absolute ticks.
fn decode_moves(stream: &[u8]) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut time: u32 = 0;
    let mut iter = stream.iter().copied();
    while let Some(b1) = iter.next() {
        match b1 & 0b11 {
            0b01 => {
                let delta = u32::from((b1 >> 5) & 0b111);
                let direction = u16::from((b1 >> 2) & 0b111);
                time += delta + 1;
                moves.push(Move::Step { time, direction });
            }
            0b10 => {
                let Some(b2) = iter.next() else {
                    moves.push(Move::Unknown { byte: b1 });
                    break;
                };
                let delta = (u32::from(b2) << 3) | u32::from((b1 >> 5) & 0b111);
                let direction = u16::from((b1 >> 2) & 0b111);
                time += delta + 1;
                moves.push(Move::Step { time, direction });
            }
            0b00 => {
                for direction in [(b1 >> 2) & 0b11, (b1 >> 4) & 0b11, (b1 >> 6) & 0b11] {
                    time += 4;
                    moves.push(Move::Step {
                        time,
                        direction: u16::from(direction),
                    });
                }
            }
            _ if b1 & 0b10000 == 0 => {
                // 4-byte format.
                let (Some(b2), Some(b3), Some(b4)) = (iter.next(), iter.next(), iter.next())
                else {
                    moves.push(Move::Unknown { byte: b1 });
                    break;
                };
                let delta = (u32::from(b4 & 0b1111) << 19)
                    | (u32::from(b3) << 11)
                    | (u32::from(b2) << 3)
                    | u32::from((b1 >> 5) & 0b111);
                let direction = u16::from((b1 >> 2) & 0b11);
                time += delta + 1;
                moves.push(Move::Step { time, direction });
            }
            _ => {
                // Variable-length format: NN+1 continuation bytes.
                let n = usize::from((b1 >> 2) & 0b11) + 1;
                let mut extra = [0u8; 4];
                let mut got = 0;
                for slot in extra.iter_mut().take(n) {
                    match iter.next() {
                        Some(b) => {
                            *slot = b;
                            got += 1;
                        }
                        None => break,
                    }
                }
                if got < n {
                    moves.push(Move::Unknown { byte: b1 });
                    break;
                }
                let [b2, b3, b4, b5] = extra;
                let direction =
                    (u16::from(b2 & 0b0011_1111) << 3) | u16::from((b1 >> 5) & 0b111);
                let delta = (u32::from(b5 & 0b1_1111) << 18)
                    | (u32::from(b4) << 10)
                    | (u32::from(b3) << 2)
                    | u32::from((b2 & 0b1100_0000) >> 6);
                time += delta + 1;
                moves.push(Move::Step { time, direction });
            }
        }
    }
    moves
}
