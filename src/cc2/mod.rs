// src/cc2/mod.rs
#![forbid(unsafe_code)]

mod cell;
mod element;
pub mod map;
mod modifiers;
mod pack;
mod tiles;

/**
 * CC2 cell/map codec: the tile catalog, the typed element record, the
 * per-family modifier codec, and the streaming map payload codec with
 * its pack compression.
 *
 * The surrounding C2M container is out of scope; callers hand this
 * module the bytes of an unpacked `MAP` section (or a packed one, via
 * `unpack`).
 */
pub use cell::Cell;
pub use element::{
    DirSet, Direction, Element, Gate, GateKind, TileColor, TrackSegment, TrackSet,
};
pub use map::{decode_cell, encode_cell, MapData};
pub use modifiers::{
    build_arrows, build_direction, build_modifier, build_thin_wall, parse_arrows,
    parse_direction, parse_modifier, parse_thin_wall,
};
pub use pack::{pack, unpack};
pub use tiles::TileId;
