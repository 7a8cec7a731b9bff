// src/lib.rs
#![forbid(unsafe_code)]

//! Codecs and transforms for tile-based puzzle level data.
//!
//! Three byte formats are covered:
//!
//! - the CC1 **DAT** container (read + write), backed by a semantic
//!   model (tile catalog, two-layer cells, and a level object that
//!   keeps its map, monster movement order, and trap/cloner wire
//!   tables consistent under edits) plus structure-preserving
//!   transforms: replace, keep, rotations, flips;
//! - the CC2 **C2M map payload** (decode + encode of the cell stream,
//!   pack/unpack of its compression); the surrounding container is
//!   treated as opaque bytes;
//! - **TWS** solution replays (decode only).
//!
//! All codecs are pure functions over byte slices; nothing here does
//! I/O or holds shared state.

pub mod cc1;
pub mod cc2;
pub mod dat;
pub mod tws;

mod bytes;
mod error;

pub use error::{Error, Result};

/// Ceiling on any single decoded section, bounding allocations on
/// pathological inputs. The u16 length frames keep real files far
/// below it.
pub const MAX_SECTION_LEN: usize = 16 * 1024 * 1024;

// The names most callers need:
pub use cc1::{Cell, Coord, Level, Levelset, Tile};
pub use dat::{read as read_dat, write as write_dat};
