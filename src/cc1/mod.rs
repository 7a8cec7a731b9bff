// src/cc1/mod.rs
#![forbid(unsafe_code)]

mod cell;
mod constants;
mod level;
mod tiles;
pub mod transform;

/**
 * CC1 semantic model: the tile catalog, the two-layer cell, and the
 * level object that keeps its map, movement order and wire tables
 * mutually consistent under edits.
 */
pub use cell::Cell;
pub use constants::{Coord, LAYER_LEN, MAP_SIZE, MAX_MOVEMENT_ENTRIES};
pub use level::{Level, Levelset, DEFAULT_PASSWORD};
pub use tiles::Tile;

pub use tiles::{
    ants, balls, blobs, blocks, boots, buttons, clone_blocks, doors, fireballs, forces, gliders,
    ice, invalid, keys, mobs, monsters, panels, paramecia, pickups, players, tanks, teeth,
    toggles, walkers, walls,
};
