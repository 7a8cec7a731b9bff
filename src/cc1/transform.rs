// src/cc1/transform.rs
#![forbid(unsafe_code)]

/*!
Structure-preserving level rewrites.

Every function returns a fresh [`Level`] and leaves the source untouched.
The dihedral transforms (rotations and flips) replay the source map
through the target level's own `add`/`remove`/`connect` operations, so
the movement list and wire tables are maintained by the same consistency
engine that guards interactive edits.

One asymmetry is preserved on purpose: the SE corner panel has no
rotated sibling in the tile catalog, and the historical engine rendered
rotated copies of it incorrectly. Any dihedral transform of a level that
contains [`Tile::PanelSE`] therefore returns an unchanged clone.
*/

use crate::cc1::constants::{Coord, LAYER_LEN, MAP_SIZE};
use crate::cc1::level::Level;
use crate::cc1::tiles::Tile;

/// The seven dihedral symmetries of the square map (identity excluded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dihedral {
    R90,
    R180,
    R270,
    FlipHorizontal,
    FlipVertical,
    FlipNeSw,
    FlipNwSe,
}

const LAST: u8 = (MAP_SIZE - 1) as u8;

impl Dihedral {
    /// Coordinate map for a 32x32 grid.
    #[inline]
    fn map_coord(self, p: Coord) -> Coord {
        match self {
            Dihedral::R90 => Coord::new(LAST - p.y, p.x),
            Dihedral::R180 => Coord::new(LAST - p.x, LAST - p.y),
            Dihedral::R270 => Coord::new(p.y, LAST - p.x),
            Dihedral::FlipHorizontal => Coord::new(LAST - p.x, p.y),
            Dihedral::FlipVertical => Coord::new(p.x, LAST - p.y),
            Dihedral::FlipNeSw => Coord::new(LAST - p.y, LAST - p.x),
            Dihedral::FlipNwSe => Coord::new(p.y, p.x),
        }
    }

    /// Matching direction rewrite for a single tile.
    #[inline]
    fn map_tile(self, t: Tile) -> Tile {
        match self {
            Dihedral::R90 => t.right(),
            Dihedral::R180 => t.reverse(),
            Dihedral::R270 => t.left(),
            Dihedral::FlipHorizontal => t.flip_horizontal(),
            Dihedral::FlipVertical => t.flip_vertical(),
            Dihedral::FlipNeSw => t.flip_ne_sw(),
            Dihedral::FlipNwSe => t.flip_nw_se(),
        }
    }
}

fn metadata_clone(level: &Level) -> Level {
    let mut out = Level::new();
    out.title = level.title.clone();
    out.time = level.time;
    out.chips = level.chips;
    out.password = level.password.clone();
    out.hint = level.hint.clone();
    out.author = level.author.clone();
    out
}

fn dihedral(level: &Level, sym: Dihedral) -> Level {
    if level.count(Tile::PanelSE) > 0 {
        return level.clone();
    }

    let mut out = metadata_clone(level);
    for i in 0..LAYER_LEN {
        let src = Coord::from_index(i);
        let dst = sym.map_coord(src);
        let cell = level.at(src);
        out.add(dst, sym.map_tile(cell.bottom));
        out.add(dst, sym.map_tile(cell.top));
    }
    for (&button, &trap) in level.traps() {
        out.connect(sym.map_coord(button), sym.map_coord(trap));
    }
    for (&button, &cloner) in level.cloners() {
        out.connect(sym.map_coord(button), sym.map_coord(cloner));
    }
    // Replaying the map visits monsters in scan order; the engine update
    // order is the source ordering mapped through the symmetry.
    out.set_movement(level.movement().iter().map(|&p| sym.map_coord(p)).collect());
    out
}

/// Rotate 90 degrees clockwise. Returns an unchanged clone when the
/// level contains the SE corner panel.
pub fn rotate_90(level: &Level) -> Level {
    dihedral(level, Dihedral::R90)
}

/// Rotate 180 degrees. SE-panel levels come back unchanged.
pub fn rotate_180(level: &Level) -> Level {
    dihedral(level, Dihedral::R180)
}

/// Rotate 270 degrees clockwise. SE-panel levels come back unchanged.
pub fn rotate_270(level: &Level) -> Level {
    dihedral(level, Dihedral::R270)
}

/// Mirror across the vertical axis. SE-panel levels come back unchanged.
pub fn flip_horizontal(level: &Level) -> Level {
    dihedral(level, Dihedral::FlipHorizontal)
}

/// Mirror across the horizontal axis. SE-panel levels come back
/// unchanged.
pub fn flip_vertical(level: &Level) -> Level {
    dihedral(level, Dihedral::FlipVertical)
}

/// Mirror across the NE/SW diagonal. SE-panel levels come back
/// unchanged.
pub fn flip_ne_sw(level: &Level) -> Level {
    dihedral(level, Dihedral::FlipNeSw)
}

/// Mirror across the NW/SE diagonal. SE-panel levels come back
/// unchanged.
pub fn flip_nw_se(level: &Level) -> Level {
    dihedral(level, Dihedral::FlipNwSe)
}

/// Replace every occurrence of any tile in `old` with `new`.
///
/// `Floor` in `old` is matched against cells whose visible terrain is
/// floor (floor can never be removed, only painted over).
pub fn replace(level: &Level, old: &[Tile], new: Tile) -> Level {
    let mut out = level.clone();
    for i in 0..LAYER_LEN {
        let pos = Coord::from_index(i);
        for &elem in old {
            if elem != Tile::Floor && out.at(pos).contains(elem) {
                out.remove(pos, elem);
                out.add(pos, new);
            } else if elem == Tile::Floor {
                let cell = out.at(pos);
                if cell.top == Tile::Floor
                    || (cell.top.is_mob() && cell.bottom == Tile::Floor)
                {
                    out.add(pos, new);
                }
            }
        }
    }
    out
}

/// Replace mobs in `old` with the member of `new` that carries the same
/// direction. Directions with no replacement candidate are skipped.
pub fn replace_mobs(level: &Level, old: &[Tile], new: &[Tile]) -> Level {
    let mut out = level.clone();
    for dir in ["N", "E", "S", "W"] {
        let targets: Vec<Tile> = old
            .iter()
            .copied()
            .filter(|t| t.is_mob() && t.dirs() == dir)
            .collect();
        let Some(&replacement) = new.iter().find(|t| t.dirs() == dir) else {
            continue;
        };
        if !targets.is_empty() {
            out = replace(&out, &targets, replacement);
        }
    }
    out
}

/// Retain only tiles in `keep_set`; everything else becomes floor. The
/// movement list and wire tables shrink with the removed tiles.
pub fn keep(level: &Level, keep_set: &[Tile]) -> Level {
    let mut out = level.clone();
    for i in 0..LAYER_LEN {
        let pos = Coord::from_index(i);
        let cell = *out.at(pos);
        for elem in [cell.top, cell.bottom] {
            if !keep_set.contains(&elem) {
                out.remove(pos, elem);
            }
        }
    }
    out
}
