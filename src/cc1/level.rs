// src/cc1/level.rs
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use crate::cc1::cell::Cell;
use crate::cc1::constants::{Coord, LAYER_LEN, MAX_MOVEMENT_ENTRIES};
use crate::cc1::tiles::Tile;

/// Default password for a freshly created level, so that an untouched
/// level still serializes with a password field.
pub const DEFAULT_PASSWORD: &str = "ABCD";

/// One CC1 level: the 32x32 two-layer map plus the three side tables
/// that the engine keeps in lockstep with it.
///
/// All edits go through [`add`](Level::add), [`remove`](Level::remove)
/// and [`connect`](Level::connect); those maintain the cross-structure
/// invariants:
/// - `movement` only lists coordinates whose top layer is a monster, in
///   a caller-observable order the engine depends on;
/// - `traps` / `cloners` map button coordinates to the trap / clone
///   machine they control, and entries disappear when either endpoint
///   tile is removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub title: String,
    pub time: u16,
    pub chips: u16,
    pub password: String,
    pub hint: String,
    pub author: String,
    map: Vec<Cell>,
    movement: Vec<Coord>,
    traps: BTreeMap<Coord, Coord>,
    cloners: BTreeMap<Coord, Coord>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

impl Level {
    /// An all-floor level with no wiring and no movement.
    pub fn new() -> Self {
        Self {
            title: "Untitled".to_string(),
            time: 0,
            chips: 0,
            password: DEFAULT_PASSWORD.to_string(),
            hint: String::new(),
            author: String::new(),
            map: vec![Cell::default(); LAYER_LEN],
            movement: Vec::new(),
            traps: BTreeMap::new(),
            cloners: BTreeMap::new(),
        }
    }

    /// Assemble a level straight from parsed container data. No
    /// consistency repair is applied; damaged files stay inspectable.
    pub(crate) fn from_parts(
        map: Vec<Cell>,
        movement: Vec<Coord>,
        traps: BTreeMap<Coord, Coord>,
        cloners: BTreeMap<Coord, Coord>,
    ) -> Self {
        debug_assert_eq!(map.len(), LAYER_LEN);
        Self {
            map,
            movement,
            traps,
            cloners,
            ..Self::new()
        }
    }

    #[inline]
    pub fn at(&self, pos: Coord) -> &Cell {
        &self.map[pos.index()]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.map
    }

    /// Monster update order. Index order is observable engine behavior.
    pub fn movement(&self) -> &[Coord] {
        &self.movement
    }

    pub fn traps(&self) -> &BTreeMap<Coord, Coord> {
        &self.traps
    }

    pub fn cloners(&self) -> &BTreeMap<Coord, Coord> {
        &self.cloners
    }

    /// Place a tile, keeping the movement list and wire tables in sync.
    ///
    /// Newly placed buttons, traps and clone machines start out
    /// unconnected; use [`connect`](Level::connect) to wire them.
    pub fn add(&mut self, pos: Coord, tile: Tile) {
        let cell = &mut self.map[pos.index()];
        let old_cell = *cell;
        let was_monster = cell.top.is_monster();
        cell.add(tile);
        let is_monster = cell.top.is_monster();
        let cell = *cell;

        if was_monster && !is_monster {
            self.movement.retain(|&p| p != pos);
        }
        if is_monster && !was_monster
            && !self.movement.contains(&pos)
            && self.movement.len() < MAX_MOVEMENT_ENTRIES
        {
            self.movement.push(pos);
        }

        // An overwrite can bury a wired tile; its connections go with it.
        for code in [Tile::Trap, Tile::TrapButton, Tile::Cloner, Tile::CloneButton] {
            if old_cell.contains(code) && !cell.contains(code) {
                self.drop_controls(pos, code);
            }
        }
    }

    /// Remove a tile, keeping the movement list and wire tables in sync.
    pub fn remove(&mut self, pos: Coord, tile: Tile) {
        let removed = self.map[pos.index()].remove(tile);
        if removed {
            if tile.is_monster() && !self.map[pos.index()].contains(tile) {
                self.movement.retain(|&p| p != pos);
            }
            self.drop_controls(pos, tile);
        }
    }

    /// Wire a trap or clone button to its target. The tiles at both ends
    /// decide which table the connection lands in; a previous connection
    /// from the same button is overwritten. Returns whether a connection
    /// was made.
    pub fn connect(&mut self, a: Coord, b: Coord) -> bool {
        let e1 = self.visible_terrain(a);
        let e2 = self.visible_terrain(b);
        match (e1, e2) {
            (Tile::TrapButton, Tile::Trap) => {
                self.traps.insert(a, b);
                true
            }
            (Tile::Trap, Tile::TrapButton) => {
                self.traps.insert(b, a);
                true
            }
            (Tile::CloneButton, Tile::Cloner) => {
                self.cloners.insert(a, b);
                true
            }
            (Tile::Cloner, Tile::CloneButton) => {
                self.cloners.insert(b, a);
                true
            }
            _ => false,
        }
    }

    /// Occurrences of `tile` across both layers of all cells. Stacked
    /// duplicates count once.
    pub fn count(&self, tile: Tile) -> usize {
        self.count_any(&[tile])
    }

    /// Occurrences of any member of `tiles`, per cell and layer.
    pub fn count_any(&self, tiles: &[Tile]) -> usize {
        let mut n = 0;
        for cell in &self.map {
            if tiles.contains(&cell.top) {
                n += 1;
            }
            if cell.bottom != cell.top && tiles.contains(&cell.bottom) {
                n += 1;
            }
        }
        n
    }

    /// Semantic validity: every cell legal, every movement entry still
    /// hosting a monster on top, every wire entry still anchored to its
    /// button/target tiles. Unconnected buttons and orphaned targets are
    /// fine. Player-start uniqueness is deliberately not checked here;
    /// levels under construction must stay writable.
    pub fn is_valid(&self) -> bool {
        if !self.map.iter().all(Cell::is_valid) {
            return false;
        }
        if !self
            .movement
            .iter()
            .all(|&p| self.at(p).top.is_monster())
        {
            return false;
        }
        let traps_ok = self
            .traps
            .iter()
            .all(|(&b, &t)| self.at(b).contains(Tile::TrapButton) && self.at(t).contains(Tile::Trap));
        let cloners_ok = self.cloners.iter().all(|(&b, &c)| {
            self.at(b).contains(Tile::CloneButton) && self.at(c).contains(Tile::Cloner)
        });
        traps_ok && cloners_ok
    }

    /// The terrain layer a wire connection anchors to: the top tile
    /// unless a mob is parked on it.
    fn visible_terrain(&self, pos: Coord) -> Tile {
        let cell = self.at(pos);
        if cell.top.is_mob() {
            cell.bottom
        } else {
            cell.top
        }
    }

    fn drop_controls(&mut self, pos: Coord, tile: Tile) {
        match tile {
            Tile::TrapButton => {
                self.traps.remove(&pos);
            }
            Tile::Trap => {
                self.traps.retain(|_, &mut v| v != pos);
            }
            Tile::CloneButton => {
                self.cloners.remove(&pos);
            }
            Tile::Cloner => {
                self.cloners.retain(|_, &mut v| v != pos);
            }
            _ => {}
        }
    }

    /// Replace the movement order wholesale, truncating past the format
    /// cap. Callers are responsible for only listing monster positions.
    pub(crate) fn set_movement(&mut self, movement: Vec<Coord>) {
        self.movement = movement;
        self.movement.truncate(MAX_MOVEMENT_ENTRIES);
    }
}

/// An ordered collection of levels, as stored in one DAT file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Levelset {
    pub levels: Vec<Level>,
}

impl Levelset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
