// src/cc2/cell.rs
#![forbid(unsafe_code)]

use crate::cc2::element::Element;

/// One map square: up to five layers, each optional except that a
/// decoded cell always ends up with terrain.
///
/// The stream order within a cell is fixed: panel, mob, not-allowed
/// marker, pickup, terrain. The decoder classifies each element by its
/// opcode family and the terrain element closes the cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub panel: Option<Element>,
    pub mob: Option<Element>,
    pub not_allowed: Option<Element>,
    pub pickup: Option<Element>,
    pub terrain: Option<Element>,
}

impl Cell {
    /// A bare terrain cell.
    pub fn terrain(elem: Element) -> Self {
        Self {
            terrain: Some(elem),
            ..Self::default()
        }
    }

    /// Layers in stream order (panel first, terrain last).
    pub fn layers(&self) -> impl Iterator<Item = &Element> {
        [
            self.panel.as_ref(),
            self.mob.as_ref(),
            self.not_allowed.as_ref(),
            self.pickup.as_ref(),
            self.terrain.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}
