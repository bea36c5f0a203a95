/*
   Copyright 2024 the geosphere contributors

   This file is part of geosphere.

   geosphere is free software: you can redistribute it and/or modify
   it under the terms of the GNU Affero General Public License as
   published by the Free Software Foundation, either version 3 of the
   License, or (at your option) any later version.

   geosphere is distributed in the hope that it will be useful, but
   WITHOUT ANY WARRANTY; without even the implied warranty of
   MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
   Affero General Public License for more details.

   You should have received a copy of the GNU Affero General Public
   License along with geosphere. If not, see
   <https://www.gnu.org/licenses/>.
*/

//! A Hilbert-curve cell hierarchy over the six faces of a cube
//! projected onto the unit sphere, following the same bit layout as
//! Google's S2 library: a cell id is a 64-bit integer whose face
//! occupies the top 3 bits and whose remaining 61 bits encode a
//! path through the quadtree followed by a single trailing marker
//! bit that records the cell's level. Comparing two ids as plain
//! integers is equivalent to comparing their positions on the curve,
//! which is what lets [`crate::intersect`] treat a [`CellId`] as an
//! opaque, totally ordered leaf position.

pub mod cellid;
pub mod cellunion;

pub use cellid::{CellId, FACE_BITS, MAX_LEVEL, NUM_FACES};
pub use cellunion::{from_range, normalize};

use crate::intersect::CellSpace;

/// The [`CellSpace`] binding for the real cell hierarchy: leaves and
/// cells are both [`CellId`] (a cell at level 30 *is* a leaf).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct S2;

impl CellSpace for S2 {
    type Leaf = CellId;
    type Cell = CellId;

    fn range_min(cell: CellId) -> CellId {
        cell.range_min()
    }

    fn range_max(cell: CellId) -> CellId {
        cell.range_max()
    }

    fn next(leaf: CellId) -> CellId {
        leaf.next_leaf()
    }

    fn prev(leaf: CellId) -> CellId {
        leaf.prev_leaf()
    }

    fn normalize(cells: Vec<CellId>) -> Vec<CellId> {
        cellunion::normalize(cells)
    }

    fn from_range(lo: CellId, hi_exclusive: CellId) -> Vec<CellId> {
        cellunion::from_range(lo, hi_exclusive)
    }
}
