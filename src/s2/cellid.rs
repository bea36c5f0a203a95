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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bits reserved for the face at the top of a [`CellId`].
pub const FACE_BITS: u32 = 3;
/// Number of cube faces.
pub const NUM_FACES: u32 = 6;
/// Deepest subdivision level; a cell at this level is a leaf.
pub const MAX_LEVEL: u8 = 30;
/// Bits available to the position+level-marker field (`64 - FACE_BITS`).
pub const POS_BITS: u32 = 2 * MAX_LEVEL as u32 + 1;

/// An opaque identifier for a cell anywhere in the hierarchy, at any
/// level from 0 (a whole cube face) to [`MAX_LEVEL`] (a leaf).
///
/// The bit layout packs a 3-bit face and a Hilbert-curve position so
/// that ordering `CellId` as a plain integer equals ordering by
/// position on the curve: this is the "totally ordered identifier"
/// the intersection engine needs and nothing more. `geosphere` never
/// decodes a `CellId` into a point on the sphere; that belongs to a
/// full projection layer this crate does not implement.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u64);

impl CellId {
    pub const NONE: CellId = CellId(0);

    /// The level-0 (whole-face) cell for the given face (`0..NUM_FACES`).
    pub fn from_face(face: u8) -> CellId {
        debug_assert!((face as u32) < NUM_FACES, "face out of range: {face}");
        let marker = 1u64 << (2 * MAX_LEVEL as u32);
        CellId(((face as u64) << POS_BITS) | marker)
    }

    /// The leaf cell obtained by walking `steps` leaves forward (or,
    /// if negative, backward) from `self` along the curve. `self`
    /// need not itself be a leaf; the walk starts at `self`'s minimum
    /// leaf.
    pub fn advance(&self, steps: i64) -> CellId {
        let start = self.range_min();
        CellId((start.0 as i64 + steps * 2) as u64)
    }

    /// Lowest set bit, which marks both the level and the alignment
    /// of this cell's range.
    fn lsb(&self) -> u64 {
        self.0 & self.0.wrapping_neg()
    }

    pub fn face(&self) -> u8 {
        (self.0 >> POS_BITS) as u8
    }

    pub fn level(&self) -> u8 {
        let tz = self.lsb().trailing_zeros();
        MAX_LEVEL - (tz / 2) as u8
    }

    pub fn is_leaf(&self) -> bool {
        self.0 & 1 == 1
    }

    pub fn is_face(&self) -> bool {
        self.level() == 0
    }

    /// Inclusive minimum leaf contained in this cell.
    pub fn range_min(&self) -> CellId {
        CellId(self.0 - (self.lsb() - 1))
    }

    /// Inclusive maximum leaf contained in this cell.
    pub fn range_max(&self) -> CellId {
        CellId(self.0 + (self.lsb() - 1))
    }

    /// Whether `self`'s range fully contains `other`'s range.
    pub fn contains(&self, other: &CellId) -> bool {
        self.range_min() <= other.range_min() && other.range_max() <= self.range_max()
    }

    /// The `k`-th child (`0..4`) of this cell, one level deeper.
    pub fn child(&self, k: u8) -> CellId {
        debug_assert!(self.level() < MAX_LEVEL, "leaf cells have no children");
        debug_assert!(k < 4, "child index out of range: {k}");
        let new_lsb = self.lsb() >> 2;
        CellId(self.0 - self.lsb() + (2 * k as u64 + 1) * new_lsb)
    }

    /// The ancestor of this cell at `level` (must be `<= self.level()`).
    pub fn parent_at(&self, level: u8) -> CellId {
        debug_assert!(level <= self.level(), "parent level must not be deeper");
        let new_lsb = 1u64 << (2 * (MAX_LEVEL - level) as u32);
        CellId((self.0 & new_lsb.wrapping_neg()) | new_lsb)
    }

    /// The immediate parent, one level shallower.
    pub fn immediate_parent(&self) -> CellId {
        debug_assert!(self.level() > 0, "face cells have no parent");
        let new_lsb = self.lsb() << 2;
        CellId((self.0 & new_lsb.wrapping_neg()) | new_lsb)
    }

    /// Next leaf on the curve (assumes `self` is itself a leaf).
    pub fn next_leaf(&self) -> CellId {
        debug_assert!(self.is_leaf(), "next_leaf called on a non-leaf cell");
        CellId(self.0 + 2)
    }

    /// Previous leaf on the curve (assumes `self` is itself a leaf).
    pub fn prev_leaf(&self) -> CellId {
        debug_assert!(self.is_leaf(), "prev_leaf called on a non-leaf cell");
        CellId(self.0 - 2)
    }
}

impl fmt::Debug for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellId({:#018x}, face={}, level={})", self.0, self.face(), self.level())
    }
}
