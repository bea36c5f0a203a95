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

//! A bare integer leaf space with identity cells, used to test the
//! `intersect` pipeline independent of the `s2` Hilbert-curve
//! arithmetic, per the Design Notes' "static polymorphism over cell
//! ids" recommendation. Also used by [`crate::naive`]'s equality
//! tests against [`crate::intersect::find`].

use crate::intersect::CellSpace;

/// A cell is a closed `[lo, hi]` range of `i64` leaves; a leaf is a
/// single `i64` position on the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntRanges;

impl CellSpace for IntRanges {
    type Leaf = i64;
    type Cell = (i64, i64);

    fn range_min(cell: (i64, i64)) -> i64 {
        cell.0
    }

    fn range_max(cell: (i64, i64)) -> i64 {
        cell.1
    }

    fn next(leaf: i64) -> i64 {
        leaf + 1
    }

    fn prev(leaf: i64) -> i64 {
        leaf - 1
    }

    fn normalize(mut cells: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
        cells.retain(|&(lo, hi)| lo <= hi);
        cells.sort_unstable();

        let mut out: Vec<(i64, i64)> = Vec::with_capacity(cells.len());
        for (lo, hi) in cells {
            match out.last_mut() {
                Some(last) if lo <= last.1 + 1 => {
                    last.1 = last.1.max(hi);
                }
                _ => out.push((lo, hi)),
            }
        }
        out
    }

    fn from_range(lo: i64, hi_exclusive: i64) -> Vec<(i64, i64)> {
        if lo >= hi_exclusive {
            Vec::new()
        } else {
            vec![(lo, hi_exclusive - 1)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_merges_touching_and_overlapping_ranges() {
        let merged = IntRanges::normalize(vec![(0, 2), (3, 5), (10, 12), (11, 20)]);
        assert_eq!(merged, vec![(0, 5), (10, 20)]);
    }

    #[test]
    fn normalize_drops_empty_ranges() {
        assert_eq!(IntRanges::normalize(vec![(5, 3)]), Vec::new());
    }

    #[test]
    fn from_range_is_half_open() {
        assert_eq!(IntRanges::from_range(3, 8), vec![(3, 7)]);
        assert_eq!(IntRanges::from_range(3, 3), Vec::new());
    }
}
