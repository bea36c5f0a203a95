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

//! Normalization (§4.1 `normalize`) and range-covering (§4.1
//! `fromRange`) for [`CellId`] collections, i.e. a `CellUnion`.

use super::cellid::CellId;

/// Canonicalizes a set of cells: cells are sorted by id (equivalent
/// to curve position of their center), cells already covered by an
/// accepted cell are dropped, accepted cells covered by a new,
/// larger cell are discarded in its favor, and complete runs of four
/// siblings collapse into their shared parent, repeating the merge
/// check against the parent's own siblings. Idempotent.
pub fn normalize(mut cells: Vec<CellId>) -> Vec<CellId> {
    cells.sort_unstable();
    let mut output: Vec<CellId> = Vec::with_capacity(cells.len());

    for mut ci in cells {
        if let Some(&last) = output.last() {
            if last.contains(&ci) {
                continue;
            }
        }

        while let Some(&last) = output.last() {
            if ci.contains(&last) {
                output.pop();
            } else {
                break;
            }
        }

        while ci.level() > 0 && output.len() >= 3 {
            let n = output.len();
            let quartet = [output[n - 3], output[n - 2], output[n - 1], ci];
            if is_sibling_quartet(&quartet) {
                output.truncate(n - 3);
                ci = ci.immediate_parent();
            } else {
                break;
            }
        }

        output.push(ci);
    }

    output
}

fn is_sibling_quartet(quartet: &[CellId]) -> bool {
    let first = quartet[0];
    if first.level() == 0 {
        return false;
    }
    let parent = first.immediate_parent();
    (0..4).all(|k| quartet[k as usize] == parent.child(k))
}

/// The minimal cell set covering the half-open leaf range
/// `[lo, hi_exclusive)`, by greedily growing each leaf to the
/// largest ancestor that both starts exactly at the current cursor
/// and fits entirely inside the remaining range.
pub fn from_range(lo: CellId, hi_exclusive: CellId) -> Vec<CellId> {
    let mut result = Vec::new();
    let mut cursor = lo;

    while cursor < hi_exclusive {
        let mut cell = cursor;
        debug_assert!(cell.is_leaf(), "from_range expects leaf-level endpoints");

        while cell.level() > 0 {
            let parent = cell.immediate_parent();
            if parent.range_min() == cursor && parent.range_max() < hi_exclusive {
                cell = parent;
            } else {
                break;
            }
        }

        result.push(cell);
        cursor = cell.range_max().next_leaf();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(face: u8, steps: i64) -> CellId {
        CellId::from_face(face).advance(steps)
    }

    #[test]
    fn normalize_is_idempotent() {
        let cells = vec![leaf(0, 0), leaf(0, 2), leaf(0, 1)];
        let once = normalize(cells.clone());
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_drops_contained_duplicates() {
        let parent = CellId::from_face(0).child(0);
        let child = parent.child(0);
        let normalized = normalize(vec![parent, child]);
        assert_eq!(normalized, vec![parent]);
    }

    #[test]
    fn normalize_merges_complete_sibling_quartets() {
        let parent = CellId::from_face(0).child(1);
        let children = vec![parent.child(0), parent.child(1), parent.child(2), parent.child(3)];
        assert_eq!(normalize(children), vec![parent]);
    }

    #[test]
    fn from_range_round_trips_through_normalize() {
        let parent = CellId::from_face(2).child(0).child(0);
        let lo = parent.range_min();
        let hi_exclusive = parent.range_max().next_leaf();
        let covering = from_range(lo, hi_exclusive);
        assert_eq!(normalize(covering), vec![parent]);
    }

    #[test]
    fn from_range_of_empty_span_is_empty() {
        let l = CellId::from_face(0).advance(0);
        assert!(from_range(l, l).is_empty());
    }
}
