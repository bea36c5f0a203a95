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

//! §4.5 grouper: re-aggregates overlaps by their index-set and
//! re-materializes each group's leaves into a normalized cell union.
//!
//! Overlaps are emitted only at event boundaries, where the open set
//! changes, so a cell counted toward one index-set's overlap can
//! never also fall in a strict superset's overlap: that would need
//! an extra index open at the same sweep position, which is a
//! different event composition. Disjointness therefore falls out of
//! the sweep rather than needing a separate pass here.

use std::collections::BTreeMap;

use super::sweep::Overlap;
use super::{CellSpace, Intersection};

pub(super) fn group<S: CellSpace>(overlaps: Vec<Overlap<S::Leaf>>) -> Vec<Intersection<S>> {
    let mut groups: BTreeMap<Vec<usize>, Vec<S::Cell>> = BTreeMap::new();

    for overlap in overlaps {
        let half_open_end = S::next(overlap.end);
        let cells = S::from_range(overlap.start, half_open_end);
        groups.entry(overlap.indices).or_default().extend(cells);
    }

    groups
        .into_iter()
        .map(|(indices, cells)| Intersection { indices, cells: S::normalize(cells) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::IntRanges;

    fn overlap(indices: &[usize], start: i64, end: i64) -> Overlap<i64> {
        Overlap { indices: indices.to_vec(), start, end }
    }

    #[test]
    fn coalesces_repeated_index_sets() {
        let overlaps = vec![overlap(&[0, 1], 0, 2), overlap(&[0, 1], 10, 12)];
        let result = group::<IntRanges>(overlaps);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].indices, vec![0, 1]);
        assert_eq!(result[0].cells, vec![(0, 2), (10, 12)]);
    }

    #[test]
    fn distinct_index_sets_stay_separate() {
        let overlaps = vec![overlap(&[0, 1], 0, 2), overlap(&[0, 1, 2], 5, 7)];
        let mut result = group::<IntRanges>(overlaps);
        result.sort_by(|a, b| a.indices.cmp(&b.indices));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].indices, vec![0, 1]);
        assert_eq!(result[1].indices, vec![0, 1, 2]);
    }
}
