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

//! §4.2 interval extractor: turns one normalized cell union into the
//! `Open`/`Close` endpoints of its merged, contiguous leaf ranges.

use super::CellSpace;
use super::endpoint::Kind;

/// A single-input endpoint, not yet collapsed across inputs.
pub(super) struct RawEndpoint<L> {
    pub leaf: L,
    pub kind: Kind,
    pub index: usize,
}

/// Appends the endpoints for one normalized union to `out`. Cells
/// whose leaf ranges are contiguous (no gap between one cell's
/// `range_max` and the next cell's `range_min`) are merged into a
/// single interval rather than spawning independent endpoints, since
/// the sweep would otherwise see a spurious zero-gap close/open pair.
pub(super) fn extract<S: CellSpace>(
    union: &[S::Cell],
    index: usize,
    out: &mut Vec<RawEndpoint<S::Leaf>>,
) {
    let mut last_end: Option<S::Leaf> = None;

    for &cell in union {
        let start = S::range_min(cell);
        let end = S::range_max(cell);

        match last_end {
            None => out.push(RawEndpoint { leaf: start, kind: Kind::Open, index }),
            Some(last) if S::next(last) != start => {
                out.push(RawEndpoint { leaf: last, kind: Kind::Close, index });
                out.push(RawEndpoint { leaf: start, kind: Kind::Open, index });
            }
            Some(_) => {}
        }

        last_end = Some(end);
    }

    if let Some(last) = last_end {
        out.push(RawEndpoint { leaf: last, kind: Kind::Close, index });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::IntRanges;

    fn leaves(endpoints: &[RawEndpoint<i64>]) -> Vec<(i64, Kind)> {
        endpoints.iter().map(|e| (e.leaf, e.kind)).collect()
    }

    #[test]
    fn empty_union_has_no_endpoints() {
        let mut out = Vec::new();
        extract::<IntRanges>(&[], 0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn single_cell_opens_and_closes() {
        let mut out = Vec::new();
        extract::<IntRanges>(&[(3, 7)], 0, &mut out);
        assert_eq!(leaves(&out), vec![(3, Kind::Open), (7, Kind::Close)]);
    }

    #[test]
    fn contiguous_cells_merge_into_one_interval() {
        let mut out = Vec::new();
        extract::<IntRanges>(&[(3, 5), (6, 9)], 0, &mut out);
        assert_eq!(leaves(&out), vec![(3, Kind::Open), (9, Kind::Close)]);
    }

    #[test]
    fn non_contiguous_cells_produce_separate_intervals() {
        let mut out = Vec::new();
        extract::<IntRanges>(&[(3, 5), (7, 9)], 0, &mut out);
        assert_eq!(
            leaves(&out),
            vec![(3, Kind::Open), (5, Kind::Close), (7, Kind::Open), (9, Kind::Close)]
        );
    }
}
