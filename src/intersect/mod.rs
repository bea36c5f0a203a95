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

//! The multi-way cell-union intersection finder.
//!
//! Given `N` cell unions, [`find`] computes every non-empty
//! intersection of every non-empty subset of the inputs, attributing
//! each leaf cell to the most inclusive subset that shares it, via a
//! one-dimensional sweep over interval endpoints (pipeline:
//! unions → intervals → events → overlaps → intersections) rather
//! than a `2^N` power-set enumeration. See [`crate::naive`] for the
//! power-set reference this replaces.

mod endpoint;
mod group;
mod interval;
mod sweep;

use serde::{Deserialize, Serialize};

/// The operations the intersection engine needs from a cell
/// hierarchy. Implemented for the real hierarchy by [`crate::s2::S2`];
/// a synthetic, non-geometric implementation is used in tests to
/// exercise the sweep/grouper independently of Hilbert-curve
/// arithmetic.
pub trait CellSpace {
    /// A totally ordered position on the underlying curve.
    type Leaf: Ord + Copy;
    /// A cell at any granularity; a leaf is simply the finest cell.
    type Cell: Copy + std::fmt::Debug + PartialEq + Eq;

    fn range_min(cell: Self::Cell) -> Self::Leaf;
    fn range_max(cell: Self::Cell) -> Self::Leaf;
    fn next(leaf: Self::Leaf) -> Self::Leaf;
    fn prev(leaf: Self::Leaf) -> Self::Leaf;
    /// Idempotent: canonicalizes a cell set into disjoint, maximally
    /// merged form.
    fn normalize(cells: Vec<Self::Cell>) -> Vec<Self::Cell>;
    /// The minimal cell set covering the half-open leaf range
    /// `[lo, hi_exclusive)`.
    fn from_range(lo: Self::Leaf, hi_exclusive: Self::Leaf) -> Vec<Self::Cell>;
}

/// One distinct, maximal grouping of inputs with a shared, disjoint
/// slice of cells: `indices` is ascending-sorted with length >= 2,
/// and `cells` is normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S::Cell: Serialize",
    deserialize = "S::Cell: Deserialize<'de>"
))]
pub struct Intersection<S: CellSpace> {
    pub indices: Vec<usize>,
    pub cells: Vec<S::Cell>,
}

/// Computes every non-empty intersection of every non-empty subset
/// of `unions`, one [`Intersection`] per distinct index-set with at
/// least two members.
///
/// Each input union may be empty or unnormalized; both are tolerated
/// (`normalize` is called once per input). Fewer than two unions
/// yields an empty result. Output ordering is unspecified.
pub fn find<S: CellSpace>(unions: &[Vec<S::Cell>]) -> Vec<Intersection<S>> {
    if unions.len() < 2 {
        return Vec::new();
    }

    let mut raw_endpoints = Vec::new();
    for (index, union) in unions.iter().enumerate() {
        let normalized = S::normalize(union.clone());
        interval::extract::<S>(&normalized, index, &mut raw_endpoints);
    }

    let events = endpoint::collapse::<S>(raw_endpoints);
    let overlaps = sweep::sweep::<S>(events);
    group::group::<S>(overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::IntRanges;

    fn u(ranges: &[(i64, i64)]) -> Vec<(i64, i64)> {
        ranges.to_vec()
    }

    #[test]
    fn fewer_than_two_inputs_is_empty() {
        assert_eq!(find::<IntRanges>(&[]), Vec::new());
        assert_eq!(find::<IntRanges>(&[u(&[(0, 5)])]), Vec::new());
    }

    #[test]
    fn disjoint_inputs_have_no_intersection() {
        let a = u(&[(0, 5)]);
        let b = u(&[(6, 10)]);
        assert_eq!(find::<IntRanges>(&[a, b]), Vec::new());
    }

    #[test]
    fn identical_inputs_intersect_fully() {
        let a = u(&[(0, 5)]);
        let result = find::<IntRanges>(&[a.clone(), a.clone()]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].indices, vec![0, 1]);
        assert_eq!(result[0].cells, vec![(0, 5)]);
    }

    #[test]
    fn five_leaf_scenario_from_spec() {
        // u0 = {-4,-3,-2,-1,1,3}, u1 = {-2,-1,0,1,3}, u2 = {-3,-2,3}
        let u0 = u(&[(-4, -1), (1, 1), (3, 3)]);
        let u1 = u(&[(-2, 1), (3, 3)]);
        let u2 = u(&[(-3, -2), (3, 3)]);

        let mut result = find::<IntRanges>(&[u0, u1, u2]);
        result.sort_by(|a, b| a.indices.cmp(&b.indices));

        assert_eq!(result.len(), 3);

        assert_eq!(result[0].indices, vec![0, 1]);
        assert_eq!(result[0].cells, vec![(-1, -1), (1, 1)]);

        assert_eq!(result[1].indices, vec![0, 1, 2]);
        assert_eq!(result[1].cells, vec![(-2, -2), (3, 3)]);

        assert_eq!(result[2].indices, vec![0, 2]);
        assert_eq!(result[2].cells, vec![(-3, -3)]);
    }
}
