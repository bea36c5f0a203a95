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

//! §4.4 sweep engine: walks the collapsed endpoints maintaining the
//! currently-open index set, emitting an overlap whenever that set
//! has at least two members and the active segment ends.

use std::collections::BTreeSet;

use super::CellSpace;
use super::endpoint::{Endpoint, Kind};

pub(super) struct Overlap<L> {
    pub indices: Vec<usize>,
    pub start: L,
    pub end: L,
}

pub(super) fn sweep<S: CellSpace>(events: Vec<Endpoint<S::Leaf>>) -> Vec<Overlap<S::Leaf>> {
    let mut open: BTreeSet<usize> = BTreeSet::new();
    // `segment_start` is only meaningful once `open.len() >= 2` has
    // held at least once; it is read again below only after the
    // third step has set it, since the very first event is always an
    // `Open` arriving into an empty `open` set (so step 1 below never
    // fires before step 3 has had a chance to run at least once).
    let mut segment_start: Option<S::Leaf> = None;
    let mut overlaps = Vec::new();

    for event in events {
        if open.len() >= 2 {
            let start = segment_start.expect(
                "sweep: active multi-open segment with no recorded start (internal invariant violated)",
            );
            let end = match event.kind {
                Kind::Open => S::prev(event.leaf),
                Kind::Close => event.leaf,
            };
            overlaps.push(Overlap { indices: open.iter().copied().collect(), start, end });
        }

        match event.kind {
            Kind::Open => {
                for &i in &event.indices {
                    let inserted = open.insert(i);
                    debug_assert!(inserted, "sweep: index {i} opened twice without closing");
                }
            }
            Kind::Close => {
                for &i in &event.indices {
                    let removed = open.remove(&i);
                    debug_assert!(removed, "sweep: index {i} closed without having opened");
                }
            }
        }

        if open.len() >= 2 {
            segment_start = Some(match event.kind {
                Kind::Close => S::next(event.leaf),
                Kind::Open => event.leaf,
            });
        }
    }

    debug_assert!(
        open.is_empty(),
        "sweep: endpoint stream ended with indices still open (unmatched Open/Close)"
    );

    overlaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::IntRanges;

    fn endpoint(leaf: i64, kind: Kind, indices: &[usize]) -> Endpoint<i64> {
        Endpoint { leaf, kind, indices: indices.to_vec() }
    }

    #[test]
    fn no_overlap_when_opens_never_coincide() {
        let events = vec![
            endpoint(0, Kind::Open, &[0]),
            endpoint(5, Kind::Close, &[0]),
            endpoint(6, Kind::Open, &[1]),
            endpoint(10, Kind::Close, &[1]),
        ];
        assert!(sweep::<IntRanges>(events).is_empty());
    }

    #[test]
    fn overlap_spans_the_shared_region() {
        let events = vec![
            endpoint(0, Kind::Open, &[0]),
            endpoint(3, Kind::Open, &[1]),
            endpoint(5, Kind::Close, &[0]),
            endpoint(8, Kind::Close, &[1]),
        ];
        let overlaps = sweep::<IntRanges>(events);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].indices, vec![0, 1]);
        assert_eq!(overlaps[0].start, 3);
        assert_eq!(overlaps[0].end, 5);
    }

    #[test]
    fn single_leaf_overlap_is_not_lost() {
        // index 0 closes at leaf 5, index 1 opens at leaf 5: the
        // Open-before-Close ordering means the endpoint collapser
        // hands the sweep two separate events here, not one, so this
        // test exercises the sweep directly with the ordering the
        // collapser guarantees.
        let events = vec![
            endpoint(0, Kind::Open, &[0]),
            endpoint(5, Kind::Open, &[1]),
            endpoint(5, Kind::Close, &[0]),
            endpoint(9, Kind::Close, &[1]),
        ];
        let overlaps = sweep::<IntRanges>(events);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].indices, vec![0, 1]);
        assert_eq!(overlaps[0].start, 5);
        assert_eq!(overlaps[0].end, 5);
    }

    #[test]
    fn three_way_overlap_then_drop_to_two() {
        let events = vec![
            endpoint(0, Kind::Open, &[0, 1, 2]),
            endpoint(4, Kind::Close, &[2]),
            endpoint(8, Kind::Close, &[0, 1]),
        ];
        let overlaps = sweep::<IntRanges>(events);
        assert_eq!(overlaps.len(), 2);
        assert_eq!(overlaps[0].indices, vec![0, 1, 2]);
        assert_eq!(overlaps[0].start, 0);
        assert_eq!(overlaps[0].end, 4);
        assert_eq!(overlaps[1].indices, vec![0, 1]);
        assert_eq!(overlaps[1].start, 5);
        assert_eq!(overlaps[1].end, 8);
    }
}
