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

//! A brute-force, power-set reference implementation of
//! [`crate::intersect::find`]'s contract: the `O(2^N)` algorithm
//! spec.md's overview says the sweep-based core replaces, kept here
//! purely as a test oracle the way the teacher crate keeps
//! `NaiveGapQueryIntervalTree` alongside its optimized counterpart.
//!
//! Do not reach for this in real use: it enumerates every subset of
//! the inputs and is exponential in the number of unions.

use crate::intersect::{CellSpace, Intersection};
use crate::r1::Interval;

/// Same contract as [`crate::intersect::find`], computed by brute
/// force: every subset's pairwise interval intersection, then each
/// subset's cells reduced by subtracting every strict superset's
/// (already-reduced) cells so each leaf lands in its most inclusive
/// subset.
pub fn find_naive<S: CellSpace>(unions: &[Vec<S::Cell>]) -> Vec<Intersection<S>> {
    let n = unions.len();
    if n < 2 {
        return Vec::new();
    }
    assert!(n <= 20, "find_naive is exponential in the input count; {n} inputs is impractical");

    let interval_lists: Vec<Vec<Interval<S::Leaf>>> = unions
        .iter()
        .map(|u| {
            S::normalize(u.clone())
                .into_iter()
                .map(|c| Interval::new(S::range_min(c), S::range_max(c)))
                .collect()
        })
        .collect();

    let mut raw: Vec<(Vec<usize>, Vec<Interval<S::Leaf>>)> = Vec::new();
    for mask in 1u32..(1u32 << n) {
        if mask.count_ones() < 2 {
            continue;
        }
        let indices: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        let mut acc = interval_lists[indices[0]].clone();
        for &i in &indices[1..] {
            acc = intersect_sorted(&acc, &interval_lists[i]);
            if acc.is_empty() {
                break;
            }
        }
        if !acc.is_empty() {
            raw.push((indices, acc));
        }
    }

    // Largest subsets first, so each subset only ever subtracts
    // against already-finalized strict supersets.
    raw.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut claimed: Vec<(Vec<usize>, Vec<Interval<S::Leaf>>)> = Vec::new();
    let mut results = Vec::new();
    for (indices, intervals) in raw {
        let mut remaining = intervals;
        for (other_indices, other_intervals) in &claimed {
            if is_strict_superset(other_indices, &indices) {
                remaining = subtract_sorted::<S>(&remaining, other_intervals);
                if remaining.is_empty() {
                    break;
                }
            }
        }
        if remaining.is_empty() {
            continue;
        }
        let cells = remaining
            .iter()
            .flat_map(|iv| S::from_range(iv.lo, S::next(iv.hi)))
            .collect::<Vec<_>>();
        claimed.push((indices.clone(), remaining));
        results.push(Intersection { indices, cells: S::normalize(cells) });
    }

    results
}

fn is_strict_superset(candidate: &[usize], of: &[usize]) -> bool {
    candidate.len() > of.len() && of.iter().all(|i| candidate.contains(i))
}

/// Intersects two sorted, disjoint interval lists, merge-style.
fn intersect_sorted<L: Ord + Copy>(a: &[Interval<L>], b: &[Interval<L>]) -> Vec<Interval<L>> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let lo = if a[i].lo > b[j].lo { a[i].lo } else { b[j].lo };
        let hi = if a[i].hi < b[j].hi { a[i].hi } else { b[j].hi };
        if lo <= hi {
            result.push(Interval::new(lo, hi));
        }
        if a[i].hi < b[j].hi {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}

/// Subtracts every interval in `cut` from the sorted, disjoint
/// interval list `from`, splitting entries that are only partially
/// covered.
fn subtract_sorted<S: CellSpace>(
    from: &[Interval<S::Leaf>],
    cut: &[Interval<S::Leaf>],
) -> Vec<Interval<S::Leaf>> {
    let mut result = from.to_vec();
    for piece in cut {
        let mut next_result = Vec::new();
        for iv in result {
            if iv.hi < piece.lo || piece.hi < iv.lo {
                next_result.push(iv);
                continue;
            }
            if iv.lo < piece.lo {
                next_result.push(Interval::new(iv.lo, S::prev(piece.lo)));
            }
            if piece.hi < iv.hi {
                next_result.push(Interval::new(S::next(piece.hi), iv.hi));
            }
        }
        result = next_result;
    }
    result
}
