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

//! A closed interval `[lo, hi]` on an ordered domain, with an empty
//! sentinel (`lo > hi`). Generic so the same arithmetic serves both
//! real-valued angle intervals and the discrete leaf ranges the
//! `intersect` core works with.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub lo: T,
    pub hi: T,
}

impl<T: PartialOrd + Copy> Interval<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Interval { lo, hi }
    }

    pub fn is_empty(&self) -> bool {
        !(self.lo <= self.hi)
    }

    pub fn contains(&self, point: T) -> bool {
        !self.is_empty() && self.lo <= point && point <= self.hi
    }

    pub fn contains_interval(&self, other: &Interval<T>) -> bool {
        if other.is_empty() {
            return true;
        }
        !self.is_empty() && self.lo <= other.lo && other.hi <= self.hi
    }

    pub fn intersection(&self, other: &Interval<T>) -> Interval<T>
    where
        T: PartialOrd,
    {
        if self.is_empty() || other.is_empty() {
            return Self::empty_at(self.lo);
        }
        let lo = if self.lo > other.lo { self.lo } else { other.lo };
        let hi = if self.hi < other.hi { self.hi } else { other.hi };
        Interval { lo, hi }
    }

    pub fn union(&self, other: &Interval<T>) -> Interval<T> {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let lo = if self.lo < other.lo { self.lo } else { other.lo };
        let hi = if self.hi > other.hi { self.hi } else { other.hi };
        Interval { lo, hi }
    }

    fn empty_at(lo: T) -> Interval<T>
    where
        T: PartialOrd,
    {
        // Any lo > hi pair is a valid empty sentinel; reusing `lo` on
        // both sides and nudging is not generically possible, so we
        // rely on callers never reading lo/hi of an empty interval.
        Interval { lo, hi: lo }
    }
}

impl<T> Interval<T>
where
    T: PartialOrd + Copy + Add<Output = T> + Sub<Output = T>,
{
    /// Returns the interval expanded by `margin` on both ends.
    /// Contracts instead when `margin` is negative (per-coordinate
    /// subtraction/addition), and may become empty.
    pub fn expanded(&self, margin: T) -> Interval<T> {
        Interval {
            lo: self.lo - margin,
            hi: self.hi + margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sentinel() {
        let empty = Interval::new(5.0, 3.0);
        assert!(empty.is_empty());
        assert!(!empty.contains(4.0));
    }

    #[test]
    fn intersection_of_overlapping() {
        let a = Interval::new(0.0, 10.0);
        let b = Interval::new(5.0, 15.0);
        let i = a.intersection(&b);
        assert_eq!(i, Interval::new(5.0, 10.0));
    }

    #[test]
    fn intersection_of_disjoint_is_empty() {
        let a = Interval::new(0, 5);
        let b = Interval::new(10, 15);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn union_spans_both() {
        let a = Interval::new(0, 5);
        let b = Interval::new(10, 15);
        assert_eq!(a.union(&b), Interval::new(0, 15));
    }

    #[test]
    fn expanded_grows_both_ends() {
        let a = Interval::new(5, 10);
        assert_eq!(a.expanded(2), Interval::new(3, 12));
    }
}
