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

//! §4.3 endpoint collapser: sorts endpoints from every input and
//! merges coincident same-kind endpoints into a single multi-index
//! event.

use itertools::Itertools;

use super::CellSpace;
use super::interval::RawEndpoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Open,
    Close,
}

impl Kind {
    /// `Open` sorts before `Close` at the same leaf: intervals are
    /// closed, so a close for index `a` must not drop `a` from the
    /// open set before an open for index `b` at the same leaf can
    /// observe it, or the single-leaf overlap of `a` and `b` would
    /// be lost.
    fn rank(self) -> u8 {
        match self {
            Kind::Open => 0,
            Kind::Close => 1,
        }
    }
}

/// A collapsed endpoint: at most one per `(leaf, kind)` pair, with
/// its `indices` sorted ascending.
pub(super) struct Endpoint<L> {
    pub leaf: L,
    pub kind: Kind,
    pub indices: Vec<usize>,
}

pub(super) fn collapse<S: CellSpace>(mut raw: Vec<RawEndpoint<S::Leaf>>) -> Vec<Endpoint<S::Leaf>> {
    raw.sort_by(|a, b| a.leaf.cmp(&b.leaf).then(a.kind.rank().cmp(&b.kind.rank())));

    raw.into_iter()
        .map(|e| Endpoint { leaf: e.leaf, kind: e.kind, indices: vec![e.index] })
        .coalesce(|mut a, b| {
            if a.leaf == b.leaf && a.kind == b.kind {
                a.indices.extend(b.indices);
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .map(|mut e| {
            e.indices.sort_unstable();
            e
        })
        .collect()
}
