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

//! A spherical-geometry library. Most of this crate is thin value
//! types — [`angle::Angle`], [`r1::Interval`], [`r2::Vector`],
//! [`earth`]'s constants, and [`geojson`]'s predicate helpers — that
//! the [`intersect`] module's multi-way cell-union intersection
//! engine treats as external collaborators. `intersect` is the
//! reason this crate exists: see its module documentation.

pub mod angle;
pub mod earth;
pub mod geojson;
pub mod intersect;
pub mod naive;
pub mod r1;
pub mod r2;
pub mod s2;
pub mod test_support;

pub use intersect::{find, CellSpace, Intersection};
pub use naive::find_naive;
