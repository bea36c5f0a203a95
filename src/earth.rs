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

//! Earth radius/altitude constants and the bidirectional conversions
//! between angles and lengths, and between steradians and areas, that
//! the rest of the library treats Earth as a perfect sphere of radius
//! [`RADIUS_METERS`] for.

use crate::angle::Angle;

/// Mean Earth radius, in meters (the same value used by WGS84's
/// authalic sphere approximation).
pub const RADIUS_METERS: f64 = 6_371_010.0;

pub fn angle_to_meters(angle: Angle) -> f64 {
    angle.radians() * RADIUS_METERS
}

pub fn meters_to_angle(meters: f64) -> Angle {
    Angle::from_radians(meters / RADIUS_METERS)
}

/// Converts a solid angle in steradians to the corresponding area in
/// square meters on the Earth's surface, via `R^2`.
pub fn steradians_to_square_meters(steradians: f64) -> f64 {
    steradians * RADIUS_METERS * RADIUS_METERS
}

pub fn square_meters_to_steradians(square_meters: f64) -> f64 {
    square_meters / (RADIUS_METERS * RADIUS_METERS)
}
