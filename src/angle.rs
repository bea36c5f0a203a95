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

use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A scalar angle, stored internally as radians.
///
/// `Angle` is a thin wrapper, not a unit of position: it has no
/// notion of latitude/longitude wraparound on its own, see
/// [`Angle::normalized`] for that.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns the equivalent angle in `[0, 2*PI)`.
    pub fn normalized(self) -> Angle {
        let two_pi = 2.0 * PI;
        let wrapped = self.0 % two_pi;
        Angle(if wrapped < 0.0 { wrapped + two_pi } else { wrapped })
    }

    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_round_trip() {
        let a = Angle::from_degrees(90.0);
        assert!((a.radians() - PI / 2.0).abs() < 1e-12);
        assert!((a.degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn normalized_wraps_negative_angles() {
        let a = Angle::from_degrees(-90.0).normalized();
        assert!((a.degrees() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn normalized_is_idempotent() {
        let a = Angle::from_degrees(725.0).normalized();
        assert_eq!(a, a.normalized());
    }
}
