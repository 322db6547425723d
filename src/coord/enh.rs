// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::AzEl;
use crate::math::wrap_tau;

/// East, North and Height coordinates of something relative to an observer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ENH {
    /// East \[metres\]
    pub e: f64,
    /// North \[metres\]
    pub n: f64,
    /// Height \[metres\]
    pub h: f64,
}

impl ENH {
    /// Get the direction of this vector as seen by the observer.
    pub fn to_azel(&self) -> AzEl {
        // Rotate the maths convention (from east, anticlockwise) into the
        // compass convention (from north, clockwise).
        let az = wrap_tau(450_f64.to_radians() - self.n.atan2(self.e));
        let el = self.h.atan2(self.e.hypot(self.n));
        AzEl::new(az, el)
    }
}
