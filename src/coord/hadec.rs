// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (hour angle, declination) coordinates.
 */

use super::RADec;

/// A struct containing an Hour Angle and Declination. All units are in
/// radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HADec {
    /// Hour angle \[radians\]
    pub ha: f64,
    /// Declination \[radians\]
    pub dec: f64,
}

impl HADec {
    /// Make a new `HADec` struct from values in radians.
    pub fn new(ha: f64, dec: f64) -> Self {
        Self { ha, dec }
    }

    /// Given a local sidereal time \[radians\], make a new `RADec` struct from
    /// a `HADec`.
    pub fn to_radec(&self, lst_rad: f64) -> RADec {
        RADec::from_hadec(self, lst_rad)
    }
}

impl std::fmt::Display for HADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}°, {}°)",
            self.ha.to_degrees(),
            self.dec.to_degrees()
        )
    }
}
