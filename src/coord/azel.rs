// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (azimuth, elevation) coordinates.
 */

use super::{HADec, TransformError};
use crate::constants::{FRAC_PI_2, TAU};

/// A struct containing an Azimuth and Elevation. All units are in radians.
/// Azimuth is measured from north through east.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AzEl {
    /// Azimuth \[radians\]
    pub az: f64,
    /// Elevation \[radians\]
    pub el: f64,
}

impl AzEl {
    /// Make a new `AzEl` struct from values in radians.
    pub fn new(az: f64, el: f64) -> Self {
        Self { az, el }
    }

    /// Make a new `AzEl` struct from values in degrees.
    pub fn new_degrees(az: f64, el: f64) -> Self {
        Self::new(az.to_radians(), el.to_radians())
    }

    /// Convert the horizon coordinates to equatorial coordinates (Hour Angle
    /// and Declination), given the local latitude on Earth \[radians\].
    pub fn to_hadec(&self, latitude: f64) -> Result<HADec, TransformError> {
        if !(0.0..TAU).contains(&self.az) {
            return Err(TransformError::Azimuth(self.az));
        }
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&self.el) {
            return Err(TransformError::Elevation(self.el));
        }

        let (s_az, c_az) = self.az.sin_cos();
        let (s_el, c_el) = self.el.sin_cos();
        let (s_lat, c_lat) = latitude.sin_cos();

        let ha_y = -s_az * c_el;
        let ha_x = -c_az * s_lat * c_el + s_el * c_lat;
        let ha = ha_y.atan2(ha_x);
        // Keep asin's argument in its domain despite rounding.
        let dec = (s_lat * s_el + c_lat * c_el * c_az).clamp(-1.0, 1.0).asin();
        Ok(HADec::new(ha, dec))
    }
}

impl std::fmt::Display for AzEl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}°, {}°)",
            self.az.to_degrees(),
            self.el.to_degrees()
        )
    }
}
