// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (right ascension, declination) coordinates.
 */

use serde::{Deserialize, Serialize};

use super::{HADec, Hms};
use crate::math::{normalize_longitude, wrap_tau};

/// A struct containing a Right Ascension and Declination. Unlike the other
/// coordinate types, all units are in degrees; this is what users supply and
/// what gets reported.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RADec {
    /// Right ascension \[degrees\]
    pub ra: f64,
    /// Declination \[degrees\]
    pub dec: f64,
}

impl RADec {
    /// Make a new `RADec` struct from values in degrees.
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Make a new `RADec` struct from values in radians.
    pub fn new_radians(ra: f64, dec: f64) -> Self {
        Self::new(ra.to_degrees(), dec.to_degrees())
    }

    /// Make a new `RADec` from a sexagesimal right ascension and a declination
    /// in degrees.
    pub fn from_hms(ra: Hms, dec: f64) -> Self {
        Self::new(ra.to_degrees(), dec)
    }

    /// Given a local sidereal time \[radians\], make a new `RADec` struct from
    /// a `HADec`. The right ascension is always within [0, 360).
    pub fn from_hadec(hadec: &HADec, lst_rad: f64) -> Self {
        let ra = normalize_longitude(wrap_tau(lst_rad - hadec.ha).to_degrees());
        Self {
            ra,
            dec: hadec.dec.to_degrees().clamp(-90.0, 90.0),
        }
    }
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}°, {}°)", self.ra, self.dec)
    }
}
