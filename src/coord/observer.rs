// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
The location of whoever is holding the telescope.
 */

use serde::{Deserialize, Serialize};

use super::TransformError;

/// A point on (or above) the Earth's surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude \[degrees\]
    #[serde(rename = "latitude")]
    pub latitude_deg: f64,

    /// Longitude \[degrees\], east positive
    #[serde(rename = "longitude")]
    pub longitude_deg: f64,

    /// Height above the mean Earth radius \[metres\]
    #[serde(rename = "altitude")]
    pub altitude_m: f64,
}

impl Observer {
    /// Make a new `Observer`, checking that the location is sensible.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Observer, TransformError> {
        let o = Observer {
            latitude_deg,
            longitude_deg,
            altitude_m,
        };
        o.validate()?;
        Ok(o)
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(TransformError::ObserverLatitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(TransformError::ObserverLongitude(self.longitude_deg));
        }
        if !self.altitude_m.is_finite() {
            return Err(TransformError::ObserverAltitude(self.altitude_m));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

impl std::fmt::Display for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}°, {}°, {} m)",
            self.latitude_deg, self.longitude_deg, self.altitude_m
        )
    }
}
