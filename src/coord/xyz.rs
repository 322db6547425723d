// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle Earth-centred Cartesian coordinates.
 */

use super::{Observer, TransformError, ENH};
use crate::{
    constants::{EARTH_RADIUS_METRES, FRAC_PI_2, TAU},
    math::{lat_to_colatitude, lon_to_theta, spherical_to_cartesian, wrap_tau},
};

/// Cartesian coordinates centred on the Earth's centre on a spherical Earth.
/// All azimuthal angles are offset by π/2 before conversion, so zero longitude
/// lies along the +Y axis. All units are in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XyzGeocentric {
    /// x-coordinate \[metres\]
    pub x: f64,
    /// y-coordinate \[metres\]
    pub y: f64,
    /// z-coordinate \[metres\]
    pub z: f64,
}

impl XyzGeocentric {
    /// Get the position of an observer.
    pub fn from_observer(observer: &Observer) -> Result<XyzGeocentric, TransformError> {
        observer.validate()?;
        let theta = wrap_tau(lon_to_theta(observer.longitude_deg)? + FRAC_PI_2);
        let phi = lat_to_colatitude(observer.latitude_deg)?;
        Self::from_spherical(EARTH_RADIUS_METRES + observer.altitude_m, theta, phi)
    }

    /// Get the position of an aircraft given its azimuthal angle `theta`
    /// \[radians, [0, 2π]\], its colatitude `phi` \[radians, [0, π]\] and its
    /// altitude \[metres\].
    pub fn from_aircraft(
        theta: f64,
        phi: f64,
        altitude_m: f64,
    ) -> Result<XyzGeocentric, TransformError> {
        if !(0.0..=TAU).contains(&theta) {
            return Err(crate::math::AngleError::Theta(theta).into());
        }
        if !altitude_m.is_finite() {
            return Err(TransformError::AircraftAltitude(altitude_m));
        }
        Self::from_spherical(
            EARTH_RADIUS_METRES + altitude_m,
            wrap_tau(theta + FRAC_PI_2),
            phi,
        )
    }

    fn from_spherical(r: f64, theta: f64, phi: f64) -> Result<XyzGeocentric, TransformError> {
        let [x, y, z] = spherical_to_cartesian(r, theta, phi)?;
        Ok(XyzGeocentric { x, y, z })
    }

    /// Rotate this vector into the East-North-Height frame of a location on
    /// Earth. `self` should be a vector relative to that location (e.g. the
    /// difference of two positions).
    pub fn to_enh(self, latitude_deg: f64, longitude_deg: f64) -> Result<ENH, TransformError> {
        let (s_theta, c_theta) = lon_to_theta(longitude_deg)?.sin_cos();
        let (s_phi, c_phi) = lat_to_colatitude(latitude_deg)?.sin_cos();

        let x = c_theta * self.x + s_theta * self.y;
        let y = -s_theta * c_phi * self.x + c_theta * c_phi * self.y - s_phi * self.z;
        let z = -s_theta * s_phi * self.x + c_theta * s_phi * self.y + c_phi * self.z;
        // The rotated frame points west and south.
        Ok(ENH { e: -x, n: -y, h: z })
    }
}

impl std::ops::Sub for XyzGeocentric {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        XyzGeocentric {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
