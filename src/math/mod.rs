// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Angle and frame helper mathematics.
//!
//! Spherical coordinates follow the physics convention: `theta` is the
//! azimuthal angle (longitude-like, [0, 2π)) and `phi` is the polar angle
//! (colatitude, [0, π]).

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::constants::{FRAC_PI_2, PI, TAU};

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Map any longitude \[degrees\] into [0, 360).
///
/// # Examples
///
/// `assert_abs_diff_eq!(normalize_longitude(-90.0), 270.0);`
pub fn normalize_longitude(lon: f64) -> f64 {
    let lon = lon.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negative inputs.
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

/// Map a longitude in [0, 360) \[degrees\] back into (-180, 180].
pub fn unconvert_longitude(lon: f64) -> f64 {
    if lon <= 180.0 {
        lon
    } else {
        lon - 360.0
    }
}

/// Fold an angle \[radians\] into [0, 2π). Unlike a bare `rem_euclid`, this
/// never returns 2π.
pub fn wrap_tau(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Convert a latitude \[degrees\] to a colatitude (polar angle) \[radians\].
pub fn lat_to_colatitude(lat: f64) -> Result<f64, AngleError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AngleError::Latitude(lat));
    }
    Ok(FRAC_PI_2 - deg_to_rad(lat))
}

/// Convert a colatitude \[radians\] to a latitude \[degrees\].
pub fn colatitude_to_lat(phi: f64) -> Result<f64, AngleError> {
    if !(0.0..=PI).contains(&phi) {
        return Err(AngleError::Phi(phi));
    }
    Ok(rad_to_deg(FRAC_PI_2 - phi))
}

/// Convert a longitude in (-180, 180] \[degrees\] to an azimuthal angle in
/// [0, 2π) \[radians\].
pub fn lon_to_theta(lon: f64) -> Result<f64, AngleError> {
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AngleError::Longitude(lon));
    }
    Ok(deg_to_rad(normalize_longitude(lon)))
}

/// Convert an azimuthal angle \[radians\] to a longitude in (-180, 180]
/// \[degrees\].
pub fn theta_to_lon(theta: f64) -> Result<f64, AngleError> {
    if !(0.0..=TAU).contains(&theta) {
        return Err(AngleError::Theta(theta));
    }
    Ok(unconvert_longitude(rad_to_deg(theta)))
}

/// Convert spherical coordinates to Cartesian coordinates. `theta` is the
/// azimuthal angle and `phi` is the polar angle, both in radians.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> Result<[f64; 3], AngleError> {
    if !(0.0..=PI).contains(&phi) {
        return Err(AngleError::Phi(phi));
    }
    if !(0.0..TAU).contains(&theta) {
        return Err(AngleError::Theta(theta));
    }

    let (s_phi, c_phi) = phi.sin_cos();
    let (s_theta, c_theta) = theta.sin_cos();
    Ok([r * s_phi * c_theta, r * s_phi * s_theta, r * c_phi])
}

/// Great-circle angle between two points on a sphere \[radians\], using the
/// haversine formula. All arguments are in radians; `lat`s are measured from
/// the equator.
pub(crate) fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` ever so slightly above 1.
    2.0 * a.sqrt().min(1.0).asin()
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    #[error("Latitude must be between -90 and 90 degrees; got {0}")]
    Latitude(f64),

    #[error("Longitude must be between -180 and 180 degrees; got {0}")]
    Longitude(f64),

    #[error("Phi (colatitude) must be between 0 and pi radians; got {0}")]
    Phi(f64),

    #[error("Theta must be within [0, 2pi) radians; got {0}")]
    Theta(f64),
}
