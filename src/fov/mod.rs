// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Field-of-view geometry: how much sky a camera sees, and whether a point on
//! the sky is inside it.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{constants::PI, math::haversine};

/// The optics of a telescope and camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpticalConfig {
    /// Focal length of the telescope \[millimetres\]
    pub focal_length: f64,

    /// Size of the camera's sensor \[millimetres\]
    pub sensor_size: f64,

    /// Magnification of a barlow lens (> 1) or focal reducer (< 1). Use 1 if
    /// neither is fitted.
    #[serde(default = "default_barlow_factor")]
    pub barlow_factor: f64,
}

fn default_barlow_factor() -> f64 {
    1.0
}

impl OpticalConfig {
    pub fn new(
        focal_length: f64,
        sensor_size: f64,
        barlow_factor: f64,
    ) -> Result<OpticalConfig, FovError> {
        let oc = OpticalConfig {
            focal_length,
            sensor_size,
            barlow_factor,
        };
        oc.validate()?;
        Ok(oc)
    }

    pub fn validate(&self) -> Result<(), FovError> {
        for (name, value) in [
            ("focal length", self.focal_length),
            ("sensor size", self.sensor_size),
            ("barlow factor", self.barlow_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FovError::OpticalParameter { name, value });
            }
        }
        Ok(())
    }

    /// The angular diameter of the field of view \[degrees\].
    pub fn fov_angular_diameter(&self) -> Result<f64, FovError> {
        fov_angular_diameter(self.focal_length, self.sensor_size, self.barlow_factor)
    }
}

/// The angular diameter of the field of view \[degrees\] of a camera with a
/// sensor of `sensor_size` behind a telescope of `focal_length` (in the same
/// units) with a barlow or reducer of `barlow_factor`.
pub fn fov_angular_diameter(
    focal_length: f64,
    sensor_size: f64,
    barlow_factor: f64,
) -> Result<f64, FovError> {
    OpticalConfig {
        focal_length,
        sensor_size,
        barlow_factor,
    }
    .validate()?;
    Ok((180.0 / PI) / (focal_length * barlow_factor) * sensor_size)
}

/// The great-circle distance between two points on the sky \[degrees, [0,
/// 180]\]. All arguments are in degrees.
pub fn angular_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> Result<f64, FovError> {
    for ra in [ra1, ra2] {
        if !(0.0..=360.0).contains(&ra) {
            return Err(FovError::Ra(ra));
        }
    }
    for dec in [dec1, dec2] {
        if !(-90.0..=90.0).contains(&dec) {
            return Err(FovError::Dec(dec));
        }
    }

    let distance = haversine(
        dec1.to_radians(),
        ra1.to_radians(),
        dec2.to_radians(),
        ra2.to_radians(),
    );
    Ok(distance.to_degrees().clamp(0.0, 180.0))
}

/// Is the point (`ra1`, `dec1`) strictly within half of `fov` of the point
/// (`ra2`, `dec2`)? All arguments are in degrees.
pub fn is_intersecting(
    ra1: f64,
    dec1: f64,
    ra2: f64,
    dec2: f64,
    fov: f64,
) -> Result<bool, FovError> {
    if !fov.is_finite() || fov <= 0.0 {
        return Err(FovError::Diameter(fov));
    }
    Ok(angular_distance(ra1, dec1, ra2, dec2)? < fov / 2.0)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FovError {
    #[error("The {name} must be a positive number; got {value}")]
    OpticalParameter { name: &'static str, value: f64 },

    #[error("The field-of-view diameter must be a positive number of degrees; got {0}")]
    Diameter(f64),

    #[error("Right ascension must be between 0 and 360 degrees; got {0}")]
    Ra(f64),

    #[error("Declination must be between -90 and 90 degrees; got {0}")]
    Dec(f64),
}
