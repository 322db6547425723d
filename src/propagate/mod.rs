// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Move aircraft along great circles at constant ground speed.
//!
//! Positions are expressed as spherical angles: `phi` is the colatitude
//! (0 at the north pole, π at the south pole) and `theta` is the longitude
//! folded into [0, 2π).

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::{
    constants::{PI, POLE_EPSILON, TAU},
    math::{normalize_longitude, wrap_tau},
};

/// What to do when an aircraft is so close to a pole that its rate of change
/// of longitude can't be computed.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PolePolicy {
    /// Hold the aircraft's longitude still while it is over the pole.
    #[default]
    Freeze,

    /// Fail the computation.
    Error,
}

/// The constant-velocity motion of something over a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreatCircleMotion {
    /// Ground speed \[metres / second\]
    speed: f64,

    /// The radius of the sphere plus the height above it \[metres\]
    distance_from_centre: f64,

    /// Direction of travel \[radians, clockwise from north\]
    bearing: f64,

    /// Starting colatitude \[radians\]
    initial_colat: f64,

    /// Starting longitude \[radians, [0, 2π)\]
    initial_theta: f64,
}

impl GreatCircleMotion {
    /// Set up a motion. Angles are in degrees.
    pub fn new(
        speed: f64,
        radius: f64,
        height: f64,
        bearing_deg: f64,
        initial_lat_deg: f64,
        initial_lon_deg: f64,
    ) -> Result<GreatCircleMotion, PropagationError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(PropagationError::Speed(speed));
        }
        let distance_from_centre = radius + height;
        if !distance_from_centre.is_finite() || distance_from_centre <= 0.0 {
            return Err(PropagationError::Radius {
                radius,
                height,
            });
        }
        if !bearing_deg.is_finite() {
            return Err(PropagationError::Bearing(bearing_deg));
        }
        if !(-90.0..=90.0).contains(&initial_lat_deg) {
            return Err(PropagationError::Latitude(initial_lat_deg));
        }
        if !(-180.0..=180.0).contains(&initial_lon_deg) {
            return Err(PropagationError::Longitude(initial_lon_deg));
        }

        Ok(GreatCircleMotion {
            speed,
            distance_from_centre,
            bearing: bearing_deg.to_radians(),
            initial_colat: (90.0 - initial_lat_deg).to_radians(),
            initial_theta: wrap_tau(normalize_longitude(initial_lon_deg).to_radians()),
        })
    }

    /// The rate at which the colatitude decreases \[radians / second\].
    pub fn phi_angular_speed(&self) -> f64 {
        self.speed / self.distance_from_centre * self.bearing.cos()
    }

    /// The colatitude after `elapsed` seconds, before it is folded back into
    /// [0, π]. Negative values mean the north pole has been crossed.
    pub fn phi_signed(&self, elapsed: f64) -> f64 {
        -self.phi_angular_speed() * elapsed + self.initial_colat
    }

    /// The colatitude \[radians, [0, π]\] after `elapsed` seconds.
    pub fn phi(&self, elapsed: f64) -> f64 {
        let phi = self.phi_signed(elapsed).rem_euclid(TAU).abs();
        if phi > PI {
            TAU - phi
        } else {
            phi
        }
    }

    /// The rate at which the longitude increases after `elapsed` seconds
    /// \[radians / second\].
    pub fn theta_angular_speed(
        &self,
        elapsed: f64,
        pole_policy: PolePolicy,
    ) -> Result<f64, PropagationError> {
        let numerator = self.speed * self.bearing.sin();
        if numerator == 0.0 {
            return Ok(0.0);
        }

        let s_phi = self.phi(elapsed).sin();
        if s_phi < POLE_EPSILON {
            return match pole_policy {
                PolePolicy::Freeze => Ok(0.0),
                PolePolicy::Error => Err(PropagationError::Singularity { elapsed }),
            };
        }
        Ok(numerator / (self.distance_from_centre * s_phi))
    }

    /// The longitude \[radians, [0, 2π)\] after `elapsed` seconds.
    pub fn theta(&self, elapsed: f64, pole_policy: PolePolicy) -> Result<f64, PropagationError> {
        let rate = self.theta_angular_speed(elapsed, pole_policy)?;
        let theta = wrap_tau(rate * elapsed + self.initial_theta);
        if self.phi_signed(elapsed) < 0.0 {
            // Over the north pole; we're now on the other side of the globe.
            Ok(wrap_tau(theta + PI))
        } else {
            Ok(theta)
        }
    }

    /// Get `(theta, phi)` after `elapsed` seconds.
    pub fn position(
        &self,
        elapsed: f64,
        pole_policy: PolePolicy,
    ) -> Result<(f64, f64), PropagationError> {
        Ok((self.theta(elapsed, pole_policy)?, self.phi(elapsed)))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropagationError {
    #[error("Ground speed must be a non-negative number of metres per second; got {0}")]
    Speed(f64),

    #[error("Radius ({radius} m) plus height ({height} m) must be positive")]
    Radius { radius: f64, height: f64 },

    #[error("Bearing must be a finite number of degrees; got {0}")]
    Bearing(f64),

    #[error("Initial latitude must be between -90 and 90 degrees; got {0}")]
    Latitude(f64),

    #[error("Initial longitude must be between -180 and 180 degrees; got {0}")]
    Longitude(f64),

    #[error("Aircraft is over a pole {elapsed} s into its flight; its longitude is undefined")]
    Singularity { elapsed: f64 },
}
