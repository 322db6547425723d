// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. `skycross` should do all geometry in
double precision; single-precision errors at Earth-radius scales are tens of
centimetres, which matters for aircraft close to the observer.
 */

pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// The mean radius of the Earth \[metres\]. The Earth is treated as a sphere.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Feet per metre. Aircraft altitudes are reported in feet.
pub const FEET_PER_METRE: f64 = 3.28084;

/// Metres per second per knot. Aircraft ground speeds are reported in knots.
pub const MPS_PER_KNOT: f64 = 0.514444;

/// The time between samples of an exposure \[seconds\].
pub const DEFAULT_TIME_STEP_SECONDS: f64 = 5.0;

/// The highest altitude an aircraft is assumed to fly at \[metres\]. Used to
/// decide which aircraft can possibly be above the observer's horizon.
pub const AIRCRAFT_MAX_ALTITUDE_METRES: f64 = 15_000.0;

/// When the sine of an aircraft's colatitude is smaller than this, the
/// aircraft is considered to be over a pole and its longitude rate is
/// ill-conditioned.
pub const POLE_EPSILON: f64 = 1e-9;

/// Hours of right ascension to degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;
