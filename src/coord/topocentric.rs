// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Where an aircraft appears on the sky of an observer.

The aircraft and observer are placed on a spherical Earth, the line of sight
between them is rotated into the observer's local horizon frame, and the
resulting (azimuth, elevation) is converted into (hour angle, declination) and
then (right ascension, declination) with the local sidereal time.
 */

use super::{AzEl, Observer, RADec, TransformError, XyzGeocentric};

/// Get the (azimuth, elevation) of an aircraft as seen by `observer`. `theta`
/// and `phi` are the aircraft's azimuthal angle and colatitude \[radians\].
pub fn aircraft_to_azel(
    theta: f64,
    phi: f64,
    altitude_m: f64,
    observer: &Observer,
) -> Result<AzEl, TransformError> {
    let observer_xyz = XyzGeocentric::from_observer(observer)?;
    let aircraft_xyz = XyzGeocentric::from_aircraft(theta, phi, altitude_m)?;
    let enh = (aircraft_xyz - observer_xyz).to_enh(observer.latitude_deg, observer.longitude_deg)?;
    Ok(enh.to_azel())
}

/// Get the apparent (RA, Dec) \[degrees\] of an aircraft as seen by
/// `observer` when the local sidereal time is `lst_rad`.
pub fn aircraft_to_radec(
    theta: f64,
    phi: f64,
    altitude_m: f64,
    observer: &Observer,
    lst_rad: f64,
) -> Result<RADec, TransformError> {
    let azel = aircraft_to_azel(theta, phi, altitude_m, observer)?;
    let hadec = azel.to_hadec(observer.latitude_rad())?;
    Ok(hadec.to_radec(lst_rad))
}
