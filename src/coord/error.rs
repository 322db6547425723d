// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from converting positions into sky coordinates.

use thiserror::Error;

use crate::math::AngleError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Observer latitude must be between -90 and 90 degrees; got {0}")]
    ObserverLatitude(f64),

    #[error("Observer longitude must be between -180 and 180 degrees; got {0}")]
    ObserverLongitude(f64),

    #[error("Observer altitude must be a finite number of metres; got {0}")]
    ObserverAltitude(f64),

    #[error("Azimuth must be within [0, 2pi) radians; got {0}")]
    Azimuth(f64),

    #[error("Elevation must be within [-pi/2, pi/2] radians; got {0}")]
    Elevation(f64),

    #[error("Aircraft altitude must be a finite number of metres; got {0}")]
    AircraftAltitude(f64),

    #[error(transparent)]
    Angle(#[from] AngleError),
}
