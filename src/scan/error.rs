// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with scanning an exposure for aircraft.

use thiserror::Error;

use crate::{
    aircraft::AircraftSourceError,
    coord::{HmsError, TransformError},
    fov::FovError,
    propagate::PropagationError,
};

/// Errors that can happen while stepping through an exposure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Exposure duration must be a non-negative number of seconds; got {0}")]
    Duration(f64),

    #[error("Time step must be a positive number of seconds; got {0}")]
    TimeStep(f64),

    #[error("More than one aircraft has the id '{0}'")]
    DuplicateId(String),

    #[error("While propagating aircraft '{id}': {err}")]
    Propagation { id: String, err: PropagationError },

    #[error("While finding aircraft '{id}' on the sky: {err}")]
    Transform { id: String, err: TransformError },

    #[error("While finding the local sidereal time: {0}")]
    SiderealTime(TransformError),

    #[error(transparent)]
    Fov(#[from] FovError),
}

/// Errors from [`crate::predict`].
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Invalid field-of-view centre right ascension: {0}")]
    InvalidHms(#[from] HmsError),

    #[error("Invalid field-of-view centre declination: {0}")]
    InvalidDec(f64),

    #[error("Invalid observer: {0}")]
    InvalidObserver(TransformError),

    #[error("Invalid optics: {0}")]
    InvalidOptics(FovError),

    #[error(transparent)]
    Aircraft(#[from] AircraftSourceError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
