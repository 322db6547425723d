// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all skycross-related errors. This should be the *only*
//! error enum that is publicly visible from the command-line interface.

use thiserror::Error;

use super::{common::OpticsArgsError, predict::PredictArgsError};
use crate::{
    aircraft::AircraftSourceError, fov::FovError, params::PredictRunError, scan::PredictError,
};

const PREDICT_HELP: &str = "Run `skycross predict --help` to see what each input means.";

/// The *only* publicly visible error from the skycross binary. Each error
/// message should point the user somewhere useful, unless it's "generic".
#[derive(Error, Debug)]
pub enum SkycrossError {
    /// An error with the inputs to, or the running of, a prediction.
    #[error("{0}\n\n{PREDICT_HELP}")]
    Predict(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON; keys go under [optics] and [predict] tables.")]
    ArgFile(String),

    /// The run was set up in a way that can't work, e.g. asking for live
    /// flight data.
    #[error("{0}\n\nFlights may be simulated by supplying them with --flights.")]
    Configuration(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<PredictArgsError> for SkycrossError {
    fn from(e: PredictArgsError) -> Self {
        let s = e.to_string();
        match e {
            PredictArgsError::NoRa
            | PredictArgsError::NoDec
            | PredictArgsError::NoObserver
            | PredictArgsError::NoExposure
            | PredictArgsError::BadRaHms { .. }
            | PredictArgsError::BadObserver { .. }
            | PredictArgsError::Ra(_)
            | PredictArgsError::Dec(_)
            | PredictArgsError::Exposure(_)
            | PredictArgsError::TimeStep(_)
            | PredictArgsError::Dut1(_)
            | PredictArgsError::ParseTime { .. }
            | PredictArgsError::Observer(_) => Self::Predict(s),
            PredictArgsError::FlightDataType(_)
            | PredictArgsError::PolePolicy(_)
            | PredictArgsError::OutputNotJson(_) => Self::Configuration(s),
            PredictArgsError::Now(_) => Self::Generic(s),
        }
    }
}

impl From<OpticsArgsError> for SkycrossError {
    fn from(e: OpticsArgsError) -> Self {
        match e {
            OpticsArgsError::NoFocalLength | OpticsArgsError::NoSensorSize => {
                Self::Predict(e.to_string())
            }
            OpticsArgsError::Fov(e) => Self::from(e),
        }
    }
}

impl From<PredictRunError> for SkycrossError {
    fn from(e: PredictRunError) -> Self {
        match e {
            PredictRunError::Predict(e) => Self::from(e),
            PredictRunError::Json(e) => Self::from(e),
            PredictRunError::IO(e) => Self::from(e),
        }
    }
}

// Library code errors.

impl From<PredictError> for SkycrossError {
    fn from(e: PredictError) -> Self {
        let s = e.to_string();
        match e {
            PredictError::InvalidHms(_)
            | PredictError::InvalidDec(_)
            | PredictError::InvalidObserver(_)
            | PredictError::InvalidOptics(_)
            | PredictError::Scan(_) => Self::Predict(s),
            PredictError::Aircraft(e) => Self::from(e),
        }
    }
}

impl From<AircraftSourceError> for SkycrossError {
    fn from(e: AircraftSourceError) -> Self {
        let s = e.to_string();
        match e {
            AircraftSourceError::NoSimulatedFlights
            | AircraftSourceError::LiveUnavailable
            | AircraftSourceError::UnknownFileType { .. } => Self::Configuration(s),
            AircraftSourceError::InvalidRecord { .. } | AircraftSourceError::Parse { .. } => {
                Self::Predict(s)
            }
            AircraftSourceError::IO(e) => Self::from(e),
        }
    }
}

impl From<FovError> for SkycrossError {
    fn from(e: FovError) -> Self {
        Self::Predict(e.to_string())
    }
}

impl From<serde_json::Error> for SkycrossError {
    fn from(e: serde_json::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for SkycrossError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Generic(format!("Couldn't write arguments as toml: {e}"))
    }
}

impl From<log::SetLoggerError> for SkycrossError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(format!("Failed to initialise logging: {e}"))
    }
}

impl From<std::io::Error> for SkycrossError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
