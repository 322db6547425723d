// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with getting aircraft.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AircraftSourceError {
    #[error("Simulated flight data was requested, but no simulated flights were supplied")]
    NoSimulatedFlights,

    #[error("Live flight data was requested, but no live flight source is available; supply simulated flights instead")]
    LiveUnavailable,

    #[error("Aircraft '{id}' is invalid: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Flight file '{file}' has an unrecognised extension; supported types: {supported}")]
    UnknownFileType { file: PathBuf, supported: String },

    #[error("Couldn't decode {file_type} flights from '{file}': {err}")]
    Parse {
        file: PathBuf,
        file_type: &'static str,
        err: String,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
