// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Predict when aircraft cross a telescope's field of view during an exposure.

The core of the crate is a pure function of its inputs: aircraft are
propagated along great circles, converted into the observer's topocentric
(RA, Dec) frame at each sample instant, and tested against the field-of-view
disk. See [`predict`].
 */

pub mod aircraft;
mod cli;
pub mod constants;
pub mod coord;
pub mod fov;
pub mod math;
mod params;
pub mod propagate;
pub mod scan;
pub mod time;

// Re-exports.
pub use aircraft::{AircraftRecord, AircraftSource, AircraftTrack, SimulatedFlights};
pub use cli::{Skycross, SkycrossError};
pub use coord::{Hms, Observer, RADec};
pub use fov::OpticalConfig;
pub use propagate::PolePolicy;
pub use scan::{
    predict, scan, ExposureWindow, FlightPosition, FovCentreRequest, PredictError,
    PredictionRequest, PredictionResult, ScanConfig, ScanError, ScanOutput, TrackOutcome,
};

use crossbeam_utils::atomic::AtomicCell;

/// Should progress bars be drawn? This is set by the command-line interface;
/// library users get no progress bars by default.
pub(crate) static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
