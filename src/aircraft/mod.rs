// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Aircraft as they are reported (feet, knots) and as they are propagated
//! (metres, metres per second).

mod error;
mod read;
mod source;

pub use error::AircraftSourceError;
pub use read::read_flights_file;
pub use source::{
    aircraft_source, AircraftSource, FlightDataType, SimulatedFlights,
    FLIGHT_DATA_TYPES_COMMA_SEPARATED,
};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{EARTH_RADIUS_METRES, FEET_PER_METRE, MPS_PER_KNOT},
    propagate::{GreatCircleMotion, PropagationError},
};

/// An aircraft as reported by a flight tracker or a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftRecord {
    /// A unique identifier. Simulated aircraft are assigned one if it's
    /// missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(alias = "flightNumber")]
    pub flight_number: String,

    /// \[degrees\]
    pub latitude: f64,

    /// \[degrees\]
    pub longitude: f64,

    #[serde(alias = "altitude")]
    pub altitude_feet: f64,

    /// Ground speed \[knots\]
    #[serde(alias = "speed")]
    pub speed_knots: f64,

    /// Clockwise from north \[degrees\]
    #[serde(alias = "heading")]
    pub heading_degrees: f64,
}

/// An aircraft ready to be propagated. All units are SI, apart from angles,
/// which are in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftTrack {
    pub id: String,
    pub flight_number: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub speed_mps: f64,
    pub heading_deg: f64,
}

impl AircraftTrack {
    /// Convert a record into a track. `index` is used to make an id if the
    /// record doesn't have one.
    pub fn from_record(
        record: &AircraftRecord,
        index: usize,
    ) -> Result<AircraftTrack, AircraftSourceError> {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| format!("sim-{index}"));
        let invalid = |reason: String| AircraftSourceError::InvalidRecord {
            id: id.clone(),
            reason,
        };

        if !(-90.0..=90.0).contains(&record.latitude) {
            return Err(invalid(format!(
                "latitude {} is not within [-90, 90]",
                record.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&record.longitude) {
            return Err(invalid(format!(
                "longitude {} is not within [-180, 180]",
                record.longitude
            )));
        }
        if !record.altitude_feet.is_finite() || record.altitude_feet < 0.0 {
            return Err(invalid(format!(
                "altitude {} ft is not a non-negative number",
                record.altitude_feet
            )));
        }
        if !record.speed_knots.is_finite() || record.speed_knots < 0.0 {
            return Err(invalid(format!(
                "speed {} kn is not a non-negative number",
                record.speed_knots
            )));
        }
        if !record.heading_degrees.is_finite() {
            return Err(invalid(format!(
                "heading {} is not a number",
                record.heading_degrees
            )));
        }

        Ok(AircraftTrack {
            flight_number: record.flight_number.clone(),
            latitude_deg: record.latitude,
            longitude_deg: record.longitude,
            altitude_m: record.altitude_feet / FEET_PER_METRE,
            speed_mps: record.speed_knots * MPS_PER_KNOT,
            heading_deg: record.heading_degrees,
            id,
        })
    }

    /// How this aircraft moves over the Earth.
    pub fn motion(&self) -> Result<GreatCircleMotion, PropagationError> {
        GreatCircleMotion::new(
            self.speed_mps,
            EARTH_RADIUS_METRES,
            self.altitude_m,
            self.heading_deg,
            self.latitude_deg,
            self.longitude_deg,
        )
    }
}
