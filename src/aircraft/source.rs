// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where a run's aircraft come from.

use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::{AircraftRecord, AircraftSourceError};
use crate::{
    constants::{AIRCRAFT_MAX_ALTITUDE_METRES, EARTH_RADIUS_METRES},
    coord::Observer,
    math::haversine,
};

lazy_static::lazy_static! {
    pub static ref FLIGHT_DATA_TYPES_COMMA_SEPARATED: String = FlightDataType::iter().join(", ");
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FlightDataType {
    #[default]
    Simulated,
    Live,
}

/// Supplies the aircraft that an observer could possibly see.
pub trait AircraftSource {
    fn aircraft(&self, observer: &Observer) -> Result<Vec<AircraftRecord>, AircraftSourceError>;
}

/// Aircraft that were made up by the user.
#[derive(Debug, Clone)]
pub struct SimulatedFlights {
    records: Vec<AircraftRecord>,

    /// Only keep aircraft that could be above the observer's horizon?
    horizon_filter: bool,
}

impl SimulatedFlights {
    pub fn new(records: Vec<AircraftRecord>) -> SimulatedFlights {
        SimulatedFlights {
            records,
            horizon_filter: true,
        }
    }

    pub fn with_horizon_filter(mut self, horizon_filter: bool) -> SimulatedFlights {
        self.horizon_filter = horizon_filter;
        self
    }
}

impl AircraftSource for SimulatedFlights {
    fn aircraft(&self, observer: &Observer) -> Result<Vec<AircraftRecord>, AircraftSourceError> {
        // Number ids before filtering so they don't depend on what was thrown
        // away.
        let records = self
            .records
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, mut r)| {
                if r.id.is_none() {
                    r.id = Some(format!("sim-{i}"));
                }
                r
            })
            .collect::<Vec<_>>();
        let num_supplied = records.len();

        let records = if self.horizon_filter {
            flights_in_horizon(observer, records)
        } else {
            records
        };
        let records = remove_ground_flights(records);
        debug!(
            "{} of {num_supplied} simulated flights are usable",
            records.len()
        );
        Ok(records)
    }
}

/// The furthest ground distance \[metres\] at which an aircraft at the highest
/// possible altitude is still above the horizon.
pub(crate) fn horizon_radius() -> f64 {
    let r = EARTH_RADIUS_METRES;
    ((r + AIRCRAFT_MAX_ALTITUDE_METRES).powi(2) - r.powi(2)).sqrt()
}

/// The ground distance between an observer and an aircraft \[metres\].
pub(crate) fn ground_distance(observer: &Observer, record: &AircraftRecord) -> f64 {
    haversine(
        observer.latitude_rad(),
        observer.longitude_rad(),
        record.latitude.to_radians(),
        record.longitude.to_radians(),
    ) * EARTH_RADIUS_METRES
}

/// Keep only the aircraft close enough to the observer to be seen.
pub(crate) fn flights_in_horizon(
    observer: &Observer,
    records: Vec<AircraftRecord>,
) -> Vec<AircraftRecord> {
    let radius = horizon_radius();
    records
        .into_iter()
        .filter(|r| {
            let d = ground_distance(observer, r);
            let keep = d <= radius;
            if !keep {
                trace!(
                    "Dropping flight {}; it is {:.0} km away",
                    r.flight_number,
                    d / 1000.0
                );
            }
            keep
        })
        .collect()
}

/// Aircraft on the ground can't be in the sky.
pub(crate) fn remove_ground_flights(records: Vec<AircraftRecord>) -> Vec<AircraftRecord> {
    records
        .into_iter()
        .filter(|r| r.altitude_feet > 0.0)
        .collect()
}

/// Get a source of aircraft for a type of flight data.
pub fn aircraft_source(
    flight_data_type: FlightDataType,
    simulated_flights: Option<Vec<AircraftRecord>>,
    horizon_filter: bool,
) -> Result<Box<dyn AircraftSource>, AircraftSourceError> {
    match (flight_data_type, simulated_flights) {
        (FlightDataType::Simulated, Some(records)) => Ok(Box::new(
            SimulatedFlights::new(records).with_horizon_filter(horizon_filter),
        )),
        (FlightDataType::Simulated, None) => Err(AircraftSourceError::NoSimulatedFlights),
        (FlightDataType::Live, _) => Err(AircraftSourceError::LiveUnavailable),
    }
}
