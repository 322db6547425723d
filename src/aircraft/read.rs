// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Read aircraft records from files.

use std::{fs::File, io::Read, path::Path, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::Deserialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::{AircraftRecord, AircraftSourceError};

#[derive(Debug, Clone, Copy, Display, EnumIter, EnumString, IntoStaticStr)]
enum FlightFileType {
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "toml")]
    Toml,
}

/// Flights may be given as a bare list (JSON only) or as a table with a
/// `flights` key (e.g. `[[flights]]` in TOML).
#[derive(Deserialize)]
#[serde(untagged)]
enum FlightsFile {
    List(Vec<AircraftRecord>),
    Table { flights: Vec<AircraftRecord> },
}

impl From<FlightsFile> for Vec<AircraftRecord> {
    fn from(f: FlightsFile) -> Self {
        match f {
            FlightsFile::List(v) | FlightsFile::Table { flights: v } => v,
        }
    }
}

/// Read aircraft records from a JSON or TOML file. The type is decided by the
/// file's extension.
pub fn read_flights_file<P: AsRef<Path>>(
    file: P,
) -> Result<Vec<AircraftRecord>, AircraftSourceError> {
    let file = file.as_ref();
    let file_type = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .and_then(|e| FlightFileType::from_str(&e).ok())
        .ok_or_else(|| AircraftSourceError::UnknownFileType {
            file: file.to_path_buf(),
            supported: FlightFileType::iter().join(", "),
        })?;

    debug!("Reading {file_type} flights from {}", file.display());
    let mut contents = String::new();
    File::open(file)?.read_to_string(&mut contents)?;

    let parse_error = |err: String| AircraftSourceError::Parse {
        file: file.to_path_buf(),
        file_type: file_type.into(),
        err,
    };
    let flights: FlightsFile = match file_type {
        FlightFileType::Json => {
            serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        }
        FlightFileType::Toml => toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
    };
    let flights: Vec<AircraftRecord> = flights.into();
    debug!("Read {} flights", flights.len());
    Ok(flights)
}
