// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Right ascensions given as hours, minutes and seconds.
 */

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEGREES_PER_HOUR;

/// A right ascension in sexagesimal hours.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hms {
    /// [0, 24)
    pub hours: f64,
    /// [0, 60)
    pub minutes: f64,
    /// [0, 60)
    pub seconds: f64,
}

impl Hms {
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Result<Hms, HmsError> {
        if !(0.0..24.0).contains(&hours) {
            return Err(HmsError::Hours(hours));
        }
        if !(0.0..60.0).contains(&minutes) {
            return Err(HmsError::Minutes(minutes));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(HmsError::Seconds(seconds));
        }
        Ok(Hms {
            hours,
            minutes,
            seconds,
        })
    }

    /// The right ascension in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// # use skycross::Hms;
    /// let hms = Hms::new(1.0, 16.0, 0.0).unwrap();
    /// assert!((hms.to_degrees() - 19.0).abs() < 1e-12);
    /// ```
    pub fn to_degrees(&self) -> f64 {
        (self.hours + self.minutes / 60.0 + self.seconds / 3600.0) * DEGREES_PER_HOUR
    }
}

impl FromStr for Hms {
    type Err = HmsError;

    /// Parse either "HH:MM:SS.s" or "HHhMMmSS.ss".
    fn from_str(s: &str) -> Result<Hms, HmsError> {
        let s = s.trim();
        let fields: Vec<&str> = if s.contains(':') {
            s.split(':').collect()
        } else {
            s.trim_end_matches('s').split(['h', 'm']).collect()
        };
        if fields.len() != 3 {
            return Err(HmsError::WrongFieldCount(s.to_string()));
        }
        let mut parsed = [0.0; 3];
        for (p, f) in parsed.iter_mut().zip(fields) {
            *p = f
                .trim()
                .parse()
                .map_err(|_| HmsError::ParseFloat(s.to_string()))?;
        }
        Hms::new(parsed[0], parsed[1], parsed[2])
    }
}

impl std::fmt::Display for Hms {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}h{:02}m{}s", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HmsError {
    #[error("Hours must be within [0, 24); got {0}")]
    Hours(f64),

    #[error("Minutes must be within [0, 60); got {0}")]
    Minutes(f64),

    #[error("Seconds must be within [0, 60); got {0}")]
    Seconds(f64),

    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Could not parse a number out of '{0}'")]
    ParseFloat(String),
}
