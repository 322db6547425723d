// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Arguments describing the telescope and camera.

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fov::{FovError, OpticalConfig};

const DEFAULT_BARLOW_FACTOR: f64 = 1.0;

lazy_static::lazy_static! {
    static ref BARLOW_HELP: String =
        format!("The magnification of a barlow lens (> 1) or focal reducer (< 1) in the optical path. Default: {DEFAULT_BARLOW_FACTOR}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct OpticsArgs {
    /// The focal length of the telescope [millimetres].
    #[clap(short = 'f', long, help_heading = "OPTICS")]
    pub(crate) focal_length: Option<f64>,

    /// The size of the camera's sensor [millimetres].
    #[clap(short = 's', long, help_heading = "OPTICS")]
    pub(crate) sensor_size: Option<f64>,

    #[clap(long, help = BARLOW_HELP.as_str(), help_heading = "OPTICS")]
    pub(crate) barlow: Option<f64>,
}

impl OpticsArgs {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            focal_length: self.focal_length.or(other.focal_length),
            sensor_size: self.sensor_size.or(other.sensor_size),
            barlow: self.barlow.or(other.barlow),
        }
    }

    pub(crate) fn parse(self) -> Result<OpticalConfig, OpticsArgsError> {
        let OpticsArgs {
            focal_length,
            sensor_size,
            barlow,
        } = self;
        let focal_length = focal_length.ok_or(OpticsArgsError::NoFocalLength)?;
        let sensor_size = sensor_size.ok_or(OpticsArgsError::NoSensorSize)?;
        let barlow = barlow.unwrap_or(DEFAULT_BARLOW_FACTOR);
        Ok(OpticalConfig::new(focal_length, sensor_size, barlow)?)
    }
}

#[derive(Error, Debug)]
pub(crate) enum OpticsArgsError {
    #[error("No focal length was supplied")]
    NoFocalLength,

    #[error("No sensor size was supplied")]
    NoSensorSize,

    #[error(transparent)]
    Fov(#[from] FovError),
}
