// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Predict which aircraft cross the field of view during an exposure.


use std::{path::PathBuf, str::FromStr};

use clap::Parser;
use console::style;
use hifitime::{Duration, Epoch};
use itertools::Itertools;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use super::common::{display_warnings, InfoPrinter, OpticsArgs, Warn, ARG_FILE_HELP};
use crate::{
    aircraft::{
        aircraft_source, read_flights_file, FlightDataType, FLIGHT_DATA_TYPES_COMMA_SEPARATED,
    },
    constants::DEFAULT_TIME_STEP_SECONDS,
    coord::{Hms, HmsError, Observer, TransformError},
    params::PredictParams,
    propagate::PolePolicy,
    scan::{ExposureWindow, FovCentreRequest, PredictionRequest, ScanConfig},
    time::num_samples,
    SkycrossError,
};

lazy_static::lazy_static! {
    static ref OBSERVER_HELP: String =
        "The Earth latitude, longitude and altitude of the observer [degrees, degrees, metres]".to_string();

    static ref TIME_STEP_HELP: String =
        format!("The time between samples of the exposure [seconds]. Default: {DEFAULT_TIME_STEP_SECONDS}");

    static ref FLIGHT_DATA_TYPE_HELP: String =
        format!("Where aircraft come from. Supported types: {}. Default: {}", *FLIGHT_DATA_TYPES_COMMA_SEPARATED, FlightDataType::default());

    static ref POLE_POLICY_HELP: String =
        format!("What to do when an aircraft passes over a geographic pole. Supported policies: {}. Default: {}", PolePolicy::iter().join(", "), PolePolicy::default());
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct PredictCliArgs {
    /// The right ascension of the centre of the field of view, either as
    /// HH:MM:SS or e.g. 1h16m0s.
    #[clap(long, help_heading = "FIELD OF VIEW")]
    pub(super) ra: Option<String>,

    /// The right ascension of the centre of the field of view as separate
    /// hours, minutes and seconds.
    #[clap(
        long, conflicts_with("ra"), help_heading = "FIELD OF VIEW",
        number_of_values = 3,
        value_names = &["HOURS", "MINUTES", "SECONDS"]
    )]
    pub(super) ra_hms: Option<Vec<f64>>,

    /// The declination of the centre of the field of view [degrees].
    #[clap(long, allow_hyphen_values = true, help_heading = "FIELD OF VIEW")]
    pub(super) dec: Option<f64>,

    #[clap(
        long, help = OBSERVER_HELP.as_str(), help_heading = "OBSERVER",
        number_of_values = 3,
        allow_hyphen_values = true,
        value_names = &["LAT_DEG", "LONG_DEG", "ALT_M"]
    )]
    pub(super) observer: Option<Vec<f64>>,

    /// The length of the exposure [seconds].
    #[clap(short, long, help_heading = "EXPOSURE")]
    pub(super) exposure: Option<f64>,

    /// The UTC start of the exposure, e.g. "2025-03-13T12:34:22 UTC". Default:
    /// now
    #[clap(short, long, help_heading = "EXPOSURE")]
    pub(super) time: Option<String>,

    /// Use this value as the DUT1 (UT1 - UTC) [seconds]. Default: 0
    #[clap(long, allow_hyphen_values = true, help_heading = "EXPOSURE")]
    pub(super) dut1: Option<f64>,

    #[clap(long, help = FLIGHT_DATA_TYPE_HELP.as_str(), help_heading = "FLIGHTS")]
    pub(super) flight_data_type: Option<String>,

    /// A JSON or TOML file of simulated aircraft.
    #[clap(long, parse(from_os_str), help_heading = "FLIGHTS")]
    pub(super) flights: Option<PathBuf>,

    /// Keep simulated aircraft even if they are too far away to be above the
    /// observer's horizon.
    #[clap(long, help_heading = "FLIGHTS")]
    #[serde(default)]
    pub(super) no_horizon_filter: bool,

    #[clap(long, help = TIME_STEP_HELP.as_str(), help_heading = "SCAN")]
    pub(super) time_step: Option<f64>,

    /// Give aircraft that are still in the field of view at the end of the
    /// exposure an exit time equal to the end of the exposure.
    #[clap(long, help_heading = "SCAN")]
    #[serde(default)]
    pub(super) close_open_intervals: bool,

    #[clap(long, help = POLE_POLICY_HELP.as_str(), help_heading = "SCAN")]
    pub(super) pole_policy: Option<String>,

    /// Write the results to this JSON file.
    #[clap(short, long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct PredictArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(rename = "optics")]
    #[serde(default)]
    pub(super) optics_args: OpticsArgs,

    #[clap(flatten)]
    #[serde(rename = "predict")]
    #[serde(default)]
    pub(super) predict_args: PredictCliArgs,
}

impl PredictArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<PredictArgs, SkycrossError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let PredictArgs {
                args_file: _,
                optics_args,
                predict_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(PredictArgs {
                args_file: None,
                optics_args: cli_args.optics_args.merge(optics_args),
                predict_args: cli_args.predict_args.merge(predict_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    fn parse(self) -> Result<PredictParams, SkycrossError> {
        debug!("{:#?}", self);

        // Expose all the struct fields to ensure they're all used.
        let PredictArgs {
            args_file: _,
            optics_args,
            predict_args:
                PredictCliArgs {
                    ra,
                    ra_hms,
                    dec,
                    observer,
                    exposure,
                    time,
                    dut1,
                    flight_data_type,
                    flights,
                    no_horizon_filter,
                    time_step,
                    close_open_intervals,
                    pole_policy,
                    output,
                },
        } = self;

        let optical_config = optics_args.parse()?;
        let fov_diameter = optical_config.fov_angular_diameter()?;
        let mut optics_printer = InfoPrinter::new("Optics".into());
        optics_printer.push_block(vec![
            format!("Focal length:  {} mm", optical_config.focal_length).into(),
            format!("Sensor size:   {} mm", optical_config.sensor_size).into(),
            format!("Barlow factor: {}", optical_config.barlow_factor).into(),
        ]);
        optics_printer.push_line(
            format!(
                "Field of view diameter: {:.4}° ({:.2}')",
                fov_diameter,
                fov_diameter * 60.0
            )
            .into(),
        );
        optics_printer.display();

        // The field-of-view centre.
        let ra = match (ra, ra_hms) {
            (Some(ra), _) => Hms::from_str(&ra).map_err(PredictArgsError::Ra)?,
            (None, Some(ra)) => {
                if let [h, m, s] = ra[..] {
                    Hms::new(h, m, s).map_err(PredictArgsError::Ra)?
                } else {
                    return Err(PredictArgsError::BadRaHms { ra }.into());
                }
            }
            (None, None) => return Err(PredictArgsError::NoRa.into()),
        };
        let dec = dec.ok_or(PredictArgsError::NoDec)?;
        if !(-90.0..=90.0).contains(&dec) {
            return Err(PredictArgsError::Dec(dec).into());
        }
        let fov_centre = FovCentreRequest {
            ra_hours: ra.hours,
            ra_minutes: ra.minutes,
            ra_seconds: ra.seconds,
            dec_degrees: dec,
        };

        let observer = match observer {
            Some(pos) => {
                if let [lat, long, alt] = pos[..] {
                    Observer::new(lat, long, alt).map_err(PredictArgsError::Observer)?
                } else {
                    return Err(PredictArgsError::BadObserver { pos }.into());
                }
            }
            None => return Err(PredictArgsError::NoObserver.into()),
        };

        let mut coord_printer = InfoPrinter::new("Coordinates".into());
        coord_printer.push_block(vec![
            style("               RA (hms)     RA        Dec")
                .bold()
                .to_string()
                .into(),
            format!(
                "FOV centre:    {:<12} {:>8.4}° {:>8.4}°",
                ra.to_string(),
                ra.to_degrees(),
                dec
            )
            .into(),
        ]);
        coord_printer.push_line(format!("Observer: {observer}").into());
        coord_printer.display();

        // The exposure.
        let exposure = exposure.ok_or(PredictArgsError::NoExposure)?;
        if !exposure.is_finite() || exposure < 0.0 {
            return Err(PredictArgsError::Exposure(exposure).into());
        }
        let window_start = match time {
            Some(time) => Epoch::from_str(&time).map_err(|e| PredictArgsError::ParseTime {
                time: time.clone(),
                err: e.to_string(),
            })?,
            None => {
                "No exposure start time was specified; using the current time".warn();
                Epoch::now().map_err(|e| PredictArgsError::Now(e.to_string()))?
            }
        };
        let dut1 = match dut1 {
            Some(dut1) if !dut1.is_finite() || dut1.abs() >= 1.0 => {
                return Err(PredictArgsError::Dut1(dut1).into())
            }
            Some(dut1) => Duration::from_seconds(dut1),
            None => Duration::default(),
        };
        let time_step = time_step.unwrap_or(DEFAULT_TIME_STEP_SECONDS);
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(PredictArgsError::TimeStep(time_step).into());
        }
        if time_step > exposure {
            format!("The time step ({time_step} s) is longer than the exposure ({exposure} s); only its start is examined").warn();
        }
        let pole_policy = match pole_policy {
            Some(p) => PolePolicy::from_str(&p.to_lowercase())
                .map_err(|_| PredictArgsError::PolePolicy(p))?,
            None => PolePolicy::default(),
        };

        let window = ExposureWindow {
            start: window_start,
            duration_s: exposure,
        };
        let mut time_printer = InfoPrinter::new("Exposure".into());
        time_printer.push_block(vec![
            format!("Start:    {}", window.start).into(),
            format!("End:      {}", window.end()).into(),
            format!("Duration: {exposure} s").into(),
        ]);
        time_printer.push_block(vec![
            format!(
                "Sampled every {time_step} s ({} samples)",
                num_samples(exposure, time_step)
            )
            .into(),
            format!("DUT1: {} s", dut1.to_seconds()).into(),
            format!("Pole policy: {pole_policy}").into(),
        ]);
        time_printer.display();

        // The aircraft.
        let flight_data_type = match flight_data_type {
            Some(t) => FlightDataType::from_str(&t.to_lowercase())
                .map_err(|_| PredictArgsError::FlightDataType(t))?,
            None => FlightDataType::default(),
        };
        let supplied = flights.as_ref().map(read_flights_file).transpose()?;
        let num_supplied = supplied.as_ref().map(|s| s.len());
        let source = aircraft_source(flight_data_type, supplied, !no_horizon_filter)?;
        let aircraft = source.aircraft(&observer)?;

        let mut flights_printer = InfoPrinter::new("Flights".into());
        let mut block = vec![format!("Type: {flight_data_type}").into()];
        if let Some(flights) = flights.as_ref() {
            block.push(format!("from {}", flights.display()).into());
        }
        flights_printer.push_block(block);
        if let Some(num_supplied) = num_supplied {
            flights_printer.push_line(
                format!("{} of {num_supplied} aircraft could be seen", aircraft.len()).into(),
            );
        }
        if no_horizon_filter {
            flights_printer.push_line("Horizon filtering is disabled".into());
        }
        flights_printer.display();
        if aircraft.is_empty() {
            "No aircraft could be above the observer's horizon; nothing can cross the field of view"
                .warn();
        }

        if let Some(output) = output.as_ref() {
            let is_json = output
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                return Err(PredictArgsError::OutputNotJson(output.clone()).into());
            }
        }

        display_warnings();

        Ok(PredictParams {
            request: PredictionRequest {
                optical_config,
                fov_centre,
                observer,
                exposure_seconds: exposure,
                window_start,
                aircraft,
            },
            config: ScanConfig {
                time_step,
                close_open_intervals,
                pole_policy,
                dut1,
            },
            output,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), SkycrossError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub(super) enum PredictArgsError {
    #[error("No right ascension was supplied for the centre of the field of view")]
    NoRa,

    #[error("No declination was supplied for the centre of the field of view")]
    NoDec,

    #[error("No observer position was supplied")]
    NoObserver,

    #[error("No exposure length was supplied")]
    NoExposure,

    #[error("Right ascension specified as {ra:?}, not [<Hours>, <Minutes>, <Seconds>]")]
    BadRaHms { ra: Vec<f64> },

    #[error("Observer position specified as {pos:?}, not [<Latitude>, <Longitude>, <Altitude>]")]
    BadObserver { pos: Vec<f64> },

    #[error("Invalid right ascension: {0}")]
    Ra(HmsError),

    #[error("Declination was not within -90 to 90! Got {0}")]
    Dec(f64),

    #[error("Invalid observer: {0}")]
    Observer(TransformError),

    #[error("The exposure length must be a non-negative number of seconds; got {0}")]
    Exposure(f64),

    #[error("The time step must be a positive number of seconds; got {0}")]
    TimeStep(f64),

    #[error("DUT1 must be less than a second in magnitude; got {0}")]
    Dut1(f64),

    #[error("Couldn't parse '{time}' as a UTC time: {err}")]
    ParseTime { time: String, err: String },

    #[error("Couldn't get the current time: {0}")]
    Now(String),

    #[error("Unrecognised flight data type '{0}'")]
    FlightDataType(String),

    #[error("Unrecognised pole policy '{0}'")]
    PolePolicy(String),

    #[error("Output file '{}' must be a .json file", .0.display())]
    OutputNotJson(PathBuf),
}

impl PredictCliArgs {
    fn merge(self, other: Self) -> Self {
        // Both forms of RA describe the same value; take them as a pair.
        let (ra, ra_hms) = if self.ra.is_some() || self.ra_hms.is_some() {
            (self.ra, self.ra_hms)
        } else {
            (other.ra, other.ra_hms)
        };
        Self {
            ra,
            ra_hms,
            dec: self.dec.or(other.dec),
            observer: self.observer.or(other.observer),
            exposure: self.exposure.or(other.exposure),
            time: self.time.or(other.time),
            dut1: self.dut1.or(other.dut1),
            flight_data_type: self.flight_data_type.or(other.flight_data_type),
            flights: self.flights.or(other.flights),
            no_horizon_filter: self.no_horizon_filter || other.no_horizon_filter,
            time_step: self.time_step.or(other.time_step),
            close_open_intervals: self.close_open_intervals || other.close_open_intervals,
            pole_policy: self.pole_policy.or(other.pole_policy),
            output: self.output.or(other.output),
        }
    }
}
