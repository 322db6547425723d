// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Step through an exposure and find the aircraft inside the field of view.
//!
//! At every sample, all aircraft are propagated and placed on the sky in
//! parallel; then, in input order, each aircraft's [`IntersectionState`] is
//! advanced and those inside the field are recorded for that sample.

mod error;
mod state;

pub use error::{PredictError, ScanError};
pub(crate) use state::IntersectionState;

use std::collections::HashSet;

use hifitime::{Duration, Epoch};
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    aircraft::{AircraftRecord, AircraftTrack},
    constants::DEFAULT_TIME_STEP_SECONDS,
    coord::{aircraft_to_radec, Hms, Observer, RADec},
    fov::{is_intersecting, FovError, OpticalConfig},
    propagate::{GreatCircleMotion, PolePolicy},
    time::{epoch_string, local_sidereal_time, num_samples, opt_epoch_string, sample_offsets},
    PROGRESS_BARS,
};

/// The span of time over which the camera is collecting light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureWindow {
    /// UTC start of the exposure.
    pub start: Epoch,

    /// \[seconds\]
    pub duration_s: f64,
}

impl ExposureWindow {
    pub fn new(start: Epoch, duration_s: f64) -> Result<ExposureWindow, ScanError> {
        if !duration_s.is_finite() || duration_s < 0.0 {
            return Err(ScanError::Duration(duration_s));
        }
        Ok(ExposureWindow { start, duration_s })
    }

    pub fn end(&self) -> Epoch {
        self.start + Duration::from_seconds(self.duration_s)
    }
}

/// Knobs for a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// The time between samples \[seconds\].
    pub time_step: f64,

    /// Should aircraft still inside the field at the end of the exposure be
    /// given an exit time equal to the end of the exposure?
    pub close_open_intervals: bool,

    pub pole_policy: PolePolicy,

    /// UT1 - UTC.
    pub dut1: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            time_step: DEFAULT_TIME_STEP_SECONDS,
            close_open_intervals: false,
            pole_policy: PolePolicy::default(),
            dut1: Duration::default(),
        }
    }
}

/// The centre of the field of view, as a user would give it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FovCentreRequest {
    pub ra_hours: f64,
    pub ra_minutes: f64,
    pub ra_seconds: f64,
    pub dec_degrees: f64,
}

impl FovCentreRequest {
    pub fn to_radec(&self) -> Result<RADec, PredictError> {
        let hms = Hms::new(self.ra_hours, self.ra_minutes, self.ra_seconds)?;
        if !(-90.0..=90.0).contains(&self.dec_degrees) {
            return Err(PredictError::InvalidDec(self.dec_degrees));
        }
        Ok(RADec::from_hms(hms, self.dec_degrees))
    }
}

/// Everything needed to predict which aircraft cross the field of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub optical_config: OpticalConfig,

    #[serde(rename = "fov_center")]
    pub fov_centre: FovCentreRequest,

    pub observer: Observer,

    pub exposure_seconds: f64,

    #[serde(with = "epoch_string")]
    pub window_start: Epoch,

    pub aircraft: Vec<AircraftRecord>,
}

/// An aircraft inside the field of view at some instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPosition {
    pub id: String,
    pub flight_number: String,
    /// \[degrees\]
    pub ra: f64,
    /// \[degrees\]
    pub dec: f64,
    /// \[degrees\]
    pub heading: f64,
}

/// What happened to an aircraft over an exposure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackOutcome {
    pub id: String,
    pub flight_number: String,

    #[serde(with = "opt_epoch_string")]
    pub entry: Option<Epoch>,

    #[serde(with = "opt_epoch_string")]
    pub exit: Option<Epoch>,

    /// Where the aircraft was on the sky at the last sample.
    pub last_radec: Option<RADec>,
}

/// The result of scanning an exposure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutput {
    /// The instant of every sample.
    #[serde(serialize_with = "serialize_epochs")]
    pub samples: Vec<Epoch>,

    /// For each sample, the aircraft inside the field of view, in input
    /// order.
    pub snapshots: Vec<Vec<FlightPosition>>,

    /// Outcomes keyed by aircraft id, in input order.
    pub tracks: IndexMap<String, TrackOutcome>,
}

/// The result of [`predict`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// \[degrees\]
    pub fov_diameter_deg: f64,

    #[serde(serialize_with = "serialize_epochs")]
    pub samples: Vec<Epoch>,

    pub snapshots: Vec<Vec<FlightPosition>>,

    pub tracks: IndexMap<String, TrackOutcome>,
}

#[allow(clippy::ptr_arg)]
fn serialize_epochs<S: serde::Serializer>(epochs: &Vec<Epoch>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(epochs.iter().map(|e| e.to_string()))
}

/// Predict when the aircraft in `request` cross the field of view.
pub fn predict(
    request: &PredictionRequest,
    config: &ScanConfig,
) -> Result<PredictionResult, PredictError> {
    let fov_diameter_deg = request
        .optical_config
        .fov_angular_diameter()
        .map_err(PredictError::InvalidOptics)?;
    let fov_centre = request.fov_centre.to_radec()?;
    request
        .observer
        .validate()
        .map_err(PredictError::InvalidObserver)?;
    let window = ExposureWindow::new(request.window_start, request.exposure_seconds)?;
    let tracks = request
        .aircraft
        .iter()
        .enumerate()
        .map(|(i, r)| AircraftTrack::from_record(r, i))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Field of view diameter: {fov_diameter_deg}°, centre: {fov_centre}");
    let ScanOutput {
        samples,
        snapshots,
        tracks,
    } = scan(
        &tracks,
        &request.observer,
        fov_centre,
        fov_diameter_deg,
        window,
        config,
    )?;
    Ok(PredictionResult {
        fov_diameter_deg,
        samples,
        snapshots,
        tracks,
    })
}

/// The parts of a scan that don't change between samples.
struct Sky<'a> {
    observer: &'a Observer,
    fov_centre: RADec,
    fov_diameter: f64,
    pole_policy: PolePolicy,
}

impl Sky<'_> {
    /// Where is an aircraft `elapsed` seconds into the exposure, and is it in
    /// the field of view?
    fn locate(
        &self,
        track: &AircraftTrack,
        motion: &GreatCircleMotion,
        elapsed: f64,
        lst: f64,
    ) -> Result<(RADec, bool), ScanError> {
        let (theta, phi) =
            motion
                .position(elapsed, self.pole_policy)
                .map_err(|err| ScanError::Propagation {
                    id: track.id.clone(),
                    err,
                })?;
        let radec = aircraft_to_radec(theta, phi, track.altitude_m, self.observer, lst).map_err(
            |err| ScanError::Transform {
                id: track.id.clone(),
                err,
            },
        )?;
        let intersecting = is_intersecting(
            radec.ra,
            radec.dec,
            self.fov_centre.ra,
            self.fov_centre.dec,
            self.fov_diameter,
        )?;
        trace!(
            "{} at {elapsed} s: {radec}{}",
            track.id,
            if intersecting { " (in field)" } else { "" }
        );
        Ok((radec, intersecting))
    }
}

/// Step through an exposure, finding which of `tracks` are within the field
/// of view centred on `fov_centre` \[degrees\] with a diameter of
/// `fov_diameter` \[degrees\]. Any error aborts the whole scan.
pub fn scan(
    tracks: &[AircraftTrack],
    observer: &Observer,
    fov_centre: RADec,
    fov_diameter: f64,
    window: ExposureWindow,
    config: &ScanConfig,
) -> Result<ScanOutput, ScanError> {
    if !config.time_step.is_finite() || config.time_step <= 0.0 {
        return Err(ScanError::TimeStep(config.time_step));
    }
    if !fov_diameter.is_finite() || fov_diameter <= 0.0 {
        return Err(FovError::Diameter(fov_diameter).into());
    }
    {
        let mut seen = HashSet::with_capacity(tracks.len());
        if let Some(dup) = tracks.iter().find(|t| !seen.insert(t.id.as_str())) {
            return Err(ScanError::DuplicateId(dup.id.clone()));
        }
    }

    let motions = tracks
        .iter()
        .map(|t| {
            t.motion().map_err(|err| ScanError::Propagation {
                id: t.id.clone(),
                err,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let sky = Sky {
        observer,
        fov_centre,
        fov_diameter,
        pole_policy: config.pole_policy,
    };

    let num_samples = num_samples(window.duration_s, config.time_step);
    debug!(
        "Scanning {} aircraft over {num_samples} samples",
        tracks.len()
    );
    let progress = make_scan_progress_bar(num_samples);

    let mut states = vec![IntersectionState::Outside; tracks.len()];
    let mut last_radecs: Vec<Option<RADec>> = vec![None; tracks.len()];
    let mut samples = Vec::with_capacity(num_samples);
    let mut snapshots = Vec::with_capacity(num_samples);
    for offset in sample_offsets(window.duration_s, config.time_step) {
        let time = window.start + Duration::from_seconds(offset);
        let lst =
            local_sidereal_time(observer, time, config.dut1).map_err(ScanError::SiderealTime)?;

        let located = tracks
            .par_iter()
            .zip(motions.par_iter())
            .map(|(track, motion)| sky.locate(track, motion, offset, lst))
            .collect::<Result<Vec<_>, _>>()?;

        let mut snapshot = vec![];
        for (((track, (radec, intersecting)), state), last_radec) in tracks
            .iter()
            .zip(located)
            .zip(states.iter_mut())
            .zip(last_radecs.iter_mut())
        {
            let new_state = state.update(intersecting, time);
            match (*state, new_state) {
                (IntersectionState::Outside, IntersectionState::Inside { .. }) => {
                    debug!("{} ({}) entered the field at {time}", track.id, track.flight_number)
                }
                (IntersectionState::Inside { .. }, IntersectionState::Exited { .. }) => {
                    debug!("{} ({}) left the field at {time}", track.id, track.flight_number)
                }
                _ => (),
            }
            *state = new_state;
            *last_radec = Some(radec);

            if state.is_inside() {
                snapshot.push(FlightPosition {
                    id: track.id.clone(),
                    flight_number: track.flight_number.clone(),
                    ra: radec.ra,
                    dec: radec.dec,
                    heading: track.heading_deg,
                });
            }
        }

        samples.push(time);
        snapshots.push(snapshot);
        progress.inc(1);
    }
    progress.finish();

    if config.close_open_intervals {
        let end = window.end();
        for state in states.iter_mut() {
            *state = state.close(end);
        }
    }

    let tracks = tracks
        .iter()
        .zip(states)
        .zip(last_radecs)
        .map(|((track, state), last_radec)| {
            (
                track.id.clone(),
                TrackOutcome {
                    id: track.id.clone(),
                    flight_number: track.flight_number.clone(),
                    entry: state.entry(),
                    exit: state.exit(),
                    last_radec,
                },
            )
        })
        .collect();

    Ok(ScanOutput {
        samples,
        snapshots,
        tracks,
    })
}

/// Convenience function to make a progress bar while scanning.
fn make_scan_progress_bar(num_samples: usize) -> ProgressBar {
    ProgressBar::with_draw_target(
        Some(num_samples as _),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template("{msg}: [{wide_bar:.blue}] {pos:3}/{len:3} ({elapsed_precise}<{eta_precise})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    )
    .with_position(0)
    .with_message("Scanning exposure")
}
