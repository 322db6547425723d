// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions around time.

use hifitime::{Duration, Epoch};
use marlu::precession::get_lmst;

use crate::coord::{Observer, TransformError};

/// Get the local mean sidereal time \[radians, [0, 2π)\] at `observer`'s
/// longitude for the UTC instant `time`. `dut1` is UT1 - UTC.
pub fn local_sidereal_time(
    observer: &Observer,
    time: Epoch,
    dut1: Duration,
) -> Result<f64, TransformError> {
    observer.validate()?;
    Ok(crate::math::wrap_tau(get_lmst(
        observer.longitude_rad(),
        time,
        dut1,
    )))
}

/// The offsets \[seconds\] from the start of an exposure at which it is
/// sampled: every multiple of `step` strictly less than `duration`. A zero
/// duration has no samples. A fractional duration is not truncated first, so
/// 10.5 s with a 5 s step is sampled at 0, 5 and 10 s.
pub fn sample_offsets(duration: f64, step: f64) -> impl Iterator<Item = f64> {
    // Multiply rather than accumulate so rounding doesn't drift.
    (0..)
        .map(move |k| k as f64 * step)
        .take_while(move |&offset| offset < duration)
}

/// The number of samples [`sample_offsets`] yields.
pub fn num_samples(duration: f64, step: f64) -> usize {
    if duration <= 0.0 {
        0
    } else {
        (duration / step).ceil() as usize
    }
}

/// (De)serialise an [`Epoch`] as its string form, e.g.
/// "2025-03-13T12:34:22 UTC".
pub(crate) mod epoch_string {
    use std::str::FromStr;

    use hifitime::Epoch;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub(crate) fn serialize<S: Serializer>(e: &Epoch, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(e)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Epoch, D::Error> {
        let s = String::deserialize(d)?;
        Epoch::from_str(&s).map_err(|e| D::Error::custom(format!("invalid time '{s}': {e}")))
    }
}

/// Like [`epoch_string`], but for an optional [`Epoch`].
pub(crate) mod opt_epoch_string {
    use hifitime::Epoch;
    use serde::Serializer;

    pub(crate) fn serialize<S: Serializer>(e: &Option<Epoch>, s: S) -> Result<S::Ok, S::Error> {
        match e {
            Some(e) => s.collect_str(e),
            None => s.serialize_none(),
        }
    }
}
