// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Predict which aircraft cross the field of view, and report it.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use log::info;
use thiserror::Error;

use crate::scan::{predict, PredictError, PredictionRequest, PredictionResult, ScanConfig};

/// Parameters needed to do a prediction.
#[derive(Debug)]
pub(crate) struct PredictParams {
    pub(crate) request: PredictionRequest,

    pub(crate) config: ScanConfig,

    /// Where the results are written as JSON, if anywhere.
    pub(crate) output: Option<PathBuf>,
}

impl PredictParams {
    pub(crate) fn run(&self) -> Result<PredictionResult, PredictRunError> {
        let PredictParams {
            request,
            config,
            output,
        } = self;

        let result = predict(request, config)?;

        let num_crossing = result
            .tracks
            .values()
            .filter(|t| t.entry.is_some())
            .count();
        info!(
            "{num_crossing} of {} aircraft crossed the field of view",
            result.tracks.len()
        );
        for track in result.tracks.values() {
            if let Some(entry) = track.entry {
                match track.exit {
                    Some(exit) => info!(
                        "  {} ({}): {entry} to {exit}",
                        track.flight_number, track.id
                    ),
                    None => info!(
                        "  {} ({}): {entry} until after the exposure",
                        track.flight_number, track.id
                    ),
                }
            }
        }

        if let Some(output) = output {
            let mut f = BufWriter::new(File::create(output)?);
            serde_json::to_writer_pretty(&mut f, &result)?;
            f.flush()?;
            info!("Wrote {}", output.display());
        }

        Ok(result)
    }
}

#[derive(Error, Debug)]
pub(crate) enum PredictRunError {
    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error("Couldn't write results as json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
