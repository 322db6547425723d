// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! How much sky a telescope and camera see.

use clap::Parser;
use log::info;

use super::common::OpticsArgs;
use crate::SkycrossError;

#[derive(Parser, Debug, Clone, Default)]
pub(super) struct FovSizeArgs {
    #[clap(flatten)]
    pub(super) optics_args: OpticsArgs,
}

impl FovSizeArgs {
    pub(super) fn run(self) -> Result<f64, SkycrossError> {
        let optical_config = self.optics_args.parse()?;
        let diameter = optical_config.fov_angular_diameter()?;
        info!(
            "Field of view diameter: {diameter:.6}° ({:.3}')",
            diameter * 60.0
        );
        Ok(diameter)
    }
}
