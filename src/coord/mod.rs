// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all coordinate types, and the transform of an aircraft's
//! position into the sky of an observer.

pub mod azel;
pub mod enh;
mod error;
pub mod hadec;
pub mod hms;
pub mod observer;
pub mod radec;
pub mod topocentric;
pub mod xyz;

// Re-exports.
pub use azel::AzEl;
pub use enh::ENH;
pub use error::TransformError;
pub use hadec::HADec;
pub use hms::{Hms, HmsError};
pub use observer::Observer;
pub use radec::RADec;
pub use topocentric::aircraft_to_radec;
pub use xyz::XyzGeocentric;
