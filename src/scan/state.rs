// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Whether an aircraft is in the field of view.

use hifitime::Epoch;

/// Each aircraft starts `Outside`, may become `Inside` and then `Exited`.
/// `Exited` is final; an aircraft that leaves the field is not tracked back
/// in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum IntersectionState {
    Outside,
    Inside { entry: Epoch },
    Exited { entry: Epoch, exit: Epoch },
}

impl IntersectionState {
    /// Advance the state given whether the aircraft intersects the field of
    /// view at `time`.
    pub(crate) fn update(self, intersecting: bool, time: Epoch) -> IntersectionState {
        match (self, intersecting) {
            (IntersectionState::Outside, true) => IntersectionState::Inside { entry: time },
            (IntersectionState::Inside { entry }, false) => {
                IntersectionState::Exited { entry, exit: time }
            }
            (s, _) => s,
        }
    }

    /// Give an aircraft still inside the field an exit time.
    pub(crate) fn close(self, end: Epoch) -> IntersectionState {
        match self {
            IntersectionState::Inside { entry } => IntersectionState::Exited { entry, exit: end },
            s => s,
        }
    }

    pub(crate) fn is_inside(&self) -> bool {
        matches!(self, IntersectionState::Inside { .. })
    }

    pub(crate) fn entry(&self) -> Option<Epoch> {
        match self {
            IntersectionState::Outside => None,
            IntersectionState::Inside { entry } | IntersectionState::Exited { entry, .. } => {
                Some(*entry)
            }
        }
    }

    pub(crate) fn exit(&self) -> Option<Epoch> {
        match self {
            IntersectionState::Exited { exit, .. } => Some(*exit),
            _ => None,
        }
    }
}
