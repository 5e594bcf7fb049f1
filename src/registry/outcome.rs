// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result of an update call.

/// What an update call did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// The id was unknown and the device was inserted; `on_add` fired.
    Added,
    /// The stored device changed state; `on_update` fired.
    Updated,
    /// The stored device already had this state; nothing happened.
    Unchanged,
    /// The id was unknown and the call does not insert; nothing happened.
    NotFound,
}

impl UpdateOutcome {
    /// Returns `true` if the registry was mutated and observers notified.
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Added | Self::Updated)
    }
}
