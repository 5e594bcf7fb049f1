// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device event types.

use crate::device::{Device, DeviceId};

/// Events emitted by the device registry.
///
/// Each event mirrors one observer callback and carries the same device
/// value the observers received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A device was inserted (or overwritten) in the registry.
    Added {
        /// The stored device.
        device: Device,
    },

    /// A stored device changed state.
    Updated {
        /// The device after the change.
        device: Device,
    },

    /// A device was removed from the registry.
    Removed {
        /// The device that was removed.
        device: Device,
    },
}

impl DeviceEvent {
    /// Creates a device added event.
    #[must_use]
    pub fn added(device: Device) -> Self {
        Self::Added { device }
    }

    /// Creates a device updated event.
    #[must_use]
    pub fn updated(device: Device) -> Self {
        Self::Updated { device }
    }

    /// Creates a device removed event.
    #[must_use]
    pub fn removed(device: Device) -> Self {
        Self::Removed { device }
    }

    /// Returns the device carried by this event.
    #[must_use]
    pub fn device(&self) -> &Device {
        match self {
            Self::Added { device } | Self::Updated { device } | Self::Removed { device } => device,
        }
    }

    /// Returns the id of the device carried by this event.
    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        self.device().id()
    }

    /// Returns `true` if this is a lifecycle event (added/removed).
    #[must_use]
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Self::Added { .. } | Self::Removed { .. })
    }

    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}
