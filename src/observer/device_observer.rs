// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observer capability and registration token.

use std::fmt;

use crate::device::Device;

/// Capability notified of device lifecycle events.
///
/// Each callback receives the value the registry holds after the mutation
/// (or, for [`on_remove`](Self::on_remove), the value it just dropped).
/// Callbacks are invoked synchronously and one at a time; a callback must
/// complete before the next observer is called.
///
/// A panicking callback is contained by the registry: it is logged and the
/// remaining observers still run.
///
/// # Examples
///
/// ```
/// use device_registry::{Device, DeviceCategory, DeviceObserver};
///
/// struct DoorbellLogger;
///
/// impl DeviceObserver for DoorbellLogger {
///     fn on_add(&self, device: &Device) {
///         if device.category() == Some(DeviceCategory::Doorbell) {
///             println!("Device added:\n{device}");
///         }
///     }
///
///     fn on_update(&self, device: &Device) {
///         if device.category() == Some(DeviceCategory::Doorbell) {
///             println!("Device updated:\n{device}");
///         }
///     }
///
///     fn on_remove(&self, _device: &Device) {}
/// }
/// ```
pub trait DeviceObserver: Send + Sync {
    /// Called after a device was inserted.
    fn on_add(&self, device: &Device);

    /// Called after a stored device changed state.
    fn on_update(&self, device: &Device);

    /// Called after a device was removed.
    fn on_remove(&self, device: &Device);
}

/// Token identifying a registered observer.
///
/// Returned by [`DeviceRegistry::add_observer`](crate::DeviceRegistry::add_observer)
/// and unique within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

impl ObserverId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}
