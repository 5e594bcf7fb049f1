// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closure-backed observer.

use std::sync::Arc;

use crate::device::Device;
use crate::observer::DeviceObserver;

/// Type alias for device callbacks.
type DeviceCallback = Arc<dyn Fn(&Device) + Send + Sync>;

/// A [`DeviceObserver`] built from closures.
///
/// Events without a registered closure are ignored.
///
/// # Examples
///
/// ```
/// use device_registry::{CallbackObserver, DeviceObserver};
///
/// let observer = CallbackObserver::new()
///     .on_add(|device| println!("added {}", device.id()))
///     .on_remove(|device| println!("removed {}", device.id()));
/// ```
#[derive(Clone, Default)]
pub struct CallbackObserver {
    on_add: Option<DeviceCallback>,
    on_update: Option<DeviceCallback>,
    on_remove: Option<DeviceCallback>,
}

impl CallbackObserver {
    /// Creates an observer that ignores every event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the closure run when a device is added.
    #[must_use]
    pub fn on_add<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Device) + Send + Sync + 'static,
    {
        self.on_add = Some(Arc::new(callback));
        self
    }

    /// Sets the closure run when a device changes state.
    #[must_use]
    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Device) + Send + Sync + 'static,
    {
        self.on_update = Some(Arc::new(callback));
        self
    }

    /// Sets the closure run when a device is removed.
    #[must_use]
    pub fn on_remove<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Device) + Send + Sync + 'static,
    {
        self.on_remove = Some(Arc::new(callback));
        self
    }
}

impl DeviceObserver for CallbackObserver {
    fn on_add(&self, device: &Device) {
        if let Some(callback) = &self.on_add {
            callback(device);
        }
    }

    fn on_update(&self, device: &Device) {
        if let Some(callback) = &self.on_update {
            callback(device);
        }
    }

    fn on_remove(&self, device: &Device) {
        if let Some(callback) = &self.on_remove {
            callback(device);
        }
    }
}

impl std::fmt::Debug for CallbackObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver")
            .field("on_add", &self.on_add.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::types::{DeviceCategory, DeviceState};

    fn light() -> Device {
        Device::builder()
            .id("lamp")
            .category(DeviceCategory::Light)
            .state(DeviceState::On)
            .build()
            .unwrap()
    }

    #[test]
    fn dispatches_to_matching_closure() {
        let adds = Arc::new(AtomicU32::new(0));
        let removes = Arc::new(AtomicU32::new(0));
        let adds_clone = adds.clone();
        let removes_clone = removes.clone();

        let observer = CallbackObserver::new()
            .on_add(move |_| {
                adds_clone.fetch_add(1, Ordering::SeqCst);
            })
            .on_remove(move |_| {
                removes_clone.fetch_add(1, Ordering::SeqCst);
            });

        let device = light();
        DeviceObserver::on_add(&observer, &device);
        DeviceObserver::on_update(&observer, &device);
        DeviceObserver::on_add(&observer, &device);

        assert_eq!(adds.load(Ordering::SeqCst), 2);
        assert_eq!(removes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn empty_observer_ignores_everything() {
        let observer = CallbackObserver::new();
        let device = light();

        DeviceObserver::on_add(&observer, &device);
        DeviceObserver::on_update(&observer, &device);
        DeviceObserver::on_remove(&observer, &device);
    }

    #[test]
    fn debug_shows_registered_closures() {
        let observer = CallbackObserver::new().on_update(|_| {});
        let debug = format!("{observer:?}");

        assert!(debug.contains("CallbackObserver"));
        assert!(debug.contains("on_update: true"));
        assert!(debug.contains("on_add: false"));
    }
}
