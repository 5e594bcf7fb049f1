// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device data model.
//!
//! A [`Device`] is an immutable record of one physical unit: its id, display
//! name, category and last-reported state. There are three ways to obtain
//! one, each validating before it returns:
//!
//! - [`DeviceBuilder`] - every field supplied by the caller
//! - [`DeviceMessage`] - the wire form received from the network layer
//! - [`Device::from_json`] / [`Device::from_value`] - the strict textual form
//!
//! "Changing" a device means producing a new value with
//! [`Device::with_state`] and handing it to the
//! [`DeviceRegistry`](crate::DeviceRegistry), which decides whether to store it.

mod builder;
mod id;
mod message;
mod text;

use std::fmt;

pub use builder::DeviceBuilder;
pub use id::DeviceId;
pub use message::DeviceMessage;

use crate::types::{DeviceCategory, DeviceState};

/// A device whose binary or enumerated state is tracked by the registry.
///
/// `name` and `category` are optional because the wire message may omit
/// them. Devices built with [`DeviceBuilder`] or decoded from the textual
/// form always carry a category.
///
/// # Examples
///
/// ```
/// use device_registry::{Device, DeviceCategory, DeviceState};
///
/// let bell = Device::builder()
///     .id("doorbell1")
///     .name("Front Door")
///     .category(DeviceCategory::Doorbell)
///     .state(DeviceState::Inactive)
///     .build()
///     .unwrap();
///
/// let ringing = bell.with_state(DeviceState::Active);
/// assert_eq!(bell.state(), DeviceState::Inactive);
/// assert_eq!(ringing.state(), DeviceState::Active);
/// assert_eq!(ringing.id(), bell.id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    id: DeviceId,
    name: Option<String>,
    category: Option<DeviceCategory>,
    state: DeviceState,
}

impl Device {
    /// Returns a builder for a new device.
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::new()
    }

    /// Returns the device id.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the human-readable name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the device category, if known.
    #[must_use]
    pub fn category(&self) -> Option<DeviceCategory> {
        self.category
    }

    /// Returns the last-reported state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Returns a copy of this device holding `state`.
    #[must_use]
    pub fn with_state(&self, state: DeviceState) -> Self {
        Self {
            state,
            ..self.clone()
        }
    }

    /// Projects the device onto its wire message.
    ///
    /// Every field is emitted. An unset name becomes `""` and an unset
    /// category becomes [`DeviceCategory::default`].
    #[must_use]
    pub fn to_message(&self) -> DeviceMessage {
        DeviceMessage::from(self)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device ID: {}", self.id)?;
        writeln!(f, "Device Name: {}", self.name.as_deref().unwrap_or("-"))?;
        match self.category {
            Some(category) => writeln!(f, "Device Type: {category}")?,
            None => writeln!(f, "Device Type: -")?,
        }
        write!(f, "Device State: {}", self.state)
    }
}
