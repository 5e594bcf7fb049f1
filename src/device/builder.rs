// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use crate::device::{Device, DeviceId};
use crate::error::ValidationError;
use crate::types::{DeviceCategory, DeviceState};

/// Builder for constructing a [`Device`] field by field.
///
/// # Examples
///
/// ```
/// use device_registry::{Device, DeviceCategory, DeviceState};
///
/// let device = Device::builder()
///     .id("device0001")
///     .name("State Device 1")
///     .category(DeviceCategory::Doorbell)
///     .state(DeviceState::Inactive)
///     .build()
///     .unwrap();
///
/// assert_eq!(device.id().as_str(), "device0001");
/// assert_eq!(device.state(), DeviceState::Inactive);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviceBuilder {
    id: Option<String>,
    name: Option<String>,
    category: Option<DeviceCategory>,
    state: Option<DeviceState>,
}

impl DeviceBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the device id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the human-readable name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the device category.
    #[must_use]
    pub fn category(mut self, category: DeviceCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets the reported state.
    #[must_use]
    pub fn state(mut self, state: DeviceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Builds the device.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The id is unset or empty ([`ValidationError::EmptyId`])
    /// - The state is unset ([`ValidationError::MissingField`])
    /// - The category is unset ([`ValidationError::MissingField`])
    pub fn build(self) -> Result<Device, ValidationError> {
        let id = DeviceId::new(self.id.unwrap_or_default())?;
        let state = self.state.ok_or_else(|| ValidationError::missing("state"))?;
        let category = self
            .category
            .ok_or_else(|| ValidationError::missing("category"))?;

        Ok(Device {
            id,
            name: self.name,
            category: Some(category),
            state,
        })
    }
}
