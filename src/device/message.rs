// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire message exchanged with the network layer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceId};
use crate::error::ValidationError;
use crate::types::{DeviceCategory, DeviceState};

/// Structured device message as carried over the wire.
///
/// On the way in, only `id` and `state` are required; `name` and `type`
/// may be absent and stay unset on the decoded [`Device`]. On the way out,
/// [`Device::to_message`] fills every field, substituting the zero value
/// for anything the device never had.
///
/// Fields the message does not know about are ignored when decoding.
///
/// # Examples
///
/// ```
/// use device_registry::{Device, DeviceMessage, DeviceState};
///
/// let msg: DeviceMessage = r#"{"id":"door1","state":"OPEN"}"#.parse().unwrap();
/// let device = Device::try_from(msg).unwrap();
///
/// assert_eq!(device.state(), DeviceState::Open);
/// assert_eq!(device.name(), None);
/// assert_eq!(device.category(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMessage {
    /// Device id. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Device category.
    #[serde(
        rename = "type",
        alias = "category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<DeviceCategory>,

    /// Reported state. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DeviceState>,
}

impl DeviceMessage {
    /// Creates a message carrying only the required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, state: DeviceState) -> Self {
        Self {
            id: Some(id.into()),
            state: Some(state),
            ..Self::default()
        }
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: DeviceCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Decodes a message from its JSON wire bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] if the bytes are not a message.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encodes the message to its JSON wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl FromStr for DeviceMessage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl TryFrom<DeviceMessage> for Device {
    type Error = ValidationError;

    fn try_from(msg: DeviceMessage) -> Result<Self, Self::Error> {
        let id = msg.id.ok_or_else(|| ValidationError::missing("id"))?;
        let id = DeviceId::new(id)?;
        let state = msg.state.ok_or_else(|| ValidationError::missing("state"))?;

        Ok(Device {
            id,
            name: msg.name,
            category: msg.category,
            state,
        })
    }
}

impl From<&Device> for DeviceMessage {
    fn from(device: &Device) -> Self {
        Self {
            id: Some(device.id.as_str().to_string()),
            name: Some(device.name.clone().unwrap_or_default()),
            category: Some(device.category.unwrap_or_default()),
            state: Some(device.state),
        }
    }
}
