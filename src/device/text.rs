// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Textual (JSON object) representation of a device.
//!
//! Unlike the wire message, the textual form is strict: it must hold exactly
//! the keys `id`, `name`, `state` and `type`, all strings, and the `state` and
//! `type` tokens must match the lowercase vocabulary exactly.

use serde_json::{Map, Value};

use crate::device::{Device, DeviceId};
use crate::error::ValidationError;
use crate::types::{DeviceCategory, DeviceState};

/// Keys of the textual form, in the order they are checked.
const FIELDS: [&str; 4] = ["id", "name", "state", "type"];

impl Device {
    /// Decodes a device from a JSON object string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Malformed`] if `text` is not JSON, and any
    /// error [`Device::from_value`] reports otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use device_registry::{Device, DeviceCategory, DeviceState, ValidationError};
    ///
    /// let lamp = Device::from_json(r#"{"id":"d1","name":"Lamp","state":"on","type":"light"}"#).unwrap();
    /// assert_eq!(lamp.category(), Some(DeviceCategory::Light));
    /// assert_eq!(lamp.state(), DeviceState::On);
    ///
    /// let err = Device::from_json(r#"{"id":"d1","state":"on"}"#).unwrap_err();
    /// assert_eq!(err, ValidationError::MissingField("name".into()));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Decodes a device from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `value` is not an object ([`ValidationError::Malformed`])
    /// - A key is absent ([`ValidationError::MissingField`])
    /// - An extra key is present ([`ValidationError::UnknownField`])
    /// - A value is not a string ([`ValidationError::InvalidField`])
    /// - The id is empty ([`ValidationError::EmptyId`])
    /// - The `type` token is unknown ([`ValidationError::UnknownType`])
    /// - The `state` token is unknown ([`ValidationError::UnknownState`])
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::Malformed("expected a JSON object".to_string()))?;

        if let Some(field) = FIELDS.iter().find(|field| !object.contains_key(**field)) {
            return Err(ValidationError::missing(field));
        }
        if let Some(key) = object.keys().find(|key| !FIELDS.contains(&key.as_str())) {
            return Err(ValidationError::UnknownField(key.clone()));
        }

        let id = DeviceId::new(string_field(object, "id")?)?;
        let name = string_field(object, "name")?;

        let state_token = string_field(object, "state")?;
        let state = DeviceState::from_token(state_token)
            .ok_or_else(|| ValidationError::UnknownState(state_token.to_string()))?;

        let type_token = string_field(object, "type")?;
        let category = DeviceCategory::from_token(type_token)
            .ok_or_else(|| ValidationError::UnknownType(type_token.to_string()))?;

        Ok(Self {
            id,
            name: Some(name.to_string()),
            category: Some(category),
            state,
        })
    }

    /// Encodes the device in its textual form.
    ///
    /// Unset optional fields are written as their zero value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "id": self.id.as_str(),
            "name": self.name.as_deref().unwrap_or_default(),
            "state": self.state.as_token(),
            "type": self.category.unwrap_or_default().as_token(),
        })
    }
}

fn string_field<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a str, ValidationError> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::InvalidField {
            field: field.to_string(),
            message: "expected a string".to_string(),
        }),
        None => Err(ValidationError::missing(field)),
    }
}
