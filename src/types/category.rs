// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The fixed kind of a device, set once at construction.
///
/// # Examples
///
/// ```
/// use device_registry::DeviceCategory;
///
/// assert_eq!(DeviceCategory::GarageDoor.as_str(), "GARAGEDOOR");
/// assert_eq!(DeviceCategory::from_token("light"), Some(DeviceCategory::Light));
/// assert_eq!(DeviceCategory::from_token("Light"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceCategory {
    /// A doorbell (active/inactive).
    #[default]
    Doorbell,
    /// A garage door (open/closed).
    GarageDoor,
    /// A light (on/off).
    Light,
    /// A ceiling fan (on/off).
    CeilingFan,
}

impl DeviceCategory {
    /// All categories, in wire-code order.
    pub const ALL: [Self; 4] = [Self::Doorbell, Self::GarageDoor, Self::Light, Self::CeilingFan];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Doorbell => "DOORBELL",
            Self::GarageDoor => "GARAGEDOOR",
            Self::Light => "LIGHT",
            Self::CeilingFan => "CEILINGFAN",
        }
    }

    /// Returns the token used by the textual representation.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::Doorbell => "doorbell",
            Self::GarageDoor => "garagedoor",
            Self::Light => "light",
            Self::CeilingFan => "ceilingfan",
        }
    }

    /// Returns the numeric wire code.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::Doorbell => 0,
            Self::GarageDoor => 1,
            Self::Light => 2,
            Self::CeilingFan => 3,
        }
    }

    /// Looks up a textual token. Matching is case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_token() == token)
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DOORBELL" | "0" => Ok(Self::Doorbell),
            "GARAGEDOOR" | "1" => Ok(Self::GarageDoor),
            "LIGHT" | "2" => Ok(Self::Light),
            "CEILINGFAN" | "3" => Ok(Self::CeilingFan),
            _ => Err(ValidationError::UnknownType(s.to_string())),
        }
    }
}
