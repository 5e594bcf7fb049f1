// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reported device state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The last-known condition a device reported.
///
/// States are not cross-checked against [`DeviceCategory`](crate::DeviceCategory):
/// a light may hold [`DeviceState::Open`] if that is what was reported.
///
/// # Examples
///
/// ```
/// use device_registry::DeviceState;
///
/// assert_eq!(DeviceState::Inactive.as_str(), "INACTIVE");
/// assert_eq!(DeviceState::from_token("closed"), Some(DeviceState::Closed));
/// assert!("ajar".parse::<DeviceState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceState {
    /// Powered on.
    #[default]
    On,
    /// Powered off.
    Off,
    /// Triggered (a doorbell that is ringing).
    Active,
    /// Idle.
    Inactive,
    /// Open.
    Open,
    /// Closed.
    Closed,
}

impl DeviceState {
    /// All states, in wire-code order.
    pub const ALL: [Self; 6] = [
        Self::On,
        Self::Off,
        Self::Active,
        Self::Inactive,
        Self::Open,
        Self::Closed,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns the token used by the textual representation.
    #[must_use]
    pub const fn as_token(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the numeric wire code.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::On => 0,
            Self::Off => 1,
            Self::Active => 2,
            Self::Inactive => 3,
            Self::Open => 4,
            Self::Closed => 5,
        }
    }

    /// Looks up a textual token. Matching is case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_token() == token)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ON" | "0" => Ok(Self::On),
            "OFF" | "1" => Ok(Self::Off),
            "ACTIVE" | "2" => Ok(Self::Active),
            "INACTIVE" | "3" => Ok(Self::Inactive),
            "OPEN" | "4" => Ok(Self::Open),
            "CLOSED" | "5" => Ok(Self::Closed),
            _ => Err(ValidationError::UnknownState(s.to_string())),
        }
    }
}
