// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authoritative device registry.
//!
//! # Overview
//!
//! The [`DeviceRegistry`] owns the canonical set of devices, keyed by id, and
//! notifies observers whenever that set really changes:
//!
//! | Call | Entry absent | Entry present, same state | Entry present, new state |
//! |---|---|---|---|
//! | [`add`](DeviceRegistry::add) | insert, `on_add` | overwrite, `on_add` | overwrite, `on_add` |
//! | [`update`](DeviceRegistry::update) | insert, `on_add` | no-op | replace, `on_update` |
//! | [`update_state`](DeviceRegistry::update_state) | no-op | no-op | replace, `on_update` |
//! | [`remove`](DeviceRegistry::remove) | no-op | delete, `on_remove` | delete, `on_remove` |
//!
//! Only the state decides whether an update is a change: a device re-reported
//! with a new name or category but the same state is ignored.
//!
//! # Examples
//!
//! ```
//! use device_registry::{Device, DeviceCategory, DeviceRegistry, DeviceState, UpdateOutcome};
//!
//! let registry = DeviceRegistry::new();
//!
//! let bell = Device::builder()
//!     .id("device0001")
//!     .name("State Device 1")
//!     .category(DeviceCategory::Doorbell)
//!     .state(DeviceState::Inactive)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.update(bell.clone()), UpdateOutcome::Added);
//! assert_eq!(registry.update(bell), UpdateOutcome::Unchanged);
//!
//! registry.update_state("device0001", DeviceState::Active);
//! assert_eq!(registry.get("device0001").unwrap().state(), DeviceState::Active);
//! ```

mod device_registry;
mod outcome;

pub use device_registry::DeviceRegistry;
pub use outcome::UpdateOutcome;
