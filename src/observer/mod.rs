// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observers of device lifecycle events.
//!
//! # Overview
//!
//! - [`DeviceObserver`] - Capability implemented by anything that reacts to
//!   devices being added, updated or removed
//! - [`ObserverId`] - Token returned at registration, used to unregister
//! - [`CallbackObserver`] - Observer assembled from closures
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use device_registry::{CallbackObserver, DeviceRegistry};
//!
//! let registry = DeviceRegistry::new();
//!
//! let id = registry.add_observer(Arc::new(
//!     CallbackObserver::new().on_update(|device| println!("{} is now {}", device.id(), device.state())),
//! ));
//!
//! // Later, unregister
//! registry.remove_observer(id);
//! ```
//!
//! Callbacks run synchronously on the thread that performed the mutation,
//! in registration order, after the registry has released its lock.

mod callback;
mod device_observer;

pub use callback::CallbackObserver;
pub use device_observer::{DeviceObserver, ObserverId};
