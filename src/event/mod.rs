// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast events for asynchronous consumers.
//!
//! Observers are the synchronous way to react to registry changes. Tasks that
//! would rather await changes can subscribe to the registry's [`EventBus`],
//! which carries the same notifications as [`DeviceEvent`] values over a
//! tokio broadcast channel.
//!
//! # Examples
//!
//! ```
//! use device_registry::event::{DeviceEvent, EventBus};
//! use device_registry::{Device, DeviceCategory, DeviceState};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let device = Device::builder()
//!     .id("lamp")
//!     .category(DeviceCategory::Light)
//!     .state(DeviceState::On)
//!     .build()
//!     .unwrap();
//! bus.publish(DeviceEvent::added(device));
//! ```

mod device_event;
mod event_bus;

pub use device_event::DeviceEvent;
pub use event_bus::EventBus;
