// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device Registry - shared device state for home-automation services.
//!
//! This library holds the authoritative in-process view of devices whose
//! binary or enumerated state matters to an application: lights, doors,
//! fans, doorbells, sensors. It tracks what devices *report*; it never
//! commands them.
//!
//! # Features
//!
//! - **Validated devices**: Build with [`DeviceBuilder`], decode from a wire
//!   [`DeviceMessage`], or decode the strict textual form with
//!   [`Device::from_json`]
//! - **Upsert with dedup**: [`DeviceRegistry::update`] only notifies when the
//!   reported state actually changes
//! - **Observers**: [`DeviceObserver`]s are called synchronously, in
//!   registration order, and a panicking observer cannot starve the others
//! - **Broadcast events**: Async tasks can [`subscribe`](DeviceRegistry::subscribe)
//!   to the same notifications
//! - **Thread-safe**: All registry state sits behind one lock; clones of a
//!   registry share it
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use device_registry::{
//!     CallbackObserver, Device, DeviceCategory, DeviceRegistry, DeviceState,
//! };
//!
//! # fn main() -> device_registry::Result<()> {
//! let registry = DeviceRegistry::new();
//!
//! registry.add_observer(Arc::new(
//!     CallbackObserver::new()
//!         .on_add(|device| println!("Device added:\n{device}"))
//!         .on_update(|device| println!("Device updated:\n{device}")),
//! ));
//!
//! let bell = Device::builder()
//!     .id("doorbell1")
//!     .name("Front Door")
//!     .category(DeviceCategory::Doorbell)
//!     .state(DeviceState::Inactive)
//!     .build()?;
//!
//! registry.update(bell);
//! registry.update_state("doorbell1", DeviceState::Active);
//!
//! assert_eq!(registry.get("doorbell1").map(|d| d.state()), Some(DeviceState::Active));
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding Incoming Devices
//!
//! ```
//! use device_registry::{Device, DeviceMessage, DeviceState};
//!
//! # fn main() -> device_registry::Result<()> {
//! // Wire form: name and type are optional
//! let msg = DeviceMessage::from_slice(br#"{"id":"garage","state":"OPEN"}"#)?;
//! let garage = Device::try_from(msg)?;
//! assert_eq!(garage.state(), DeviceState::Open);
//!
//! // Textual form: all four keys required, lowercase tokens
//! let lamp = Device::from_json(r#"{"id":"d1","name":"Lamp","state":"on","type":"light"}"#)?;
//! assert_eq!(lamp.name(), Some("Lamp"));
//! # Ok(())
//! # }
//! ```

mod device;
pub mod error;
pub mod event;
pub mod network;
mod observer;
mod registry;
pub mod types;

pub use device::{Device, DeviceBuilder, DeviceId, DeviceMessage};
pub use error::{Result, ValidationError};
pub use observer::{CallbackObserver, DeviceObserver, ObserverId};
pub use registry::{DeviceRegistry, UpdateOutcome};
pub use types::{DeviceCategory, DeviceState};
