// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary with the network layer.
//!
//! Transport I/O lives outside this crate. A transport calls into a
//! [`NetworkHandler`] when a peer connects and for every [`DeviceMessage`]
//! it receives; [`RegistryHandler`] is the handler that feeds those
//! messages into a [`DeviceRegistry`](crate::DeviceRegistry).
//!
//! [`DeviceMessage`]: crate::DeviceMessage

mod handler;
mod registry_handler;

pub use handler::NetworkHandler;
pub use registry_handler::{PeerSender, RegistryHandler};
