// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Network handler trait.

use crate::device::DeviceMessage;
use crate::error::Result;

/// Entry points a transport calls as connections come and go.
///
/// A handler decides for itself whether an incoming message concerns it; a
/// doorbell plugin, for example, may ignore garage door messages.
pub trait NetworkHandler: Send + Sync {
    /// Handle the transport passes for a newly established connection.
    type Connection;

    /// Called when a new connection is established.
    fn on_connect(&self, connection: Self::Connection);

    /// Called for every message received on any connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be turned into a device. The
    /// transport decides whether to drop or retry the message.
    fn on_message_received(&self, message: DeviceMessage) -> Result<()>;
}
