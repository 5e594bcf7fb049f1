// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Network handler backed by a device registry.

use tokio::sync::mpsc;

use crate::device::{Device, DeviceMessage};
use crate::error::Result;
use crate::registry::DeviceRegistry;

use super::NetworkHandler;

/// Outgoing message queue of a connected peer.
pub type PeerSender = mpsc::UnboundedSender<DeviceMessage>;

/// Wires transport callbacks into a [`DeviceRegistry`].
///
/// - A new peer receives one message per stored device, so it starts from
///   the current registry contents.
/// - Every received message is decoded and applied with
///   [`DeviceRegistry::update`], so repeated reports of an unchanged state
///   are absorbed without notifying observers.
///
/// # Examples
///
/// ```
/// use device_registry::network::{NetworkHandler, RegistryHandler};
/// use device_registry::{DeviceMessage, DeviceRegistry, DeviceState};
///
/// let registry = DeviceRegistry::new();
/// let handler = RegistryHandler::new(registry.clone());
///
/// handler
///     .on_message_received(DeviceMessage::new("garage", DeviceState::Open))
///     .unwrap();
/// assert!(registry.contains("garage"));
/// ```
#[derive(Debug, Clone)]
pub struct RegistryHandler {
    registry: DeviceRegistry,
}

impl RegistryHandler {
    /// Creates a handler that applies messages to `registry`.
    #[must_use]
    pub fn new(registry: DeviceRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry this handler feeds.
    #[must_use]
    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }
}

impl NetworkHandler for RegistryHandler {
    type Connection = PeerSender;

    fn on_connect(&self, connection: PeerSender) {
        let devices = self.registry.all_devices();
        tracing::debug!(device_count = devices.len(), "Peer connected, sending device snapshot");

        for device in devices.values() {
            if connection.send(device.to_message()).is_err() {
                tracing::debug!("Peer disconnected during snapshot");
                return;
            }
        }
    }

    fn on_message_received(&self, message: DeviceMessage) -> Result<()> {
        let device = Device::try_from(message).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected device message");
        })?;
        let outcome = self.registry.update(device);
        tracing::debug!(?outcome, "Applied device message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{DeviceCategory, DeviceState};

    #[test]
    fn message_updates_registry() {
        let registry = DeviceRegistry::new();
        let handler = RegistryHandler::new(registry.clone());

        handler
            .on_message_received(
                DeviceMessage::new("bell", DeviceState::Inactive)
                    .with_category(DeviceCategory::Doorbell),
            )
            .unwrap();
        handler
            .on_message_received(DeviceMessage::new("bell", DeviceState::Active))
            .unwrap();

        let stored = registry.get("bell").unwrap();
        assert_eq!(stored.state(), DeviceState::Active);
    }

    #[test]
    fn invalid_message_is_reported_and_not_applied() {
        let registry = DeviceRegistry::new();
        let handler = RegistryHandler::new(registry.clone());

        let err = handler
            .on_message_received(DeviceMessage {
                id: Some("bell".to_string()),
                ..DeviceMessage::default()
            })
            .unwrap_err();

        assert_eq!(err, ValidationError::MissingField("state".to_string()));
        assert!(registry.is_empty());
    }

    #[test]
    fn connect_sends_snapshot() {
        let registry = DeviceRegistry::new();
        let handler = RegistryHandler::new(registry.clone());
        handler
            .on_message_received(DeviceMessage::new("a", DeviceState::On))
            .unwrap();
        handler
            .on_message_received(DeviceMessage::new("b", DeviceState::Off))
            .unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        handler.on_connect(tx);

        let mut ids = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            assert_eq!(msg.category, Some(DeviceCategory::Doorbell));
            ids.push(msg.id.unwrap());
        }
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn connect_tolerates_closed_peer() {
        let registry = DeviceRegistry::new();
        let handler = RegistryHandler::new(registry);
        handler
            .on_message_received(DeviceMessage::new("a", DeviceState::On))
            .unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        handler.on_connect(tx);
    }
}
