// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device registry public API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use device_registry::event::DeviceEvent;
use device_registry::network::{NetworkHandler, RegistryHandler};
use device_registry::{
    CallbackObserver, Device, DeviceCategory, DeviceMessage, DeviceObserver, DeviceRegistry,
    DeviceState, UpdateOutcome, ValidationError,
};

/// Observer counting each kind of notification.
#[derive(Default)]
struct Counter {
    adds: AtomicUsize,
    updates: AtomicUsize,
    removes: AtomicUsize,
}

impl Counter {
    fn total(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.removes.load(Ordering::SeqCst)
    }
}

impl DeviceObserver for Counter {
    fn on_add(&self, _device: &Device) {
        self.adds.fetch_add(1, Ordering::SeqCst);
    }

    fn on_update(&self, _device: &Device) {
        self.updates.fetch_add(1, Ordering::SeqCst);
    }

    fn on_remove(&self, _device: &Device) {
        self.removes.fetch_add(1, Ordering::SeqCst);
    }
}

fn state_device(id: &str, category: DeviceCategory, state: DeviceState) -> Device {
    Device::builder()
        .id(id)
        .name("State Device 1")
        .category(category)
        .state(state)
        .build()
        .unwrap()
}

// ============================================================================
// Registry scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn add_new_device_then_update_state() {
        let registry = DeviceRegistry::new();
        let counter = Arc::new(Counter::default());
        registry.add_observer(counter.clone());

        let device = state_device("device0001", DeviceCategory::Doorbell, DeviceState::Inactive);
        registry.update(device);

        let copy = registry.get("device0001").unwrap();
        assert_eq!(copy.state(), DeviceState::Inactive);
        assert_eq!(copy.name(), Some("State Device 1"));

        let updates_before = counter.updates.load(Ordering::SeqCst);
        registry.update_state("device0001", DeviceState::Active);

        assert_eq!(
            registry.get("device0001").unwrap().state(),
            DeviceState::Active
        );
        assert_eq!(counter.updates.load(Ordering::SeqCst) - updates_before, 1);
    }

    #[test]
    fn update_existing_ceiling_fan() {
        let registry = DeviceRegistry::new();
        registry.update(state_device(
            "device0002",
            DeviceCategory::CeilingFan,
            DeviceState::Inactive,
        ));

        registry.update_state("device0002", DeviceState::Active);

        assert_eq!(
            registry.get("device0002").unwrap().state(),
            DeviceState::Active
        );
    }

    #[test]
    fn doorbell_handler_sees_only_doorbell_changes() {
        let registry = DeviceRegistry::new();
        let doorbell_events = Arc::new(AtomicUsize::new(0));
        let events = doorbell_events.clone();
        let count_doorbells = move |device: &Device| {
            if device.category() == Some(DeviceCategory::Doorbell) {
                events.fetch_add(1, Ordering::SeqCst);
            }
        };
        registry.add_observer(Arc::new(
            CallbackObserver::new()
                .on_add(count_doorbells.clone())
                .on_update(count_doorbells),
        ));

        registry.add(state_device("doorbell1", DeviceCategory::Doorbell, DeviceState::Inactive));
        registry.add(state_device("doorbell2", DeviceCategory::Doorbell, DeviceState::Inactive));
        registry.add(state_device("lamp", DeviceCategory::Light, DeviceState::Off));
        registry.update_state("doorbell1", DeviceState::Active);

        assert_eq!(
            registry.get("doorbell1").unwrap().state(),
            DeviceState::Active
        );
        assert_eq!(doorbell_events.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn idempotent_update_notifies_once() {
        let registry = DeviceRegistry::new();
        let counter = Arc::new(Counter::default());
        registry.add_observer(counter.clone());

        let device = state_device("d", DeviceCategory::Light, DeviceState::On);
        registry.update(device.clone());
        registry.update(device);

        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn update_on_absent_matches_add() {
        let via_update = DeviceRegistry::new();
        let via_add = DeviceRegistry::new();
        let update_counter = Arc::new(Counter::default());
        let add_counter = Arc::new(Counter::default());
        via_update.add_observer(update_counter.clone());
        via_add.add_observer(add_counter.clone());

        let device = state_device("d", DeviceCategory::Light, DeviceState::On);
        assert_eq!(via_update.update(device.clone()), UpdateOutcome::Added);
        via_add.add(device);

        assert_eq!(via_update.all_devices(), via_add.all_devices());
        assert_eq!(update_counter.adds.load(Ordering::SeqCst), 1);
        assert_eq!(add_counter.adds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn state_only_dedup_keeps_first_value() {
        let registry = DeviceRegistry::new();
        let counter = Arc::new(Counter::default());
        let first = state_device("d", DeviceCategory::Light, DeviceState::On);
        registry.add(first.clone());
        registry.add_observer(counter.clone());

        let second = Device::builder()
            .id("d")
            .name("Other Name")
            .category(DeviceCategory::CeilingFan)
            .state(DeviceState::On)
            .build()
            .unwrap();
        registry.update(second);

        assert_eq!(counter.total(), 0);
        assert_eq!(registry.get("d"), Some(first));
    }

    #[test]
    fn removal_clears_presence() {
        let registry = DeviceRegistry::new();
        let device = state_device("d", DeviceCategory::GarageDoor, DeviceState::Open);
        registry.add(device.clone());

        registry.remove(&device);

        assert!(!registry.contains("d"));
        assert!(registry.get("d").is_none());
    }

    #[test]
    fn observers_run_in_registration_order() {
        let registry = DeviceRegistry::new();
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        for name in ["O1", "O2"] {
            let order = order.clone();
            registry.add_observer(Arc::new(
                CallbackObserver::new().on_add(move |_| order.lock().push(name)),
            ));
        }

        registry.add(state_device("d", DeviceCategory::Light, DeviceState::On));

        assert_eq!(*order.lock(), vec!["O1", "O2"]);
    }
}

// ============================================================================
// Decoding
// ============================================================================

mod decoding {
    use super::*;

    #[test]
    fn textual_decode_requires_all_keys() {
        let err = Device::from_json(r#"{"id":"d1","state":"on"}"#).unwrap_err();
        assert!(matches!(err, ValidationError::MissingField(_)));
    }

    #[test]
    fn textual_decode_complete_object() {
        let device =
            Device::from_json(r#"{"id":"d1","name":"Lamp","state":"on","type":"light"}"#).unwrap();

        assert_eq!(device.category(), Some(DeviceCategory::Light));
        assert_eq!(device.state(), DeviceState::On);
    }

    #[test]
    fn wire_round_trip_is_asymmetric() {
        let decoded =
            Device::try_from(DeviceMessage::from_slice(br#"{"id":"d1","state":"OFF"}"#).unwrap())
                .unwrap();
        let bytes = decoded.to_message().to_vec().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "d1", "name": "", "type": "DOORBELL", "state": "OFF"})
        );
    }
}

// ============================================================================
// Network boundary
// ============================================================================

mod network {
    use super::*;

    #[tokio::test]
    async fn messages_flow_into_registry_events() {
        let registry = DeviceRegistry::new();
        let mut events = registry.subscribe();
        let handler = RegistryHandler::new(registry.clone());

        handler
            .on_message_received(DeviceMessage::new("garage", DeviceState::Closed))
            .unwrap();
        handler
            .on_message_received(DeviceMessage::new("garage", DeviceState::Closed))
            .unwrap();
        handler
            .on_message_received(DeviceMessage::new("garage", DeviceState::Open))
            .unwrap();

        assert!(matches!(events.recv().await.unwrap(), DeviceEvent::Added { .. }));
        let updated = events.recv().await.unwrap();
        assert!(updated.is_state_change());
        assert_eq!(updated.device().state(), DeviceState::Open);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn rejected_message_leaves_registry_untouched() {
        let registry = DeviceRegistry::new();
        let handler = RegistryHandler::new(registry.clone());

        let result = handler.on_message_received(DeviceMessage::new("", DeviceState::On));

        assert_eq!(result, Err(ValidationError::EmptyId));
        assert!(registry.is_empty());
    }
}

// ============================================================================
// Concurrency
// ============================================================================

mod concurrency {
    use super::*;

    #[test]
    fn concurrent_toggles_never_lose_a_transition() {
        const THREADS: usize = 8;
        const ITERATIONS: usize = 2000;

        let registry = DeviceRegistry::new();
        let counter = Arc::new(Counter::default());
        registry.add(state_device("fan", DeviceCategory::CeilingFan, DeviceState::Off));
        registry.add_observer(counter.clone());

        let changes = Arc::new(AtomicUsize::new(0));
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = registry.clone();
                let changes = changes.clone();
                thread::spawn(move || {
                    for i in 0..ITERATIONS {
                        let state = if (t + i) % 2 == 0 {
                            DeviceState::On
                        } else {
                            DeviceState::Off
                        };
                        if registry.update_state("fan", state).is_change() {
                            changes.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every accepted change flips Off <-> On exactly once.
        let changes = changes.load(Ordering::SeqCst);
        let final_state = registry.get("fan").unwrap().state();
        assert_eq!(
            final_state == DeviceState::On,
            changes % 2 == 1,
            "changes={changes} final={final_state}"
        );
        assert_eq!(counter.updates.load(Ordering::SeqCst), changes);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn concurrent_inserts_of_distinct_ids() {
        let registry = DeviceRegistry::new();
        let counter = Arc::new(Counter::default());
        registry.add_observer(counter.clone());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let registry = registry.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let id = format!("light-{t}-{i}");
                        registry.update(state_device(&id, DeviceCategory::Light, DeviceState::On));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 200);
        assert_eq!(counter.adds.load(Ordering::SeqCst), 200);
    }
}
