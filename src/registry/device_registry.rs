// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device registry with change notification.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;

use crate::device::{Device, DeviceId};
use crate::event::{DeviceEvent, EventBus};
use crate::observer::{DeviceObserver, ObserverId};
use crate::types::{DeviceCategory, DeviceState};

use super::UpdateOutcome;

/// Observers captured under the lock, invoked after it is released.
type ObserverSnapshot = Vec<(ObserverId, Arc<dyn DeviceObserver>)>;

/// Kind of notification delivered to observers.
#[derive(Debug, Clone, Copy)]
enum Notification {
    Add,
    Update,
    Remove,
}

impl Notification {
    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Update => "update",
            Self::Remove => "remove",
        }
    }

    fn deliver(self, observer: &dyn DeviceObserver, device: &Device) {
        match self {
            Self::Add => observer.on_add(device),
            Self::Update => observer.on_update(device),
            Self::Remove => observer.on_remove(device),
        }
    }

    fn event(self, device: Device) -> DeviceEvent {
        match self {
            Self::Add => DeviceEvent::added(device),
            Self::Update => DeviceEvent::updated(device),
            Self::Remove => DeviceEvent::removed(device),
        }
    }
}

/// State guarded by the registry lock.
#[derive(Default)]
struct RegistryState {
    devices: HashMap<DeviceId, Device>,
    /// Registration order is notification order.
    observers: Vec<(ObserverId, Arc<dyn DeviceObserver>)>,
    next_observer_id: u64,
}

impl RegistryState {
    fn observer_snapshot(&self) -> ObserverSnapshot {
        self.observers.clone()
    }
}

/// Authoritative, thread-safe set of devices plus its observers.
///
/// `DeviceRegistry` is a handle: clones share the same devices and
/// observers. Create one with [`DeviceRegistry::new`] where the application
/// is composed and hand clones to the collaborators that need it.
///
/// # Thread Safety
///
/// Every mutation and read goes through a single `parking_lot::RwLock`, so
/// a read always sees a fully-applied mutation, and two concurrent updates
/// of the same id cannot both conclude "no change". The observer list and
/// the notified device are captured under the lock; observers run after it
/// is released, so a slow observer never blocks other registry calls.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use device_registry::{CallbackObserver, Device, DeviceCategory, DeviceRegistry, DeviceState};
///
/// let registry = DeviceRegistry::new();
/// registry.add_observer(Arc::new(
///     CallbackObserver::new().on_add(|device| println!("Device added:\n{device}")),
/// ));
///
/// let lamp = Device::builder()
///     .id("lamp")
///     .name("Desk Lamp")
///     .category(DeviceCategory::Light)
///     .state(DeviceState::Off)
///     .build()
///     .unwrap();
/// registry.add(lamp);
///
/// assert!(registry.contains("lamp"));
/// ```
#[derive(Clone)]
pub struct DeviceRegistry {
    state: Arc<RwLock<RegistryState>>,
    event_bus: EventBus,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_event_bus(EventBus::new())
    }

    /// Creates an empty registry whose event bus buffers `event_capacity`
    /// events per subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `event_capacity` is zero.
    #[must_use]
    pub fn with_capacity(event_capacity: usize) -> Self {
        Self::with_event_bus(EventBus::with_capacity(event_capacity))
    }

    fn with_event_bus(event_bus: EventBus) -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::default())),
            event_bus,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns a copy of the device stored under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Device> {
        self.state.read().devices.get(id).cloned()
    }

    /// Returns `true` if a device is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.state.read().devices.contains_key(id)
    }

    /// Returns a snapshot of every stored device.
    #[must_use]
    pub fn all_devices(&self) -> HashMap<DeviceId, Device> {
        self.state.read().devices.clone()
    }

    /// Returns the ids of every stored device.
    #[must_use]
    pub fn device_ids(&self) -> Vec<DeviceId> {
        self.state.read().devices.keys().cloned().collect()
    }

    /// Returns copies of the stored devices of one category.
    #[must_use]
    pub fn devices_by_category(&self, category: DeviceCategory) -> Vec<Device> {
        self.state
            .read()
            .devices
            .values()
            .filter(|d| d.category() == Some(category))
            .cloned()
            .collect()
    }

    /// Returns the number of stored devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().devices.len()
    }

    /// Returns `true` if no device is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().devices.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Inserts `device`, overwriting any entry with the same id.
    ///
    /// Always notifies `on_add`. Returns the device previously stored under
    /// that id, if any.
    pub fn add(&self, device: Device) -> Option<Device> {
        let (previous, observers) = {
            let mut state = self.state.write();
            let previous = state.devices.insert(device.id().clone(), device.clone());
            (previous, state.observer_snapshot())
        };

        tracing::debug!(
            device_id = %device.id(),
            state = %device.state(),
            replaced = previous.is_some(),
            "Device added"
        );
        self.notify(&observers, Notification::Add, device);
        previous
    }

    /// Removes the entry with the same id as `device`.
    ///
    /// Notifies `on_remove` with the stored value when an entry was removed.
    /// Removing an absent device is a silent no-op.
    pub fn remove(&self, device: &Device) -> Option<Device> {
        self.remove_by_id(device.id().as_str())
    }

    /// Removes the entry stored under `id`.
    ///
    /// See [`remove`](Self::remove).
    pub fn remove_by_id(&self, id: &str) -> Option<Device> {
        let (removed, observers) = {
            let mut state = self.state.write();
            let Some(removed) = state.devices.remove(id) else {
                drop(state);
                tracing::debug!(device_id = %id, "Device not present, ignoring removal");
                return None;
            };
            (removed, state.observer_snapshot())
        };

        tracing::debug!(device_id = %removed.id(), "Device removed");
        self.notify(&observers, Notification::Remove, removed.clone());
        Some(removed)
    }

    /// Inserts or updates `device`.
    ///
    /// - Unknown id: behaves like [`add`](Self::add).
    /// - Known id, different state: the stored entry is replaced by
    ///   `device` and `on_update` fires.
    /// - Known id, same state: nothing happens, even if the name or
    ///   category differ.
    pub fn update(&self, device: Device) -> UpdateOutcome {
        let (outcome, observers) = {
            let mut state = self.state.write();
            let outcome = match state.devices.get(device.id()) {
                None => UpdateOutcome::Added,
                Some(stored) if stored.state() == device.state() => UpdateOutcome::Unchanged,
                Some(_) => UpdateOutcome::Updated,
            };
            if outcome.is_change() {
                state.devices.insert(device.id().clone(), device.clone());
            }
            (outcome, state.observer_snapshot())
        };

        match outcome {
            UpdateOutcome::Added => {
                tracing::debug!(device_id = %device.id(), state = %device.state(), "Device added");
                self.notify(&observers, Notification::Add, device);
            }
            UpdateOutcome::Updated => {
                tracing::debug!(device_id = %device.id(), state = %device.state(), "Device updated");
                self.notify(&observers, Notification::Update, device);
            }
            UpdateOutcome::Unchanged | UpdateOutcome::NotFound => {
                tracing::debug!(device_id = %device.id(), "No state change, ignoring update");
            }
        }
        outcome
    }

    /// Sets the state of the device stored under `id`.
    ///
    /// Unlike [`update`](Self::update), an unknown id is a silent no-op
    /// ([`UpdateOutcome::NotFound`]): there is nothing to build a device from.
    pub fn update_state(&self, id: &str, new_state: DeviceState) -> UpdateOutcome {
        let (updated, observers) = {
            let mut state = self.state.write();
            let Some(stored) = state.devices.get_mut(id) else {
                drop(state);
                tracing::debug!(device_id = %id, "Device not present, ignoring state update");
                return UpdateOutcome::NotFound;
            };
            if stored.state() == new_state {
                drop(state);
                tracing::debug!(device_id = %id, "No state change, ignoring update");
                return UpdateOutcome::Unchanged;
            }
            *stored = stored.with_state(new_state);
            let updated = stored.clone();
            (updated, state.observer_snapshot())
        };

        tracing::debug!(device_id = %updated.id(), state = %new_state, "Device updated");
        self.notify(&observers, Notification::Update, updated);
        UpdateOutcome::Updated
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers an observer and returns its token.
    ///
    /// Registering the same `Arc` again is a no-op that returns the token
    /// it already has.
    pub fn add_observer(&self, observer: Arc<dyn DeviceObserver>) -> ObserverId {
        let mut state = self.state.write();
        if let Some((id, _)) = state
            .observers
            .iter()
            .find(|(_, existing)| Arc::ptr_eq(existing, &observer))
        {
            return *id;
        }

        state.next_observer_id += 1;
        let id = ObserverId::new(state.next_observer_id);
        state.observers.push((id, observer));
        tracing::debug!(observer = %id, "Observer registered");
        id
    }

    /// Unregisters an observer.
    ///
    /// Returns `true` if the observer was registered.
    pub fn remove_observer(&self, id: ObserverId) -> bool {
        let mut state = self.state.write();
        let before = state.observers.len();
        state.observers.retain(|(existing, _)| *existing != id);
        let removed = state.observers.len() != before;
        if removed {
            tracing::debug!(observer = %id, "Observer unregistered");
        }
        removed
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.state.read().observers.len()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Subscribes to the registry's broadcast events.
    ///
    /// The receiver gets a [`DeviceEvent`] for every notification delivered
    /// to observers after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DeviceEvent> {
        self.event_bus.subscribe()
    }

    /// Returns the number of active event subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.event_bus.subscriber_count()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// Invokes each observer in order, then publishes the event.
    ///
    /// A panicking observer is logged and skipped.
    fn notify(&self, observers: &ObserverSnapshot, kind: Notification, device: Device) {
        for (id, observer) in observers {
            let delivered = catch_unwind(AssertUnwindSafe(|| kind.deliver(observer.as_ref(), &device)));
            if delivered.is_err() {
                tracing::warn!(
                    observer = %id,
                    device_id = %device.id(),
                    notification = kind.as_str(),
                    "Observer panicked, continuing with remaining observers"
                );
            }
        }
        self.event_bus.publish(kind.event(device));
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("DeviceRegistry")
            .field("device_count", &state.devices.len())
            .field("observer_count", &state.observers.len())
            .finish_non_exhaustive()
    }
}
