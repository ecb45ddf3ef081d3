//! Listener registry and subscription handles
//!
//! A listener stays registered exactly as long as its [`Subscription`] is
//! alive. Dropping the handle unregisters it, so no callback fires into an
//! owner that has already been torn down.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use super::SocketEvent;

/// Callback invoked for every transport event
pub type PacketListener = Arc<dyn Fn(&SocketEvent) + Send + Sync>;

#[derive(Default)]
struct RegistryInner {
    listeners: DashMap<u64, PacketListener>,
    next_id: AtomicU64,
}

/// Set of registered listeners, shared by a transport implementation
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<RegistryInner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays active until the handle is dropped
    pub fn register(&self, listener: PacketListener) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        self.inner.listeners.insert(id, listener);

        tracing::trace!(listener_id = id, "Listener registered");

        Subscription {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every listener in registration order
    ///
    /// Listeners are collected before any of them runs, so a listener may
    /// drop subscriptions without deadlocking the registry.
    pub fn dispatch(&self, event: &SocketEvent) -> usize {
        let mut listeners: Vec<(u64, PacketListener)> = self
            .inner
            .listeners
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();
        listeners.sort_unstable_by_key(|(id, _)| *id);

        for (_, listener) in &listeners {
            listener(event);
        }

        listeners.len()
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Handle keeping a listener registered
#[must_use = "dropping a Subscription unregisters its listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RegistryInner>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Check if the listener is still registered
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|inner| inner.listeners.contains_key(&self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.listeners.remove(&self.id);
            tracing::trace!(listener_id = self.id, "Listener unregistered");
        }
    }
}
