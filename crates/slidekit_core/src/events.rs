//! Observer notification
//!
//! Components never call listeners directly. They queue events while they
//! mutate state, and the owner flushes the queue once the mutation is done.
//! Delivery is synchronous, on the calling thread, in the order events were
//! queued, and each subscriber sees events in subscription order.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`EventEmitter::subscribe`]
    pub struct SubscriptionId;
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// Ordered event emitter with deferred delivery
pub struct EventEmitter<E> {
    ids: SlotMap<SubscriptionId, ()>,
    /// Listeners in subscription order
    listeners: Vec<(SubscriptionId, Listener<E>)>,
    pending: Vec<E>,
}

impl<E> EventEmitter<E> {
    pub fn new() -> Self {
        Self {
            ids: SlotMap::with_key(),
            listeners: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Register a listener
    ///
    /// The listener receives every event flushed after this call.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = self.ids.insert(());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener
    ///
    /// Returns `false` if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.ids.remove(id).is_none() {
            return false;
        }
        self.listeners.retain(|(sid, _)| *sid != id);
        true
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Queue an event for the next [`flush`](Self::flush)
    pub fn queue(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Queue several events, preserving their order
    pub fn queue_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.pending.extend(events);
    }

    /// Whether events are waiting for delivery
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Deliver all queued events to all listeners
    ///
    /// Returns the number of events delivered.
    pub fn flush(&mut self) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let events = std::mem::take(&mut self.pending);
        for event in &events {
            for (_, listener) in self.listeners.iter_mut() {
                listener(event);
            }
        }

        tracing::trace!(
            "EventEmitter: delivered {} events to {} listeners",
            events.len(),
            self.listeners.len()
        );
        events.len()
    }

    /// Drop queued events without delivering them
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }
}

impl<E> Default for EventEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for EventEmitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}
