use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Process-wide broadcast fired after any mutating ledger operation.
///
/// Delivery is synchronous and in registration order; there is no payload and
/// no replay (a listener registered after a notification never sees it, so
/// consumers should query eagerly on mount). Everything runs on the single UI
/// thread, so listeners invoked during `notify` observe post-write state.
pub struct ChangeNotifier {
    registry: Rc<RefCell<Registry>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Registers a listener and returns its unsubscribe handle. Dropping the
    /// handle removes the listener, so a view holds it for its own lifetime.
    pub fn subscribe<F: Fn() + 'static>(&self, listener: F) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn notify(&self) {
        // Snapshot first so a listener may subscribe or unsubscribe while
        // notifications are being delivered.
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by `subscribe`; unsubscribes when dropped.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Explicit teardown, for call sites where a bare `drop` reads poorly.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
