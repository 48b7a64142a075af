//! Document-level pointer events for click-outside handling.
//!
//! The view root publishes every mouse-down through a [`PointerHub`]. A
//! component that wants to hear about them subscribes on mount and keeps the
//! returned [`Subscription`]; dropping it removes the handler, so nothing
//! outlives the component that registered it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::state::Dropdown;

/// A mouse-down somewhere in the document. `inside` names the dropdown the
/// pointer landed in, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub inside: Option<Dropdown>,
}

type Handler = Rc<dyn Fn(&PointerDown)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Single-threaded publisher of [`PointerDown`] events. Clones share one
/// registry.
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned guard is dropped.
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn subscribe(&self, handler: impl Fn(&PointerDown) + 'static) -> Subscription {
        let mut reg = self.registry.borrow_mut();
        reg.next_id += 1;
        let id = reg.next_id;
        reg.handlers.push((id, Rc::new(handler)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every current subscriber. Returns how many handlers ran.
    pub fn emit(&self, event: PointerDown) -> usize {
        // Snapshot first so handlers may subscribe or unsubscribe re-entrantly.
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Guard for one registered handler.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Explicit counterpart of [`PointerHub::subscribe`].
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
