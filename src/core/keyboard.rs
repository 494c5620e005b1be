use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

/// A key as named by DOM `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowLeft => f.write_str("ArrowLeft"),
            Key::ArrowRight => f.write_str("ArrowRight"),
            Key::Other(name) => f.write_str(name),
        }
    }
}

type Listener = Rc<dyn Fn(&Key)>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Page-level key event source. Listeners stay attached for exactly as long
/// as the [`ListenerGuard`] returned by [`KeyboardHub::subscribe`] lives.
#[derive(Clone, Default)]
pub struct KeyboardHub {
    inner: Rc<RefCell<HubInner>>,
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> ListenerGuard
    where
        F: Fn(&Key) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, Rc::new(listener));
        tracing::trace!(listener_id = id, "keyboard listener attached");

        ListenerGuard {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `key` to every attached listener in attach order and
    /// returns how many were notified.
    pub fn dispatch(&self, key: &Key) -> usize {
        // snapshot first so listeners may attach or detach while running
        let listeners: Vec<Listener> = self.inner.borrow().listeners.values().cloned().collect();
        for listener in &listeners {
            listener(key);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for KeyboardHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Detaches its listener when dropped.
pub struct ListenerGuard {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.hub.upgrade() {
            inner.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(listener_id = self.id, "keyboard listener detached");
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
