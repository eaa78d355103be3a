//! # Store Module
//!
//! A small observable value container for client-side state that several
//! components read and write.
//!
//! ## Responsibilities:
//! - Hold the current value behind a cheap, clonable handle
//! - Notify subscribers synchronously after every `set`/`update`
//! - Unsubscribe automatically when a `Subscription` is dropped
//!
//! Components do not poll a store; they subscribe through the
//! `use_store_value` hook, which re-renders them on change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: T,
    /// Bumped on every write; lets a notification round spot a newer value
    version: u64,
    /// True while listeners are being called
    notifying: bool,
    listeners: Vec<(usize, Listener<T>)>,
    next_listener_id: usize,
}

/// Shared handle to an observable value
///
/// Cloning the store clones the handle; all clones see the same value.
pub struct Store<T> {
    inner: Rc<RefCell<StoreInner<T>>>,
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                value,
                version: 0,
                notifying: false,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify every subscriber
    ///
    /// A `set` made from inside a listener only stores the value; the round
    /// in progress then restarts, so every subscriber's last notification is
    /// the value the store ends up holding.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
            if inner.notifying {
                return;
            }
            inner.notifying = true;
        }

        loop {
            // Listeners are collected first so they may read or write the store.
            let (value, version, listeners) = {
                let inner = self.inner.borrow();
                let listeners: Vec<Listener<T>> = inner
                    .listeners
                    .iter()
                    .map(|(_, listener)| listener.clone())
                    .collect();
                (inner.value.clone(), inner.version, listeners)
            };

            for listener in listeners {
                if self.inner.borrow().version != version {
                    break;
                }
                listener(&value);
            }

            let mut inner = self.inner.borrow_mut();
            if inner.version == version {
                inner.notifying = false;
                return;
            }
        }
    }

    /// Derive the next value from the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        let next = f(&current);
        self.set(next);
    }

    /// Register a listener called with the new value after each change
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<StoreInner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().listeners.retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Two handles are equal when they point at the same store
impl<T> PartialEq for Store<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Keeps a listener registered for as long as it is alive
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
