//! Reactive value container
//!
//! A single-threaded observable cell: it holds a current value, lets callers
//! replace or mutate it, and notifies subscribers synchronously on every change.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Observer<T>)>>,
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<(Observer<T>, T)>>,
    notifying: Cell<bool>,
}

impl<T> Inner<T> {
    fn remove(&self, id: u64) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscriber_id, _)| *subscriber_id != id);
    }
}

/// Observable value holder.
///
/// Cloning a `Writable` produces another handle to the same value.
pub struct Writable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrows the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Registers an observer.
    ///
    /// The observer is called immediately with the current value and then
    /// after every `set` or `update` until the returned handle unsubscribes.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Unsubscriber {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        let observer: Observer<T> = Rc::new(observer);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::clone(&observer)));

        let current = self.get();
        observer(&current);

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Unsubscriber {
            remove: Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            }),
        }
    }

    /// Replaces the value and notifies every subscriber.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify();
    }

    /// Mutates a copy of the value, stores it and notifies every subscriber.
    ///
    /// The mutator runs without any borrow held, so it may read this container.
    pub fn update(&self, mutator: impl FnOnce(&mut T)) {
        let mut next = self.get();
        mutator(&mut next);
        self.set(next);
    }

    /// Whether both handles point at the same value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.get();
        {
            let subscribers = self.inner.subscribers.borrow();
            let mut pending = self.inner.pending.borrow_mut();
            for (_, observer) in subscribers.iter() {
                pending.push_back((Rc::clone(observer), snapshot.clone()));
            }
        }

        // A nested set only queues; the outermost call delivers in order.
        if self.inner.notifying.replace(true) {
            return;
        }

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some((observer, value)) = next else {
                break;
            };
            observer(&value);
        }
        self.inner.notifying.set(false);
    }
}

/// Handle returned by [`Writable::subscribe`].
#[derive(Clone)]
pub struct Unsubscriber {
    remove: Rc<dyn Fn()>,
}

impl Unsubscriber {
    /// Stops delivery to the observer. Calling it again does nothing.
    pub fn unsubscribe(&self) {
        (self.remove)();
    }
}

impl std::fmt::Debug for Unsubscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscriber").finish_non_exhaustive()
    }
}
