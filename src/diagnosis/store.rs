//! Observable value stores for diagnosis results.
//!
//! A [`Store`] holds at most one value and a list of listeners.  `set` and
//! `clear` replace the value and then call every listener synchronously, in
//! subscription order.  Listeners run with the value unlocked, so they may
//! read the store or drop their own subscription from inside the callback.
//!
//! Writers are serialized for the whole update-and-notify step: concurrent
//! `set`/`clear` calls deliver notifications one update at a time, and the
//! last notification a listener sees always matches `get_current()`.  A
//! listener must therefore not call `set` or `clear` on the store that is
//! notifying it.
//!
//! [`DiagnosisStores`] bundles the two stores the navigator needs; construct
//! one per session (or per test) instead of sharing a process-wide global.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::types::{DiagnosisAnalysis, DiagnosisResponse};

type Listener<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

struct Inner<T> {
    value: Option<T>,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

fn lock_inner<T>(inner: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    // Listeners never run under the lock, so a poisoned guard still holds a
    // consistent value.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Thread-safe publish/subscribe holder for the latest value of `T`.
///
/// Updates from different threads are applied and announced in the same
/// order.  Cheap to clone; clones share the same value and listeners.
///
/// # Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use care_navigator::diagnosis::Store;
///
/// let store: Store<String> = Store::new("example");
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let sub = store.subscribe(move |v: Option<&String>| sink.lock().unwrap().push(v.cloned()));
///
/// store.set("flu".to_string());
/// store.clear();
/// assert_eq!(*seen.lock().unwrap(), vec![Some("flu".to_string()), None]);
///
/// assert!(sub.unsubscribe());
/// assert_eq!(store.subscriber_count(), 0);
/// ```
pub struct Store<T> {
    name: &'static str,
    inner: Arc<Mutex<Inner<T>>>,
    /// Held across update + notification so writers never interleave.
    writer: Arc<Mutex<()>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Arc::clone(&self.inner),
            writer: Arc::clone(&self.writer),
        }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    /// Create an empty store.  `name` only appears in log messages.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(Inner {
                value: None,
                listeners: Vec::new(),
                next_id: 0,
            })),
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// Register `listener`; it is called after every `set` and `clear`.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<T>
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        let mut inner = lock_inner(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        Subscription {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// The current value, if any.
    pub fn get_current(&self) -> Option<T> {
        lock_inner(&self.inner).value.clone()
    }

    /// Replace the value and notify listeners.
    pub fn set(&self, value: T) {
        self.replace(Some(value));
    }

    /// Remove the value and notify listeners.
    pub fn clear(&self) {
        self.replace(None);
    }

    pub fn subscriber_count(&self) -> usize {
        lock_inner(&self.inner).listeners.len()
    }

    fn replace(&self, value: Option<T>) {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let (snapshot, listeners) = {
            let mut inner = lock_inner(&self.inner);
            inner.value = value;
            let listeners: Vec<Listener<T>> =
                inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (inner.value.clone(), listeners)
        };

        for listener in listeners {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| listener(snapshot.as_ref())));
            if outcome.is_err() {
                log::error!("{} store listener panicked", self.name);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the listener registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
#[must_use = "dropping a Subscription does not unsubscribe; keep it to unsubscribe later"]
pub struct Subscription<T> {
    inner: Weak<Mutex<Inner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Remove the listener.  Returns `false` if the store is gone or the
    /// listener was already removed.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let mut inner = lock_inner(&inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|(id, _)| *id != self.id);
        inner.listeners.len() != before
    }
}

// ---------------------------------------------------------------------------
// DiagnosisStores
// ---------------------------------------------------------------------------

/// The navigator's stores: the full diagnosis response and the most recent
/// analysis extracted from it.
#[derive(Clone)]
pub struct DiagnosisStores {
    pub response: Store<DiagnosisResponse>,
    pub latest: Store<DiagnosisAnalysis>,
}

impl DiagnosisStores {
    pub fn new() -> Self {
        Self {
            response: Store::new("diagnosis response"),
            latest: Store::new("latest diagnosis"),
        }
    }

    /// Store `response`; its analysis, when present, also becomes the latest
    /// diagnosis.
    pub fn publish(&self, response: DiagnosisResponse) {
        if let Some(analysis) = response.analysis.clone() {
            self.latest.set(analysis);
        }
        self.response.set(response);
    }

    /// Clear both stores.
    pub fn reset(&self) {
        self.response.clear();
        self.latest.clear();
    }
}

impl Default for DiagnosisStores {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
