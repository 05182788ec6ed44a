extern crate alloc;
use alloc::sync::Arc;

use crate::{Callback, Payload, Status};

/// A handle for one stored callback.
///
/// `Listener` owns a clone of the caller's [`Callback`] `Arc`, never the
/// closure's captured state. Equality is handle identity: two listeners are
/// equal only if they hold clones of the same `Arc`.
///
/// # Examples
///
/// ```
/// use rs_fixed_events::{callback, Listener};
///
/// let cb = callback(|_| 0);
/// let listener = Listener::new(cb.clone());
/// assert!(listener.is(&cb));
/// assert!(!listener.is(&callback(|_| 0)));
/// ```
pub struct Listener {
    callback: Callback,
}

impl Listener {
    /// Create a new listener around a callback handle.
    pub fn new(callback: Callback) -> Self {
        Self { callback }
    }

    /// Returns a reference to the callback handle for this listener.
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Check whether `callback` is the same `Arc` as the one this listener holds.
    #[inline]
    pub fn is(&self, callback: &Callback) -> bool {
        Arc::ptr_eq(&self.callback, callback)
    }

    /// Synchronously invoke the callback with the given payload and return its status.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::{callback, Listener};
    ///
    /// let listener = Listener::new(callback(|payload| payload.map_or(1, |bytes| bytes.len() as i32)));
    /// assert_eq!(listener.call(Some(&b"abc"[..])), 3);
    /// assert_eq!(listener.call(None), 1);
    /// ```
    #[inline]
    pub fn call(&self, payload: Payload<'_>) -> Status {
        (self.callback)(payload)
    }
}

impl Clone for Listener {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.callback = Arc::clone(&source.callback);
    }
}

impl From<Callback> for Listener {
    fn from(callback: Callback) -> Self {
        Self::new(callback)
    }
}

impl core::fmt::Debug for Listener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Arc::as_ptr(&self.callback).cast::<()>())
            .finish()
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}
impl Eq for Listener {}
