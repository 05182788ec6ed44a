use std::cell::RefCell;
use std::sync::Arc;

use log::debug;
use parking_lot::ReentrantMutex;

use crate::{Callback, EmitterConfig, EventEmitter, EventError, EventHandler, EventId, Payload};

/// Type alias for a cross-thread shareable `SharedEmitter`.
pub type EventManager = Arc<SharedEmitter>;

/// An [`EventEmitter`] behind one lock, usable through `&self` from many threads.
///
/// The whole table sits under a single `parking_lot::ReentrantMutex`, so every
/// operation is serialized and emission still runs each callback on the
/// calling thread. A callback that calls back into the same `SharedEmitter`
/// re-acquires the lock on its own thread but cannot borrow the table while
/// the emission holds it; the nested call fails with
/// [`EventError::Reentrant`] and leaves the table untouched.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use rs_fixed_events::{callback, EventManager, SharedEmitter};
///
/// let manager: EventManager = Arc::new(SharedEmitter::new(4, 4).unwrap());
/// manager.on(0x01, callback(|_| 0)).unwrap();
///
/// let worker = Arc::clone(&manager);
/// std::thread::spawn(move || worker.emit(0x01, None)).join().unwrap().unwrap();
/// ```
pub struct SharedEmitter {
    config: EmitterConfig,
    inner: ReentrantMutex<RefCell<EventEmitter>>,
}

impl SharedEmitter {
    /// Creates a shared emitter with the given capacities.
    pub fn new(event_capacity: usize, callback_capacity: usize) -> Result<Self, EventError> {
        EventEmitter::new(event_capacity, callback_capacity).map(Self::from)
    }

    /// Creates a shared emitter from a validated [`EmitterConfig`].
    pub fn with_config(config: EmitterConfig) -> Result<Self, EventError> {
        EventEmitter::with_config(config).map(Self::from)
    }

    fn with_emitter<R>(&self, op: impl FnOnce(&mut EventEmitter) -> R) -> Result<R, EventError> {
        let guard = self.inner.lock();
        let mut emitter = guard.try_borrow_mut().map_err(|_| {
            debug!("rejected re-entrant call from a callback");
            EventError::Reentrant
        })?;
        Ok(op(&mut emitter))
    }

    fn with_emitter_ref<R>(&self, op: impl FnOnce(&EventEmitter) -> R) -> Result<R, EventError> {
        let guard = self.inner.lock();
        let emitter = guard.try_borrow().map_err(|_| EventError::Reentrant)?;
        Ok(op(&emitter))
    }

    /// See [`EventHandler::on`].
    pub fn on(&self, event: EventId, callback: Callback) -> Result<(), EventError> {
        self.with_emitter(|emitter| emitter.on(event, callback))?
    }

    /// See [`EventHandler::off`].
    pub fn off(&self, event: EventId, callback: &Callback) -> Result<usize, EventError> {
        self.with_emitter(|emitter| emitter.off(event, callback))?
    }

    /// See [`EventHandler::emit`]. The lock is held until the last invoked callback returns.
    pub fn emit(&self, event: EventId, payload: Payload<'_>) -> Result<(), EventError> {
        self.with_emitter(|emitter| emitter.emit(event, payload))?
    }

    /// See [`EventHandler::reset`]. Fails only when called from inside a callback.
    pub fn reset(&self) -> Result<(), EventError> {
        self.with_emitter(|emitter| emitter.reset())
    }

    /// See [`EventHandler::reset_event`]. Fails only when called from inside a callback.
    pub fn reset_event(&self, event: EventId) -> Result<(), EventError> {
        self.with_emitter(|emitter| emitter.reset_event(event))
    }

    /// See [`EventHandler::listener_count`].
    pub fn listener_count(&self, event: EventId) -> Result<usize, EventError> {
        self.with_emitter_ref(|emitter| emitter.listener_count(event))?
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Exclusive access to the wrapped emitter; no locking needed.
    pub fn get_mut(&mut self) -> &mut EventEmitter {
        self.inner.get_mut().get_mut()
    }

    pub fn into_inner(self) -> EventEmitter {
        self.inner.into_inner().into_inner()
    }
}

impl From<EventEmitter> for SharedEmitter {
    fn from(emitter: EventEmitter) -> Self {
        Self {
            config: *emitter.config(),
            inner: ReentrantMutex::new(RefCell::new(emitter)),
        }
    }
}

impl Default for SharedEmitter {
    fn default() -> Self {
        Self::from(EventEmitter::default())
    }
}

impl core::fmt::Debug for SharedEmitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedEmitter")
            .field("config", &self.config)
            .finish()
    }
}
