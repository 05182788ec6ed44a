use thiserror::Error;

use crate::{Status, STATUS_OK};

/// Errors that can occur in the event system.
///
/// Every variant maps onto a fixed numeric code through [`EventError::code`],
/// so callers that speak raw status integers see the same values on every
/// target. A failed operation never changes the emitter's tables.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    /// Emitting:
    /// - The identifier was never registered.
    #[error("unknown event")]
    UnknownEvent,

    /// Emitting:
    /// - The identifier owns a row but every callback slot in it is empty.
    #[error("event has no listeners")]
    EventHasNoListeners,

    /// Adding Listener:
    /// - Every event slot is taken by another identifier.
    #[error("event table is full")]
    EventsFull,

    /// Adding Listener:
    /// - Every callback slot of the event's row is taken.
    #[error("callback table for event is full")]
    CallbacksFull,

    /// Removing Listener:
    /// - The identifier was never registered.
    #[error("unknown event on off")]
    UnknownEventOnOff,

    /// Removing Listener:
    /// - The callback is not stored under the identifier.
    #[error("callback not registered")]
    CallbackNotRegistered,

    /// Creating Emitter:
    /// - One of the capacities is zero.
    #[error("capacities must be non-zero")]
    InvalidCapacity,

    /// Adding Listener:
    /// - Identifier `0` is the unused-slot sentinel.
    #[error("event id 0 is reserved")]
    ReservedEvent,

    /// Adding Listener:
    /// - The same callback handle is already stored under the identifier.
    #[error("callback already registered")]
    CallbackAlreadyRegistered,

    /// A callback tried to use the emitter that is currently invoking it.
    #[error("re-entrant call from a callback")]
    Reentrant,

    /// Emitting:
    /// - The callback in `slot` returned a non-zero status; later slots were skipped.
    #[error("callback in slot {slot} failed with status {status}")]
    CallbackFailed { slot: usize, status: Status },
}

impl EventError {
    /// The raw status code for this error.
    ///
    /// `CallbackFailed` yields the callback's own status verbatim.
    ///
    /// # Example
    /// ```
    /// use rs_fixed_events::EventError;
    ///
    /// assert_eq!(EventError::EventsFull.code(), 20);
    /// assert_eq!(EventError::CallbackFailed { slot: 0, status: 0x10 }.code(), 0x10);
    /// ```
    pub const fn code(&self) -> Status {
        match self {
            EventError::UnknownEvent => 10,
            EventError::EventHasNoListeners => 11,
            EventError::EventsFull => 20,
            EventError::CallbacksFull => 21,
            EventError::UnknownEventOnOff => 30,
            EventError::CallbackNotRegistered => 31,
            EventError::InvalidCapacity => 40,
            EventError::ReservedEvent => 41,
            EventError::CallbackAlreadyRegistered => 50,
            EventError::Reentrant => 60,
            EventError::CallbackFailed { status, .. } => *status,
        }
    }
}

impl From<EventError> for Status {
    fn from(err: EventError) -> Self {
        err.code()
    }
}

/// Collapses a registration or emission result into a single raw status,
/// `0` on success.
///
/// # Example
/// ```
/// use rs_fixed_events::{status_of, EventEmitter, EventHandler};
///
/// let mut emitter = EventEmitter::default();
/// assert_eq!(status_of(&emitter.emit(0xFF, None)), 10);
/// ```
pub fn status_of(result: &Result<(), EventError>) -> Status {
    match result {
        Ok(()) => STATUS_OK,
        Err(err) => err.code(),
    }
}

/// Errors raised by the payload helpers in [`crate::payload`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// The emission carried no payload.
    #[error("no payload")]
    Missing,

    /// The bytes to copy do not fit in the destination buffer.
    #[error("payload of {len} bytes does not fit a {capacity} byte buffer")]
    TooLong { len: usize, capacity: usize },

    /// The payload is not exactly the size of the requested type.
    #[error("expected a {expected} byte payload, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// The copied bytes are not valid UTF-8.
    #[error("payload is not valid utf-8")]
    NotUtf8,
}
