extern crate alloc;
use alloc::sync::Arc;

/// Identifier of an event class. `NO_EVENT` marks an unused slot.
pub type EventId = u8;

/// Sentinel stored in an unused event slot. Never registrable.
pub const NO_EVENT: EventId = 0;

/// Integer status returned by callbacks. Zero means success.
pub type Status = i32;

/// Status returned by a callback (and by a collapsed emission) on success.
pub const STATUS_OK: Status = 0;

/// Event capacity used by [`EmitterConfig::default`](crate::EmitterConfig).
pub const DEFAULT_EVENT_CAPACITY: usize = 5;

/// Callbacks-per-event capacity used by [`EmitterConfig::default`](crate::EmitterConfig).
pub const DEFAULT_CALLBACK_CAPACITY: usize = 10;

/// The opaque payload handed to every callback of an emission.
///
/// The emitter never reads, copies or bounds-checks it. `None` is a legal
/// payload for events that carry no data.
///
/// # Example
/// ```
/// use rs_fixed_events::{payload, Payload};
///
/// let text = *b"Test";
/// let with_data: Payload = payload::arg_bytes(&text);
/// let empty: Payload = None;
/// assert_eq!(with_data, Some(&b"Test"[..]));
/// assert!(empty.is_none());
/// ```
pub type Payload<'a> = Option<&'a [u8]>;

/// Type alias for a callback handle.
///
/// - Allows any closure (no thread-safety required).
/// - Two handles are the same callback only if they are clones of one `Arc`.
///
/// # Example (embedded/no_std)
/// ```
/// use rs_fixed_events::{callback, Callback, STATUS_OK};
///
/// let cb: Callback = callback(|_| STATUS_OK);
/// assert_eq!(cb(None), 0);
/// ```
#[cfg(not(feature = "threaded"))]
pub type Callback = Arc<dyn Fn(Payload<'_>) -> Status>;

/// Type alias for a callback handle.
///
/// - Requires `Send + Sync` so the emitter can sit behind a lock.
/// - Two handles are the same callback only if they are clones of one `Arc`.
///
/// # Example (threaded)
/// ```
/// use rs_fixed_events::{callback, Callback, STATUS_OK};
///
/// let cb: Callback = callback(|_| STATUS_OK);
/// assert_eq!(cb(None), 0);
/// ```
#[cfg(feature = "threaded")]
pub type Callback = Arc<dyn Fn(Payload<'_>) -> Status + Send + Sync>;

/// Wraps a closure into a new [`Callback`] handle.
#[cfg(not(feature = "threaded"))]
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(Payload<'_>) -> Status + 'static,
{
    Arc::new(f)
}

/// Wraps a closure into a new [`Callback`] handle.
#[cfg(feature = "threaded")]
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(Payload<'_>) -> Status + Send + Sync + 'static,
{
    Arc::new(f)
}
