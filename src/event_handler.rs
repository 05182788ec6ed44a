use crate::{status_of, Callback, EventError, EventId, Payload, Status};

/// This Trait defines the registration and emission API for a fixed-capacity event table. <br/>
/// Every operation runs to completion on the caller's thread; emission blocks until each invoked callback returns. <br/>
pub trait EventHandler {
    /// Register `callback` under `event`, claiming the first unused event slot if the identifier is new.
    fn on(&mut self, event: EventId, callback: Callback) -> Result<(), EventError>;

    /// Empty the callback slot holding `callback` under `event` and return that slot's index. <br/>
    /// The first slot is index `0`, so an `Ok(0)` must not be read as a bare success flag.
    fn off(&mut self, event: EventId, callback: &Callback) -> Result<usize, EventError>;

    /// Invoke every registered callback of `event` in ascending slot order, stopping at the first non-zero status.
    fn emit(&mut self, event: EventId, payload: Payload<'_>) -> Result<(), EventError>;

    /// Return every event and callback slot to unused. Capacities are kept.
    fn reset(&mut self);

    /// Empty every callback slot of `event` while the identifier keeps its slot. No-op for an unknown event.
    fn reset_event(&mut self, event: EventId);

    /// Get the number of occupied callback slots for a specific event.
    fn listener_count(&self, event: EventId) -> Result<usize, EventError>;

    /// Get a boolean, whether a specific event has any registered listeners.
    fn has_listener(&self, event: EventId) -> bool {
        matches!(self.listener_count(event), Ok(count) if count > 0)
    }

    /// Emit and collapse the outcome into a raw status, `0` when every callback succeeded.
    fn emit_status(&mut self, event: EventId, payload: Payload<'_>) -> Status {
        status_of(&self.emit(event, payload))
    }
}
