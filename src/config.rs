use core::alloc::Layout;

use crate::{EventError, Listener, DEFAULT_CALLBACK_CAPACITY, DEFAULT_EVENT_CAPACITY};

/// Table dimensions for an [`EventEmitter`](crate::EventEmitter).
///
/// Both capacities are fixed for the emitter's whole life; `reset` never
/// changes them.
///
/// # Example
/// ```
/// use rs_fixed_events::EmitterConfig;
///
/// let config = EmitterConfig::default();
/// assert_eq!(config.event_capacity, 5);
/// assert_eq!(config.callback_capacity, 10);
/// assert!(EmitterConfig::new(0, 4).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EmitterConfig {
    /// Maximum number of distinct event identifiers.
    pub event_capacity: usize,
    /// Maximum number of callbacks per event identifier.
    pub callback_capacity: usize,
}

impl EmitterConfig {
    pub const fn new(event_capacity: usize, callback_capacity: usize) -> Self {
        Self {
            event_capacity,
            callback_capacity,
        }
    }

    /// Rejects a zero capacity, or a callback table whose byte size cannot be addressed.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.event_capacity == 0 || self.callback_capacity == 0 {
            return Err(EventError::InvalidCapacity);
        }
        let slots = self
            .event_capacity
            .checked_mul(self.callback_capacity)
            .ok_or(EventError::InvalidCapacity)?;
        Layout::array::<Option<Listener>>(slots).map_err(|_| EventError::InvalidCapacity)?;
        Ok(())
    }
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY, DEFAULT_CALLBACK_CAPACITY)
    }
}
